//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository trait と AuthService trait に依存（実装には依存しない）
//! - 失敗はエラーとして伝播させず、レスポンスDTOに包んで返す
//!
//! ## 構成要素
//!
//! - **dto**: リクエスト/レスポンスの Data Transfer Object
//! - **use_cases**: ユースケース（Interactor）

pub mod dto;
pub mod use_cases;
