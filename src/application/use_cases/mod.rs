//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **InsertMotorcycleInteractor**: 認証・認可・VIN重複チェックを経たバイクの登録
//! - **ListMotorcyclesInteractor**: 登録済みバイクの一覧取得

pub mod insert_motorcycle;
pub mod list_motorcycles;
