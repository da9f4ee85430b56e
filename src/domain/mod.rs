//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - フレームワークに依存しない
//! - データの保存先や認証方式について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **constants**: エンティティIDや検証ルールの定数
//! - **entities**: ビジネスエンティティ（Motorcycle, AuthorizationRole）
//! - **errors**: ドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: 認証サービス trait

pub mod constants;
pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
