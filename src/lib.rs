//! # Motominder
//!
//! バイク（モーターサイクル）の登録情報を管理するCRUDライブラリ
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、Repository trait、認証サービス trait（外部依存なし）
//! - **Application層**: リクエスト/レスポンスDTOとユースケース（Interactor）
//! - **Adapter層**: インメモリRepository、設定ファイル認証、View Model
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure / Presentation）
pub mod adapter;

// Driver層（CLI）
pub mod driver;
