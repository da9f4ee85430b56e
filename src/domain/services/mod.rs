//! # Domain Services
//!
//! ドメインが依存するサービスの抽象化
//!
//! - **AuthService**: 利用者の認証・認可の判定

pub mod auth_service;
