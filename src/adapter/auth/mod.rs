//! Authentication Module
//!
//! AuthServiceの実装

pub mod static_auth_service;

pub use static_auth_service::StaticAuthService;
