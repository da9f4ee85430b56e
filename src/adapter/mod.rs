//! Adapter Layer
//!
//! Domain層の抽象の実装と、表示用の変換

pub mod auth;
pub mod config;
pub mod repositories;
pub mod view_models;
