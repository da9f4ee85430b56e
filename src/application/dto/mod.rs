//! # Data Transfer Objects
//!
//! Interactorとの間でやり取りするリクエスト/レスポンス
//!
//! 全てのDTOは生成時に自己検証し、不正な値のインスタンスは作られない

pub mod insert_motorcycle_request;
pub mod insert_motorcycle_response;
pub mod list_motorcycles_request;
pub mod list_motorcycles_response;
