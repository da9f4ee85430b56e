//! View Models
//!
//! レスポンスDTOを表示用の構造に変換する
//!
//! - **InsertMotorcycleViewModel**: 登録結果
//! - **ListMotorcyclesViewModel**: バイク一覧

pub mod insert_motorcycle_view_model;
pub mod list_motorcycles_view_model;

pub use insert_motorcycle_view_model::InsertMotorcycleViewModel;
pub use list_motorcycles_view_model::{ListMotorcyclesViewModel, MotorcycleView};
