//! # Domain Constants
//!
//! エンティティIDと検証ルールの定数

/// モーターサイクルの主キー型
pub type MotorcycleId = i64;

/// 失敗レスポンスに設定される無効なエンティティID
pub const INVALID_ENTITY_ID: MotorcycleId = 0;

/// Repositoryが割り当てる最小のエンティティID
pub const MIN_ENTITY_ID: MotorcycleId = 1;

/// 受け付ける最も古い年式
pub const MIN_MOTORCYCLE_YEAR: i32 = 1885;

pub const MAX_MAKE_LENGTH: usize = 20;
pub const MAX_MODEL_LENGTH: usize = 20;

/// VIN（車台番号）の文字数
pub const VIN_LENGTH: usize = 17;
