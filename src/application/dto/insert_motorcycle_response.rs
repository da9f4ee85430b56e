//! # Insert Motorcycle Response DTO
//!
//! バイク登録レスポンスのData Transfer Object

use crate::domain::constants::{MotorcycleId, INVALID_ENTITY_ID, MIN_ENTITY_ID};
use crate::domain::errors::DomainError;

/// バイク登録レスポンス
///
/// 成功時は新しいID、失敗時は `INVALID_ENTITY_ID` とエラーを持つ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertMotorcycleResponse {
    id: MotorcycleId,
    error: Option<DomainError>,
}

impl InsertMotorcycleResponse {
    /// 新しいレスポンスを作成
    ///
    /// # Errors
    ///
    /// 成功レスポンスのIDが `MIN_ENTITY_ID` 未満の場合、
    /// または失敗レスポンスのIDが `INVALID_ENTITY_ID` でない場合にエラーを返す
    pub fn new(id: MotorcycleId, error: Option<DomainError>) -> Result<Self, DomainError> {
        match error {
            None if id < MIN_ENTITY_ID => Err(DomainError::validation(
                "id",
                format!("must be at least {} for a successful insert", MIN_ENTITY_ID),
            )),
            Some(_) if id != INVALID_ENTITY_ID => Err(DomainError::validation(
                "id",
                format!("must be {} for a failed insert", INVALID_ENTITY_ID),
            )),
            error => Ok(Self { id, error }),
        }
    }

    /// 失敗レスポンスを作成
    pub fn failure(error: DomainError) -> Self {
        Self {
            id: INVALID_ENTITY_ID,
            error: Some(error),
        }
    }

    pub fn id(&self) -> MotorcycleId {
        self.id
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.error.as_ref()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
