//! Insert Motorcycle View Model
//!
//! 登録レスポンスを表示用に変換

use serde::Serialize;

use crate::application::dto::insert_motorcycle_response::InsertMotorcycleResponse;
use crate::domain::constants::{MotorcycleId, INVALID_ENTITY_ID, MIN_ENTITY_ID};
use crate::domain::errors::DomainError;

pub const INSERT_SUCCESS_MESSAGE: &str = "Successfully inserted a new motorcycle.";

/// 登録結果のView Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertMotorcycleViewModel {
    id: MotorcycleId,
    message: String,
    error: Option<String>,
}

impl InsertMotorcycleViewModel {
    /// 新しいView Modelを作成
    ///
    /// # Errors
    ///
    /// メッセージが空の場合、または成功時のIDが `MIN_ENTITY_ID` 未満、
    /// 失敗時のIDが `INVALID_ENTITY_ID` でない場合にエラーを返す
    pub fn new(
        id: MotorcycleId,
        message: impl Into<String>,
        error: Option<String>,
    ) -> Result<Self, DomainError> {
        let view_model = Self {
            id,
            message: message.into(),
            error,
        };

        view_model.validate()?;

        Ok(view_model)
    }

    /// レスポンスをView Modelに変換
    pub fn from_response(response: &InsertMotorcycleResponse) -> Result<Self, DomainError> {
        match response.error() {
            Some(error) => {
                let text = error.to_string();
                Self::new(INVALID_ENTITY_ID, text.clone(), Some(text))
            }
            None => Self::new(response.id(), INSERT_SUCCESS_MESSAGE, None),
        }
    }

    pub fn id(&self) -> MotorcycleId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.message.trim().is_empty() {
            return Err(DomainError::validation("message", "is required"));
        }

        match self.error {
            None if self.id < MIN_ENTITY_ID => Err(DomainError::validation(
                "id",
                format!("must be at least {}", MIN_ENTITY_ID),
            )),
            Some(_) if self.id != INVALID_ENTITY_ID => Err(DomainError::validation(
                "id",
                format!("must be {} when an error is present", INVALID_ENTITY_ID),
            )),
            _ => Ok(()),
        }
    }
}
