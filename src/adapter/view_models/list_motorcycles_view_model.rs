//! List Motorcycles View Model
//!
//! 一覧レスポンスを表示用に変換

use serde::Serialize;

use crate::application::dto::list_motorcycles_response::ListMotorcyclesResponse;
use crate::domain::constants::MotorcycleId;
use crate::domain::entities::motorcycle::Motorcycle;
use crate::domain::errors::DomainError;

/// 一覧の1行分
///
/// タイムスタンプはRFC 3339形式の文字列で表す
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotorcycleView {
    pub id: MotorcycleId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub created_utc: String,
    pub modified_utc: Option<String>,
}

impl From<&Motorcycle> for MotorcycleView {
    fn from(motorcycle: &Motorcycle) -> Self {
        Self {
            id: motorcycle.id(),
            make: motorcycle.make.clone(),
            model: motorcycle.model.clone(),
            year: motorcycle.year,
            vin: motorcycle.vin.clone(),
            created_utc: motorcycle.created_utc().to_rfc3339(),
            modified_utc: motorcycle.modified_utc().map(|t| t.to_rfc3339()),
        }
    }
}

/// バイク一覧のView Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListMotorcyclesViewModel {
    motorcycles: Vec<MotorcycleView>,
    message: String,
    error: Option<String>,
}

impl ListMotorcyclesViewModel {
    /// レスポンスをView Modelに変換
    ///
    /// # Errors
    ///
    /// 生成されたメッセージが空の場合にエラーを返す
    pub fn from_response(response: &ListMotorcyclesResponse) -> Result<Self, DomainError> {
        let view_model = match response.error() {
            Some(error) => Self {
                motorcycles: Vec::new(),
                message: error.to_string(),
                error: Some(error.to_string()),
            },
            None => Self {
                motorcycles: response.motorcycles().iter().map(MotorcycleView::from).collect(),
                message: format!("Found {} motorcycle(s).", response.motorcycles().len()),
                error: None,
            },
        };

        if view_model.message.trim().is_empty() {
            return Err(DomainError::validation("message", "is required"));
        }

        Ok(view_model)
    }

    pub fn motorcycles(&self) -> &[MotorcycleView] {
        &self.motorcycles
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
