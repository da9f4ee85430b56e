//! # List Motorcycles Response DTO
//!
//! バイク一覧レスポンスのData Transfer Object

use crate::domain::entities::motorcycle::Motorcycle;
use crate::domain::errors::DomainError;

/// バイク一覧レスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMotorcyclesResponse {
    motorcycles: Vec<Motorcycle>,
    error: Option<DomainError>,
}

impl ListMotorcyclesResponse {
    /// 新しいレスポンスを作成
    ///
    /// # Errors
    ///
    /// 失敗レスポンスがバイクを含む場合にエラーを返す
    pub fn new(
        motorcycles: Vec<Motorcycle>,
        error: Option<DomainError>,
    ) -> Result<Self, DomainError> {
        if error.is_some() && !motorcycles.is_empty() {
            return Err(DomainError::validation(
                "motorcycles",
                "must be empty for a failed listing",
            ));
        }

        Ok(Self { motorcycles, error })
    }

    /// 失敗レスポンスを作成
    pub fn failure(error: DomainError) -> Self {
        Self {
            motorcycles: Vec::new(),
            error: Some(error),
        }
    }

    pub fn motorcycles(&self) -> &[Motorcycle] {
        &self.motorcycles
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.error.as_ref()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
