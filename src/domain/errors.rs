//! # Domain Errors
//!
//! ドメイン層・アプリケーション層で共通に使うエラー型

use thiserror::Error;

use super::constants::MotorcycleId;
use super::entities::authorization_role::AuthorizationRole;

/// ドメインエラー
///
/// Interactorはこのエラーをレスポンスに包んで返すため、
/// `Clone` と `PartialEq` を実装する
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("operation failed due to not being authenticated, so please contact your system administrator")]
    NotAuthenticated,

    #[error("operation failed due to not having the required '{role}' authorization role, so please contact your system administrator")]
    NotAuthorized { role: AuthorizationRole },

    #[error("a motorcycle with the VIN '{vin}' already exists in the repository")]
    DuplicateVin { vin: String },

    #[error("cannot insert this motorcycle because the ID {id} already exists")]
    DuplicateId { id: MotorcycleId },

    #[error("motorcycle with ID {id} was not found")]
    NotFound { id: MotorcycleId },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("repository error: {message}")]
    Storage { message: String },
}

impl DomainError {
    /// 検証エラーを作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
