//! # Insert Motorcycle Use Case
//!
//! バイク登録ユースケース
//!
//! ## 事前条件
//!
//! - 利用者が認証済みであること
//! - 利用者が `Admin` ロールを持つこと
//! - 同じVINのバイクが登録されていないこと
//!
//! ## 事後条件
//!
//! 新しいバイクがRepositoryに登録され、そのIDがレスポンスで返される

use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::insert_motorcycle_request::InsertMotorcycleRequest;
use crate::application::dto::insert_motorcycle_response::InsertMotorcycleResponse;
use crate::domain::constants::MotorcycleId;
use crate::domain::entities::authorization_role::AuthorizationRole;
use crate::domain::entities::motorcycle::Motorcycle;
use crate::domain::errors::DomainError;
use crate::domain::repositories::motorcycle_repository::MotorcycleRepository;
use crate::domain::services::auth_service::AuthService;

/// バイク登録に必要なロール
pub const INSERT_REQUIRED_ROLE: AuthorizationRole = AuthorizationRole::Admin;

/// バイク登録ユースケース
///
/// 各ステップは最初の失敗で打ち切られ、失敗はレスポンスに包んで返される
pub struct InsertMotorcycleInteractor<R: MotorcycleRepository, A: AuthService> {
    motorcycle_repository: Arc<R>,
    auth_service: Arc<A>,
}

impl<R: MotorcycleRepository, A: AuthService> InsertMotorcycleInteractor<R, A> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `motorcycle_repository` - バイクリポジトリ
    /// * `auth_service` - 認証サービス
    pub fn new(motorcycle_repository: Arc<R>, auth_service: Arc<A>) -> Self {
        Self {
            motorcycle_repository,
            auth_service,
        }
    }

    /// 登録リクエストを処理する
    ///
    /// # Arguments
    ///
    /// * `request` - 検証済みの登録リクエスト
    ///
    /// # Returns
    ///
    /// 成功時は新しいIDを持つレスポンス、
    /// 失敗時は `INVALID_ENTITY_ID` とエラーを持つレスポンス
    pub async fn handle(&self, request: &InsertMotorcycleRequest) -> InsertMotorcycleResponse {
        match self.insert(request).await {
            Ok(id) => {
                info!("Inserted motorcycle {} (VIN {})", id, request.vin());
                InsertMotorcycleResponse::new(id, None)
                    .unwrap_or_else(InsertMotorcycleResponse::failure)
            }
            Err(e) => {
                warn!("Insert of VIN {} failed: {}", request.vin(), e);
                InsertMotorcycleResponse::failure(e)
            }
        }
    }

    async fn insert(&self, request: &InsertMotorcycleRequest) -> Result<MotorcycleId, DomainError> {
        if !self.auth_service.is_authenticated() {
            return Err(DomainError::NotAuthenticated);
        }

        if !self.auth_service.is_authorized(INSERT_REQUIRED_ROLE) {
            return Err(DomainError::NotAuthorized {
                role: INSERT_REQUIRED_ROLE,
            });
        }

        if let Some(existing) = self
            .motorcycle_repository
            .find_by_vin(request.vin())
            .await?
        {
            return Err(DomainError::DuplicateVin { vin: existing.vin });
        }

        let motorcycle = Motorcycle::new(
            request.make(),
            request.model(),
            request.year(),
            request.vin(),
        )?;

        let motorcycle = self.motorcycle_repository.insert(motorcycle).await?;

        self.motorcycle_repository.save().await?;

        Ok(motorcycle.id())
    }
}
