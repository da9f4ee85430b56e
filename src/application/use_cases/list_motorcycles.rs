//! # List Motorcycles Use Case
//!
//! バイク一覧取得ユースケース

use log::{debug, warn};
use std::sync::Arc;

use crate::application::dto::list_motorcycles_request::ListMotorcyclesRequest;
use crate::application::dto::list_motorcycles_response::ListMotorcyclesResponse;
use crate::domain::entities::authorization_role::AuthorizationRole;
use crate::domain::entities::motorcycle::Motorcycle;
use crate::domain::errors::DomainError;
use crate::domain::repositories::motorcycle_repository::MotorcycleRepository;
use crate::domain::services::auth_service::AuthService;

/// バイク一覧の参照に必要なロール
pub const LIST_REQUIRED_ROLE: AuthorizationRole = AuthorizationRole::User;

/// バイク一覧取得ユースケース
pub struct ListMotorcyclesInteractor<R: MotorcycleRepository, A: AuthService> {
    motorcycle_repository: Arc<R>,
    auth_service: Arc<A>,
}

impl<R: MotorcycleRepository, A: AuthService> ListMotorcyclesInteractor<R, A> {
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

    /// 一覧リクエストを処理する
    ///
    /// # Returns
    ///
    /// 登録済みのバイク、または失敗理由を持つレスポンス
    pub async fn handle(&self, _request: &ListMotorcyclesRequest) -> ListMotorcyclesResponse {
        match self.list().await {
            Ok(motorcycles) => {
                debug!("Listed {} motorcycles", motorcycles.len());
                ListMotorcyclesResponse::new(motorcycles, None)
                    .unwrap_or_else(ListMotorcyclesResponse::failure)
            }
            Err(e) => {
                warn!("Listing motorcycles failed: {}", e);
                ListMotorcyclesResponse::failure(e)
            }
        }
    }

    async fn list(&self) -> Result<Vec<Motorcycle>, DomainError> {
        if !self.auth_service.is_authenticated() {
            return Err(DomainError::NotAuthenticated);
        }

        if !self.auth_service.is_authorized(LIST_REQUIRED_ROLE) {
            return Err(DomainError::NotAuthorized {
                role: LIST_REQUIRED_ROLE,
            });
        }

        self.motorcycle_repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::repositories::motorcycle_repository::MockMotorcycleRepository;
    use crate::domain::services::auth_service::MockAuthService;

    fn user_auth() -> MockAuthService {
        let mut auth = MockAuthService::new();
        auth.expect_is_authenticated().return_const(true);
        auth.expect_is_authorized()
            .with(eq(AuthorizationRole::User))
            .return_const(true);
        auth
    }

    #[tokio::test]
    async fn test_list_success() {
        let mut repo = MockMotorcycleRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                Motorcycle::new("Honda", "Shadow", 2006, "1HD1BW5177Y045632").unwrap(),
                Motorcycle::new("Suzuki", "Hayabusa", 2012, "JS1GN7FA5C2100345").unwrap(),
            ])
        });

        let interactor = ListMotorcyclesInteractor::new(Arc::new(repo), Arc::new(user_auth()));

        let response = interactor.handle(&ListMotorcyclesRequest::new()).await;

        assert!(response.is_success());
        assert_eq!(response.motorcycles().len(), 2);
        assert_eq!(response.motorcycles()[1].model, "Hayabusa");
    }

    #[tokio::test]
    async fn test_list_rejects_unauthenticated() {
        let mut auth = MockAuthService::new();
        auth.expect_is_authenticated().return_const(false);

        let mut repo = MockMotorcycleRepository::new();
        repo.expect_list().never();

        let interactor = ListMotorcyclesInteractor::new(Arc::new(repo), Arc::new(auth));

        let response = interactor.handle(&ListMotorcyclesRequest::new()).await;

        assert_eq!(response.error(), Some(&DomainError::NotAuthenticated));
        assert!(response.motorcycles().is_empty());
    }

    #[tokio::test]
    async fn test_list_rejects_unauthorized_role() {
        let mut auth = MockAuthService::new();
        auth.expect_is_authenticated().return_const(true);
        auth.expect_is_authorized().return_const(false);

        let mut repo = MockMotorcycleRepository::new();
        repo.expect_list().never();

        let interactor = ListMotorcyclesInteractor::new(Arc::new(repo), Arc::new(auth));

        let response = interactor.handle(&ListMotorcyclesRequest::new()).await;

        assert_eq!(
            response.error(),
            Some(&DomainError::NotAuthorized {
                role: AuthorizationRole::User
            })
        );
    }

    #[tokio::test]
    async fn test_list_repository_failure() {
        let mut repo = MockMotorcycleRepository::new();
        repo.expect_list().returning(|| {
            Err(DomainError::Storage {
                message: "unavailable".to_string(),
            })
        });

        let interactor = ListMotorcyclesInteractor::new(Arc::new(repo), Arc::new(user_auth()));

        let response = interactor.handle(&ListMotorcyclesRequest::new()).await;

        assert!(!response.is_success());
    }
}
