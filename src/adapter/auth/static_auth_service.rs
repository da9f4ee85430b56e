//! Static Auth Service
//!
//! 設定ファイルに基づくAuthServiceの実装

use std::collections::HashSet;

use crate::adapter::config::Config;
use crate::domain::entities::authorization_role::AuthorizationRole;
use crate::domain::services::auth_service::AuthService;

/// 設定ファイルで与えられた利用者情報をそのまま返す認証サービス
#[derive(Debug, Clone)]
pub struct StaticAuthService {
    user_name: String,
    authenticated: bool,
    roles: HashSet<AuthorizationRole>,
}

impl StaticAuthService {
    pub fn new(
        user_name: impl Into<String>,
        authenticated: bool,
        roles: impl IntoIterator<Item = AuthorizationRole>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            authenticated,
            roles: roles.into_iter().collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.user_name.clone(),
            config.authenticated,
            config.roles.iter().copied(),
        )
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

impl AuthService for StaticAuthService {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn is_authorized(&self, role: AuthorizationRole) -> bool {
        self.authenticated && self.roles.iter().any(|held| held.grants(role))
    }
}
