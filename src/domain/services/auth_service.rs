//! # Auth Service Trait
//!
//! 利用者の認証・認可を抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::authorization_role::AuthorizationRole;

/// 認証サービス
///
/// 現在の利用者についての認証・認可の判定を提供する
#[cfg_attr(test, automock)]
pub trait AuthService: Send + Sync {
    /// 利用者が認証済みかどうか
    fn is_authenticated(&self) -> bool;

    /// 利用者が指定されたロールの権限を持つかどうか
    fn is_authorized(&self, role: AuthorizationRole) -> bool;
}
