//! # AuthorizationRole Value Object
//!
//! 認可ロールのバリューオブジェクト

use serde::{Deserialize, Serialize};
use std::fmt;

/// 認可ロール
///
/// `Admin` は全てのロールを包含する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizationRole {
    /// バイクの登録など、変更操作が可能
    Admin,
    /// 参照操作のみ可能
    User,
}

impl AuthorizationRole {
    /// このロールが `required` の権限を満たすかどうか
    pub fn grants(self, required: AuthorizationRole) -> bool {
        self == AuthorizationRole::Admin || self == required
    }
}

impl fmt::Display for AuthorizationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationRole::Admin => write!(f, "admin"),
            AuthorizationRole::User => write!(f, "user"),
        }
    }
}
