//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::domain::entities::authorization_role::AuthorizationRole;

/// アプリケーション設定
///
/// 現在の利用者と、その認証状態・ロールを表す
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub user_name: String,
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub roles: Vec<AuthorizationRole>,
}

/// Expands tilde in path and returns the full path
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded_path = expand_path(path);
        let content = fs::read_to_string(&expanded_path)
            .with_context(|| format!("Failed to read config file: {}", expanded_path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        info!(
            "Loaded configuration for user '{}' ({} roles)",
            config.user_name,
            config.roles.len()
        );

        Ok(config)
    }
}
