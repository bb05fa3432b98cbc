//! Navigation Config
//!
//! Endpoints, storage keys and limits used by the navigation core.

use serde::{Deserialize, Serialize};
use crate::error::{NavError, NavResult};

/// Navigation configuration (camelCase on the wire, every field optional)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// Prefix prepended to every endpoint path
    pub api_base_url: String,
    /// Menu tree endpoint
    pub menu_path: String,
    /// Best-effort audit endpoint hit after sub-menu navigation
    pub menu_check_path: String,
    /// Current user's authorization keys
    pub permissions_path: String,
    /// Session storage key holding the recent-menu list
    pub recent_storage_key: String,
    /// Local storage key holding the access token
    pub token_storage_key: String,
    /// Same-tab custom event fired on logout
    pub logout_event: String,
    pub recent_limit: usize,
    /// `auth` value that every user may see
    pub auth_wildcard: String,
    /// Skip permission filtering (debug/admin inspection)
    pub visible_mode: bool,
    /// Alert text shown when a click is denied
    pub denied_message: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            menu_path: "/api/menu".to_string(),
            menu_check_path: "/api/menu/check".to_string(),
            permissions_path: "/api/user/auth".to_string(),
            recent_storage_key: "recentMenu".to_string(),
            token_storage_key: "accessToken".to_string(),
            logout_event: "logout".to_string(),
            recent_limit: 5,
            auth_wildcard: "*".to_string(),
            visible_mode: false,
            denied_message: "You do not have permission to access this menu.".to_string(),
        }
    }
}

impl NavConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(raw: &str) -> NavResult<Self> {
        let config: NavConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NavResult<()> {
        if self.recent_limit == 0 {
            return Err(NavError::Config("recentLimit must be greater than 0".to_string()));
        }
        if self.recent_storage_key.is_empty() || self.token_storage_key.is_empty() {
            return Err(NavError::Config("storage keys must not be empty".to_string()));
        }
        Ok(())
    }

    /// Join the base URL and an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}
