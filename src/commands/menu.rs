//! Menu Commands
//!
//! Frontend bindings for the menu tree, menu-check audit and user permission endpoints.

use async_trait::async_trait;
use portal_nav::{MenuApi, MenuCheckArgs, MenuItem, NavConfig, NavResult, PermissionSet};
use super::{get_json, post_json};

/// `MenuApi` over HTTP
#[derive(Clone)]
pub struct HttpMenuApi {
    client: reqwest::Client,
    config: NavConfig,
}

impl HttpMenuApi {
    pub fn new(config: NavConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }
}

#[async_trait(?Send)]
impl MenuApi for HttpMenuApi {
    async fn fetch_menu(&self) -> NavResult<Vec<MenuItem>> {
        let url = self.config.endpoint(&self.config.menu_path);
        get_json(&self.client, &url, &self.config.token_storage_key).await
    }

    async fn check_menu(&self, args: MenuCheckArgs<'_>) -> NavResult<()> {
        let url = self.config.endpoint(&self.config.menu_check_path);
        post_json(&self.client, &url, &args, &self.config.token_storage_key).await
    }
}

/// Authorization keys of the signed-in user
pub async fn fetch_permissions(config: &NavConfig) -> NavResult<PermissionSet> {
    let client = reqwest::Client::new();
    let url = config.endpoint(&config.permissions_path);
    let keys: Vec<String> = get_json(&client, &url, &config.token_storage_key).await?;
    Ok(keys.into_iter().collect())
}
