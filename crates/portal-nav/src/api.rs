//! Menu API
//!
//! Abstract interface to the menu endpoints.
//! The browser shell implements it over HTTP; tests use in-memory fakes.

use async_trait::async_trait;
use serde::Serialize;
use crate::error::NavResult;
use crate::model::MenuItem;

/// Body of the menu-check audit call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCheckArgs<'a> {
    pub menu_id: &'a str,
    pub path: &'a str,
}

/// Menu endpoints; futures are not `Send` (single-threaded UI host)
#[async_trait(?Send)]
pub trait MenuApi {
    /// Fetch the full two-level tree
    async fn fetch_menu(&self) -> NavResult<Vec<MenuItem>>;

    /// Best-effort usage tracking after a navigation
    async fn check_menu(&self, args: MenuCheckArgs<'_>) -> NavResult<()>;
}
