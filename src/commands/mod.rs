//! REST Command Wrappers
//!
//! Frontend bindings to the portal's REST endpoints, organized by domain.

mod menu;

use portal_nav::{NavError, NavResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::browser;

// Re-export all public items
pub use menu::*;

/// Attach the bearer token when one is stored
fn with_auth(request: reqwest::RequestBuilder, token_key: &str) -> reqwest::RequestBuilder {
    match browser::access_token(token_key) {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str, token_key: &str) -> NavResult<T> {
    let response = with_auth(client.get(url), token_key)
        .send()
        .await
        .map_err(|e| NavError::Http(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(NavError::Status { status: status.as_u16(), url: url.to_string() });
    }
    let body = response.text().await.map_err(|e| NavError::Http(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

async fn post_json<B: Serialize + ?Sized>(client: &reqwest::Client, url: &str, body: &B, token_key: &str) -> NavResult<()> {
    let response = with_auth(client.post(url).json(body), token_key)
        .send()
        .await
        .map_err(|e| NavError::Http(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(NavError::Status { status: status.as_u16(), url: url.to_string() });
    }
    Ok(())
}
