//! Runtime Config
//!
//! Reads `NavConfig` overrides from a global object the host page defines:
//!
//! ```html
//! <script>window.__PORTAL_NAV_CONFIG__ = { apiBaseUrl: "https://portal.example" };</script>
//! ```

use portal_nav::{NavConfig, NavError, NavResult};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__PORTAL_NAV_CONFIG__";

/// Page config, or defaults when it is absent or invalid
pub fn load_config() -> NavConfig {
    match read_global_config() {
        Ok(Some(config)) => {
            log::info!("[config] using page config (api={})", config.api_base_url);
            config
        }
        Ok(None) => NavConfig::default(),
        Err(e) => {
            log::warn!("[config] ignoring {}: {}", CONFIG_GLOBAL, e);
            NavConfig::default()
        }
    }
}

fn read_global_config() -> NavResult<Option<NavConfig>> {
    let window = web_sys::window().ok_or(NavError::Unavailable("window"))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|_| NavError::Unavailable("config global"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let config: NavConfig = serde_wasm_bindgen::from_value(value).map_err(|e| NavError::Config(e.to_string()))?;
    config.validate()?;
    Ok(Some(config))
}
