//! Browser Bindings
//!
//! Browser-side implementations of the navigation core's seams:
//! session storage, history routing, storage/logout events, detached tasks.

use std::rc::Rc;
use portal_nav::{
    DetachedTask, ExternalResetChannel, KeyValueStore, NavConfig, NavError, NavResult,
    NavigationHost, ResetCallback, ResetSignal, StorageChange, TaskSpawner,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use crate::context::NavContext;

// ========================
// Storage
// ========================

/// `window.sessionStorage`; looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStorage;

fn session_storage() -> NavResult<web_sys::Storage> {
    web_sys::window()
        .ok_or(NavError::Unavailable("window"))?
        .session_storage()
        .map_err(|_| NavError::Unavailable("session storage"))?
        .ok_or(NavError::Unavailable("session storage"))
}

impl KeyValueStore for SessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        session_storage().ok()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> NavResult<()> {
        session_storage()?
            .set_item(key, value)
            .map_err(|_| NavError::Storage(format!("failed to write {}", key)))
    }

    fn remove_item(&self, key: &str) {
        if let Ok(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Access token from `localStorage`, if any
pub fn access_token(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?.filter(|t| !t.is_empty())
}

// ========================
// Routing
// ========================

/// `location.pathname`, `/` when unavailable
pub fn current_location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Follow back/forward navigation
pub fn listen_popstate(ctx: NavContext) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
        ctx.set_path(&current_location_path());
    });
    let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// History-based host for menu clicks
#[derive(Clone, Copy)]
pub struct BrowserHost {
    ctx: NavContext,
}

impl BrowserHost {
    pub fn new(ctx: NavContext) -> Self {
        Self { ctx }
    }
}

impl NavigationHost for BrowserHost {
    fn current_path(&self) -> String {
        use leptos::prelude::GetUntracked;
        self.ctx.path.get_untracked()
    }

    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                    log::warn!("[router] pushState failed for {}: {:?}", path, e);
                }
            }
        }
        self.ctx.set_path(path);
    }

    fn open_external(&self, href: &str) {
        let opened = web_sys::window().and_then(|w| w.open_with_url_and_target(href, "_blank").ok());
        if opened.is_none() {
            log::warn!("[router] could not open {}", href);
        }
    }

    fn alert(&self, message: &str) {
        self.ctx.show_alert(message);
    }
}

// ========================
// Tasks
// ========================

/// Spawns on the wasm event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl TaskSpawner for BrowserSpawner {
    fn spawn_detached(&self, task: DetachedTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

// ========================
// Reset Events
// ========================

/// `storage` (other tabs) and the same-tab logout event
pub struct BrowserResetChannel {
    token_key: String,
    logout_event: String,
}

impl BrowserResetChannel {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            token_key: config.token_storage_key.clone(),
            logout_event: config.logout_event.clone(),
        }
    }
}

impl ExternalResetChannel for BrowserResetChannel {
    fn on_external_reset(&self, callback: ResetCallback) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback: Rc<dyn Fn(ResetSignal)> = Rc::from(callback);

        let token_key = self.token_key.clone();
        let on_storage = callback.clone();
        let storage_closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            let change = StorageChange { key: ev.key(), new_value: ev.new_value() };
            if change.clears(&token_key) {
                on_storage(ResetSignal::TokenCleared);
            }
        });
        let _ = window.add_event_listener_with_callback("storage", storage_closure.as_ref().unchecked_ref());
        storage_closure.forget();

        let logout_closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            callback(ResetSignal::Logout);
        });
        let _ = window.add_event_listener_with_callback(&self.logout_event, logout_closure.as_ref().unchecked_ref());
        logout_closure.forget();
    }
}
