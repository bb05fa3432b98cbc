//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use portal_nav::NavConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct NavContext {
    config: StoredValue<NavConfig>,
    /// Current location path - read
    pub path: ReadSignal<String>,
    /// Current location path - write
    set_path: WriteSignal<String>,
    /// Pending blocking alert - read
    pub alert: ReadSignal<Option<String>>,
    /// Pending blocking alert - write
    set_alert: WriteSignal<Option<String>>,
}

impl NavContext {
    pub fn new(
        config: NavConfig,
        path: (ReadSignal<String>, WriteSignal<String>),
        alert: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            path: path.0,
            set_path: path.1,
            alert: alert.0,
            set_alert: alert.1,
        }
    }

    pub fn config(&self) -> NavConfig {
        self.config.get_value()
    }

    pub fn set_path(&self, path: &str) {
        self.set_path.set(path.to_string());
    }

    pub fn show_alert(&self, message: &str) {
        self.set_alert.set(Some(message.to_string()));
    }

    pub fn dismiss_alert(&self) {
        self.set_alert.set(None);
    }
}

pub fn use_nav_context() -> NavContext {
    expect_context::<NavContext>()
}
