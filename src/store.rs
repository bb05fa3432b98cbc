//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use portal_nav::{filter_menu, MenuItem, MenuStore, NavConfig, PermissionSet, ResetSignal};
use crate::browser::SessionStorage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Menu tree, active selection and recent list
    pub menu: MenuStore<SessionStorage>,
    /// Authorization keys of the current user
    pub permissions: PermissionSet,
    /// Bumped every time a tree is applied (drives path re-resolution)
    pub tree_version: u32,
    /// Bumped on logout or token removal (re-arms the menu and permission loads)
    pub session: u32,
}

impl AppState {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            menu: MenuStore::new(SessionStorage, config),
            permissions: PermissionSet::new(),
            tree_version: 0,
            session: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the menu tree and bump the tree version
pub fn store_apply_menu(store: &AppStore, tree: Vec<MenuItem>) {
    store.menu().write().apply_menu_list(tree);
    store.tree_version().update(|v| *v += 1);
}

/// Forget the signed-out user's menu, selection, recent list and permissions
pub fn store_reset_session(store: &AppStore, signal: ResetSignal) {
    store.menu().write().handle_external_reset(signal);
    store.permissions().set(PermissionSet::new());
    store.tree_version().update(|v| *v += 1);
    store.session().update(|v| *v += 1);
}

/// Re-resolve the active selection; notifies only when it changed
pub fn store_sync_path(store: &AppStore, path: &str) {
    let changed = store
        .menu()
        .with_untracked(|menu| !menu.active().same_identity(&menu.resolve(path)));
    if changed {
        store.menu().write().sync_path(path);
    }
}

/// Menu tree filtered for the current user (tracked)
pub fn store_visible_menu(store: &AppStore, config: &NavConfig) -> Vec<MenuItem> {
    let permissions = store.permissions().get();
    store.menu().with(|menu| {
        filter_menu(menu.menu_list(), &permissions, config.visible_mode, &config.auth_wildcard)
    })
}
