//! Menu Store
//!
//! Explicit state container for the loaded menu tree, the active selection
//! and the recent-menu list. One instance per session (or per test).

use crate::api::MenuApi;
use crate::channel::ResetSignal;
use crate::config::NavConfig;
use crate::error::{NavError, NavResult};
use crate::model::{ActiveSelection, MenuItem};
use crate::recent::RecentMenu;
use crate::resolve::resolve_active;
use crate::storage::KeyValueStore;

/// Fetch lifecycle of the menu tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
}

#[derive(Debug, Clone)]
pub struct MenuStore<S> {
    menu_list: Vec<MenuItem>,
    load_state: LoadState,
    active: ActiveSelection,
    recent: RecentMenu<S>,
}

impl<S: KeyValueStore> MenuStore<S> {
    pub fn new(storage: S, config: &NavConfig) -> Self {
        Self {
            menu_list: Vec::new(),
            load_state: LoadState::Unloaded,
            active: ActiveSelection::empty(),
            recent: RecentMenu::new(storage, config.recent_storage_key.clone(), config.recent_limit),
        }
    }

    // ========================
    // Tree & Load State
    // ========================

    pub fn menu_list(&self) -> &[MenuItem] {
        &self.menu_list
    }

    pub fn is_loaded(&self) -> bool {
        self.load_state == LoadState::Loaded
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn set_menu_list(&mut self, tree: Vec<MenuItem>) {
        self.menu_list = tree;
    }

    pub fn set_loaded(&mut self, loaded: bool) {
        self.load_state = if loaded { LoadState::Loaded } else { LoadState::Unloaded };
    }

    /// Fetching is allowed only before the first attempt
    pub fn should_fetch(&self) -> bool {
        self.load_state == LoadState::Unloaded
    }

    /// Mark a fetch in flight; false if one is not allowed
    pub fn begin_fetch(&mut self) -> bool {
        if !self.should_fetch() {
            return false;
        }
        self.load_state = LoadState::Loading;
        true
    }

    /// Replace the tree wholesale and seed the recent list if it is empty
    pub fn apply_menu_list(&mut self, tree: Vec<MenuItem>) {
        log::info!("[menu] loaded {} top-level items", tree.len());
        self.recent.seed_if_empty(&tree);
        self.menu_list = tree;
        self.load_state = LoadState::Loaded;
    }

    /// A failed fetch leaves the store loading; there is no retry
    pub fn fail_fetch(&self, error: &NavError) {
        log::error!("[menu] menu fetch failed: {}", error);
    }

    /// Fetch the tree once through `api`
    pub async fn load(&mut self, api: &dyn MenuApi) -> NavResult<()> {
        if !self.begin_fetch() {
            return Ok(());
        }
        match api.fetch_menu().await {
            Ok(tree) => {
                self.apply_menu_list(tree);
                Ok(())
            }
            Err(e) => {
                self.fail_fetch(&e);
                Err(e)
            }
        }
    }

    // ========================
    // Active Selection
    // ========================

    pub fn active(&self) -> &ActiveSelection {
        &self.active
    }

    /// Selection `path` would resolve to, without writing it
    pub fn resolve(&self, path: &str) -> ActiveSelection {
        resolve_active(&self.menu_list, path)
    }

    pub fn set_active(&mut self, selection: ActiveSelection) {
        self.active = selection;
    }

    /// Re-resolve for `path`; writes only when the identity changed
    pub fn sync_path(&mut self, path: &str) -> bool {
        let next = self.resolve(path);
        if self.active.same_identity(&next) {
            return false;
        }
        self.active = next;
        true
    }

    // ========================
    // Recent Menu
    // ========================

    pub fn recent(&self) -> &[MenuItem] {
        self.recent.items()
    }

    pub fn record_visit(&mut self, item: &MenuItem) -> bool {
        self.recent.update_recent_list(item)
    }

    pub fn reset_recent(&mut self) {
        self.recent.reset();
    }

    /// Drop everything tied to the signed-out user; the next fetch is allowed again
    pub fn handle_external_reset(&mut self, signal: ResetSignal) {
        log::info!("[menu] resetting menu state ({:?})", signal);
        self.menu_list.clear();
        self.load_state = LoadState::Unloaded;
        self.active = ActiveSelection::empty();
        self.recent.reset();
    }
}
