//! Menu Handler
//!
//! Glue between navigation components and the core dispatcher.

use std::rc::Rc;
use leptos::prelude::*;
use portal_nav::{find_parent, ClickOutcome, Dispatcher, MenuApi, MenuItem};
use crate::browser::{BrowserHost, BrowserSpawner};
use crate::commands::HttpMenuApi;
use crate::context::{use_nav_context, NavContext};
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct MenuHandler {
    store: AppStore,
    ctx: NavContext,
}

pub fn use_menu_handler() -> MenuHandler {
    MenuHandler { store: use_app_store(), ctx: use_nav_context() }
}

impl MenuHandler {
    /// Top-level click; the path effect then picks its first child
    pub fn click_menu(&self, item: &MenuItem) -> ClickOutcome {
        let config = self.ctx.config();
        let host = BrowserHost::new(self.ctx);
        let permissions = self.store.permissions().get_untracked();
        let dispatcher = Dispatcher::new(&host, &permissions, &config.auth_wildcard, &config.denied_message);

        let outcome = {
            let field = self.store.menu();
            let mut menu = field.write();
            dispatcher.handle_common_menu_click(&mut *menu, item, None)
        };
        log::debug!("[nav] {} -> {:?}", item.id, outcome);
        outcome
    }

    /// Second-level click, followed by the detached menu-check call
    pub fn click_sub_menu(&self, item: &MenuItem, parent: &MenuItem) -> ClickOutcome {
        let config = self.ctx.config();
        let host = BrowserHost::new(self.ctx);
        let permissions = self.store.permissions().get_untracked();
        let dispatcher = Dispatcher::new(&host, &permissions, &config.auth_wildcard, &config.denied_message);
        let api: Rc<dyn MenuApi> = Rc::new(HttpMenuApi::new(config.clone()));

        let outcome = {
            let field = self.store.menu();
            let mut menu = field.write();
            dispatcher.handle_sub_menu_click(&mut *menu, item, Some(parent), api, &BrowserSpawner)
        };
        log::debug!("[nav] {} -> {:?}", item.id, outcome);
        outcome
    }

    /// Recent-list click; the owner is looked up in the current tree
    pub fn click_recent(&self, item: &MenuItem) -> Option<ClickOutcome> {
        let parent = self
            .store
            .menu()
            .with_untracked(|menu| find_parent(menu.menu_list(), &item.id).cloned());
        match parent {
            Some(parent) => Some(self.click_sub_menu(item, &parent)),
            None => {
                log::warn!("[nav] recent item {} is no longer in the menu", item.id);
                None
            }
        }
    }
}
