//! Navigation Dispatcher
//!
//! Click handling for menu items: external links, permission checks, active
//! selection, routing and recent-menu tracking.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use crate::api::{MenuApi, MenuCheckArgs};
use crate::filter::has_permission;
use crate::model::{ActiveSelection, MenuItem, PermissionSet};
use crate::resolve::target_path;
use crate::storage::KeyValueStore;
use crate::store::MenuStore;

/// Browser (or shell) side effects needed by a click
pub trait NavigationHost {
    fn current_path(&self) -> String;

    /// Client-side route change
    fn navigate(&self, path: &str);

    /// Open a link in a new browser context
    fn open_external(&self, href: &str);

    /// Blocking alert
    fn alert(&self, message: &str);
}

pub type DetachedTask = Pin<Box<dyn Future<Output = ()>>>;

/// Runs best-effort background work whose result nobody awaits
pub trait TaskSpawner {
    fn spawn_detached(&self, task: DetachedTask);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// `href` opened outside the console
    External,
    /// Permission check failed; nothing changed
    Denied,
    /// Internal navigation; `routed` is false when already on `path`
    Navigated { path: String, routed: bool },
}

pub struct Dispatcher<'a, H> {
    host: &'a H,
    permissions: &'a PermissionSet,
    wildcard: &'a str,
    denied_message: &'a str,
}

impl<'a, H: NavigationHost> Dispatcher<'a, H> {
    pub fn new(host: &'a H, permissions: &'a PermissionSet, wildcard: &'a str, denied_message: &'a str) -> Self {
        Self { host, permissions, wildcard, denied_message }
    }

    /// Handle a click on `item`; `parent` is its top-level owner, `None` for a top-level click
    pub fn handle_common_menu_click<S: KeyValueStore>(
        &self,
        store: &mut MenuStore<S>,
        item: &MenuItem,
        parent: Option<&MenuItem>,
    ) -> ClickOutcome {
        if item.is_external() {
            self.host.open_external(item.href.as_deref().unwrap_or_default());
            return ClickOutcome::External;
        }

        if !has_permission(item, self.permissions, self.wildcard) {
            log::warn!("[nav] access denied to menu {} (auth={})", item.id, item.auth);
            self.host.alert(self.denied_message);
            return ClickOutcome::Denied;
        }

        let path = match parent {
            Some(parent) => {
                store.set_active(ActiveSelection::new(parent.clone(), Some(item.clone())));
                target_path(parent, item)
            }
            None => {
                store.set_active(ActiveSelection::new(item.clone(), None));
                format!("/{}", item.path)
            }
        };

        let current = self.host.current_path();
        let routed = normalize(&current) != normalize(&path);
        if routed {
            self.host.navigate(&path);
        }

        // Only second-level leaves are tracked
        if parent.is_some() {
            store.record_visit(item);
        }

        ClickOutcome::Navigated { path, routed }
    }

    /// Common click plus a detached menu-check audit call after internal navigation
    pub fn handle_sub_menu_click<S: KeyValueStore>(
        &self,
        store: &mut MenuStore<S>,
        item: &MenuItem,
        parent: Option<&MenuItem>,
        api: Rc<dyn MenuApi>,
        spawner: &impl TaskSpawner,
    ) -> ClickOutcome {
        let outcome = self.handle_common_menu_click(store, item, parent);
        if let ClickOutcome::Navigated { path, .. } = &outcome {
            let menu_id = item.id.clone();
            let path = path.clone();
            spawner.spawn_detached(Box::pin(async move {
                let args = MenuCheckArgs { menu_id: &menu_id, path: &path };
                if let Err(e) = api.check_menu(args).await {
                    log::debug!("[nav] menu check for {} ignored: {}", menu_id, e);
                }
            }));
        }
        outcome
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;
    use crate::error::{NavError, NavResult};
    use crate::model::fixtures::{leaf, parent, sample_tree};
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeHost {
        path: RefCell<String>,
        navigations: RefCell<Vec<String>>,
        opened: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl FakeHost {
        fn at(path: &str) -> Self {
            let host = Self::default();
            *host.path.borrow_mut() = path.to_string();
            host
        }
    }

    impl NavigationHost for FakeHost {
        fn current_path(&self) -> String {
            self.path.borrow().clone()
        }

        fn navigate(&self, path: &str) {
            *self.path.borrow_mut() = path.to_string();
            self.navigations.borrow_mut().push(path.to_string());
        }

        fn open_external(&self, href: &str) {
            self.opened.borrow_mut().push(href.to_string());
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct QueueSpawner {
        tasks: RefCell<Vec<DetachedTask>>,
    }

    impl TaskSpawner for QueueSpawner {
        fn spawn_detached(&self, task: DetachedTask) {
            self.tasks.borrow_mut().push(task);
        }
    }

    impl QueueSpawner {
        async fn drain(&self) {
            let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
            for task in tasks {
                task.await;
            }
        }
    }

    struct AuditApi {
        checks: RefCell<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl MenuApi for AuditApi {
        async fn fetch_menu(&self) -> NavResult<Vec<MenuItem>> {
            Ok(sample_tree())
        }

        async fn check_menu(&self, args: MenuCheckArgs<'_>) -> NavResult<()> {
            self.checks.borrow_mut().push((args.menu_id.to_string(), args.path.to_string()));
            if self.fail {
                return Err(NavError::Http("audit down".to_string()));
            }
            Ok(())
        }
    }

    const DENIED: &str = "denied";

    fn loaded_store() -> MenuStore<MemoryStore> {
        let mut store = MenuStore::new(MemoryStore::new(), &NavConfig::default());
        store.apply_menu_list(sample_tree());
        store.reset_recent();
        store
    }

    fn recent_ids(store: &MenuStore<MemoryStore>) -> Vec<String> {
        store.recent().iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_navigates_and_records() {
        let tree = sample_tree();
        let mut store = loaded_store();
        let host = FakeHost::at("/home/dashboard");
        let perms: PermissionSet = ["AGENT"].into_iter().collect();
        let dispatcher = Dispatcher::new(&host, &perms, "*", DENIED);

        let outcome = dispatcher.handle_common_menu_click(&mut store, &tree[1].children[0], Some(&tree[1]));
        assert_eq!(outcome, ClickOutcome::Navigated { path: "/agent/builder".to_string(), routed: true });
        assert_eq!(*host.navigations.borrow(), vec!["/agent/builder"]);
        assert_eq!(store.active().menu.id, "agent");
        assert_eq!(store.active().sub_menu.as_ref().unwrap().id, "builder");
        assert_eq!(recent_ids(&store), vec!["builder"]);
    }

    #[test]
    fn test_same_path_does_not_route() {
        let tree = sample_tree();
        let mut store = loaded_store();
        let host = FakeHost::at("/home/dashboard/");
        let perms = PermissionSet::new();
        let dispatcher = Dispatcher::new(&host, &perms, "*", DENIED);

        let outcome = dispatcher.handle_common_menu_click(&mut store, &tree[0].children[0], Some(&tree[0]));
        assert_eq!(outcome, ClickOutcome::Navigated { path: "/home/dashboard".to_string(), routed: false });
        assert!(host.navigations.borrow().is_empty());
        assert_eq!(recent_ids(&store), vec!["dash"]);
    }

    #[test]
    fn test_external_link_changes_nothing() {
        let mut store = loaded_store();
        store.sync_path("/home/dashboard");
        let before = store.active().clone();
        let host = FakeHost::at("/home/dashboard");
        let perms = PermissionSet::new();
        let dispatcher = Dispatcher::new(&host, &perms, "*", DENIED);

        let docs = MenuItem { href: Some("https://x".to_string()), ..leaf("docs", "docs", "NONE") };
        let outcome = dispatcher.handle_common_menu_click(&mut store, &docs, Some(&sample_tree()[0]));
        assert_eq!(outcome, ClickOutcome::External);
        assert_eq!(*host.opened.borrow(), vec!["https://x"]);
        assert_eq!(store.active(), &before);
        assert!(store.recent().is_empty());
        assert!(host.navigations.borrow().is_empty());
    }

    #[test]
    fn test_denied_alerts_and_aborts() {
        let tree = sample_tree();
        let mut store = loaded_store();
        let host = FakeHost::at("/home/dashboard");
        let perms = PermissionSet::new();
        let dispatcher = Dispatcher::new(&host, &perms, "*", DENIED);

        let outcome = dispatcher.handle_common_menu_click(&mut store, &tree[0].children[1], Some(&tree[0]));
        assert_eq!(outcome, ClickOutcome::Denied);
        assert_eq!(*host.alerts.borrow(), vec![DENIED]);
        assert!(store.active().is_empty());
        assert!(store.recent().is_empty());
        assert!(host.navigations.borrow().is_empty());
    }

    #[test]
    fn test_top_level_click_is_not_recorded() {
        let tree = sample_tree();
        let mut store = loaded_store();
        let host = FakeHost::at("/home/dashboard");
        let perms = PermissionSet::new();
        let dispatcher = Dispatcher::new(&host, &perms, "*", DENIED);

        let outcome = dispatcher.handle_common_menu_click(&mut store, &tree[0], None);
        assert_eq!(outcome, ClickOutcome::Navigated { path: "/home".to_string(), routed: true });
        assert!(store.active().sub_menu.is_none());
        assert!(store.recent().is_empty());
    }

    #[test]
    fn test_empty_child_path_routes_to_parent() {
        let index = parent("docs", "docs", "*", vec![leaf("docs-index", "", "*")]);
        let mut store = loaded_store();
        let host = FakeHost::at("/home");
        let perms = PermissionSet::new();
        let dispatcher = Dispatcher::new(&host, &perms, "*", DENIED);

        let outcome = dispatcher.handle_common_menu_click(&mut store, &index.children[0], Some(&index));
        assert_eq!(outcome, ClickOutcome::Navigated { path: "/docs".to_string(), routed: true });
    }

    #[tokio::test]
    async fn test_sub_menu_click_spawns_audit() {
        let tree = sample_tree();
        let mut store = loaded_store();
        let host = FakeHost::at("/");
        let perms = PermissionSet::new();
        let dispatcher = Dispatcher::new(&host, &perms, "*", DENIED);
        let api = Rc::new(AuditApi { checks: RefCell::new(Vec::new()), fail: true });
        let spawner = QueueSpawner::default();

        let outcome = dispatcher.handle_sub_menu_click(
            &mut store, &tree[0].children[0], Some(&tree[0]), api.clone(), &spawner,
        );
        assert!(matches!(outcome, ClickOutcome::Navigated { routed: true, .. }));
        // Navigation is complete before the audit call runs
        assert!(api.checks.borrow().is_empty());

        spawner.drain().await;
        assert_eq!(
            *api.checks.borrow(),
            vec![("dash".to_string(), "/home/dashboard".to_string())]
        );
    }

    #[test]
    fn test_denied_sub_menu_click_skips_audit() {
        let tree = sample_tree();
        let mut store = loaded_store();
        let host = FakeHost::at("/");
        let perms = PermissionSet::new();
        let dispatcher = Dispatcher::new(&host, &perms, "*", DENIED);
        let api = Rc::new(AuditApi { checks: RefCell::new(Vec::new()), fail: false });
        let spawner = QueueSpawner::default();

        dispatcher.handle_sub_menu_click(&mut store, &tree[1].children[0], Some(&tree[1]), api.clone(), &spawner);
        assert!(spawner.tasks.borrow().is_empty());
    }
}
