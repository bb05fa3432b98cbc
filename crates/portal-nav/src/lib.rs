//! Portal Navigation Core
//!
//! Menu resolution and access control for the portal console, independent of
//! any UI framework:
//! - model: menu tree, active selection, permission set
//! - resolve / filter: pure functions over the tree
//! - recent / storage: session-persisted recent-menu list
//! - store: state container with the fetch lifecycle
//! - dispatch: click handling against a host (browser, shell, test)
//! - channel: external reset notifications (logout, token removal)
//! - query: query strings for paged list endpoints

pub mod api;
pub mod channel;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod recent;
pub mod resolve;
pub mod storage;
pub mod store;

pub use api::{MenuApi, MenuCheckArgs};
pub use channel::{ExternalResetChannel, LocalResetChannel, ResetCallback, ResetSignal, StorageChange};
pub use config::NavConfig;
pub use dispatch::{ClickOutcome, DetachedTask, Dispatcher, NavigationHost, TaskSpawner};
pub use error::{NavError, NavResult};
pub use filter::{filter_menu, has_permission};
pub use model::{ActiveSelection, MenuItem, PermissionSet};
pub use query::{build_query_string, Page, PageQuery};
pub use recent::RecentMenu;
pub use resolve::{find_parent, path_segments, resolve_active, target_path};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{LoadState, MenuStore};
