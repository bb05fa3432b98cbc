//! External Reset Channel
//!
//! Pub/sub seam for "forget session state" notifications coming from outside
//! the navigation core: a same-tab logout signal, or another tab clearing the
//! access token.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetSignal {
    /// Same-tab logout
    Logout,
    /// Access token removed in another context
    TokenCleared,
}

/// Storage change notification (`key == None` means the whole store was cleared)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageChange {
    pub key: Option<String>,
    pub new_value: Option<String>,
}

impl StorageChange {
    /// True when this change removed `key`
    pub fn clears(&self, key: &str) -> bool {
        self.new_value.is_none() && self.key.as_deref().map_or(true, |k| k == key)
    }
}

pub type ResetCallback = Box<dyn Fn(ResetSignal)>;

type Subscriber = Rc<dyn Fn(ResetSignal)>;

pub trait ExternalResetChannel {
    fn on_external_reset(&self, callback: ResetCallback);
}

/// In-process channel for non-browser hosts
#[derive(Clone, Default)]
pub struct LocalResetChannel {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl LocalResetChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribers added while publishing hear the next signal, not this one
    pub fn publish(&self, signal: ResetSignal) {
        let snapshot: Vec<Subscriber> = self.subscribers.borrow().clone();
        for callback in snapshot {
            callback(signal);
        }
    }

    /// Forward a storage change; publishes `TokenCleared` when it removed `token_key`
    pub fn publish_storage_change(&self, change: &StorageChange, token_key: &str) -> bool {
        if !change.clears(token_key) {
            return false;
        }
        self.publish(ResetSignal::TokenCleared);
        true
    }
}

impl ExternalResetChannel for LocalResetChannel {
    fn on_external_reset(&self, callback: ResetCallback) {
        self.subscribers.borrow_mut().push(Rc::from(callback));
    }
}
