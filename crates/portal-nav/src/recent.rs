//! Recent-Menu Persistence
//!
//! Capped, most-recent-first list of visited leaf items, written through to
//! session storage as a JSON array.

use crate::model::MenuItem;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone)]
pub struct RecentMenu<S> {
    storage: S,
    key: String,
    limit: usize,
    /// In-memory copy for rendering; `update_recent_list` never trusts it
    items: Vec<MenuItem>,
}

impl<S: KeyValueStore> RecentMenu<S> {
    pub fn new(storage: S, key: impl Into<String>, limit: usize) -> Self {
        let mut recent = Self {
            storage,
            key: key.into(),
            limit,
            items: Vec::new(),
        };
        recent.items = recent.get();
        recent
    }

    /// In-memory list
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Stored list; absent or unparsable values read as empty
    pub fn get(&self) -> Vec<MenuItem> {
        self.storage
            .get_item(&self.key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Overwrite storage and memory
    pub fn set(&mut self, list: Vec<MenuItem>) {
        match serde_json::to_string(&list) {
            Ok(raw) => {
                if let Err(e) = self.storage.set_item(&self.key, &raw) {
                    log::warn!("[recent] failed to persist {} items: {}", list.len(), e);
                }
            }
            Err(e) => log::warn!("[recent] failed to encode list: {}", e),
        }
        self.items = list;
    }

    pub fn reset(&mut self) {
        self.storage.remove_item(&self.key);
        self.items.clear();
    }

    /// Prepend `item` unless its id is already stored; returns whether the list changed
    pub fn update_recent_list(&mut self, item: &MenuItem) -> bool {
        let mut stored = self.get();
        if stored.iter().any(|existing| existing.id == item.id) {
            return false;
        }

        stored.insert(0, item.clone());
        stored.truncate(self.limit);
        self.set(stored);
        true
    }

    /// Seed with the first available leaf when nothing is stored yet
    pub fn seed_if_empty(&mut self, tree: &[MenuItem]) -> bool {
        if !self.get().is_empty() {
            return false;
        }
        let Some(leaf) = tree.iter().find_map(|item| item.first_child()) else {
            return false;
        };
        self.set(vec![leaf.clone()]);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{leaf, sample_tree};
    use crate::storage::MemoryStore;

    const KEY: &str = "recentMenu";

    fn recent() -> (MemoryStore, RecentMenu<MemoryStore>) {
        let storage = MemoryStore::new();
        let recent = RecentMenu::new(storage.clone(), KEY, 5);
        (storage, recent)
    }

    fn ids(list: &[MenuItem]) -> Vec<&str> {
        list.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_newest_first_and_capped() {
        let (_, mut recent) = recent();
        for n in 0..8 {
            recent.update_recent_list(&leaf(&format!("m{}", n), "p", "*"));
        }
        assert_eq!(ids(recent.items()), vec!["m7", "m6", "m5", "m4", "m3"]);
        assert_eq!(recent.get(), recent.items());
    }

    #[test]
    fn test_duplicate_is_noop() {
        let (_, mut recent) = recent();
        assert!(recent.update_recent_list(&leaf("a", "a", "*")));
        assert!(recent.update_recent_list(&leaf("b", "b", "*")));
        assert!(!recent.update_recent_list(&leaf("a", "a", "*")));
        assert_eq!(ids(recent.items()), vec!["b", "a"]);
    }

    #[test]
    fn test_dedup_uses_fresh_storage() {
        let (storage, mut recent) = recent();
        recent.update_recent_list(&leaf("a", "a", "*"));
        // Another instance on the same session clears the list
        storage.remove_item(KEY);
        assert!(recent.update_recent_list(&leaf("a", "a", "*")));
        assert_eq!(ids(&recent.get()), vec!["a"]);
    }

    #[test]
    fn test_corrupt_value_reads_empty() {
        let (storage, mut recent) = recent();
        storage.set_item(KEY, "{not json").unwrap();
        assert!(recent.get().is_empty());
        assert!(recent.update_recent_list(&leaf("a", "a", "*")));
        assert_eq!(ids(&recent.get()), vec!["a"]);
    }

    #[test]
    fn test_loads_existing_on_new() {
        let (storage, mut recent) = recent();
        recent.update_recent_list(&leaf("a", "a", "*"));
        let reopened = RecentMenu::new(storage, KEY, 5);
        assert_eq!(ids(reopened.items()), vec!["a"]);
    }

    #[test]
    fn test_seed_and_reset() {
        let (storage, mut recent) = recent();
        assert!(recent.seed_if_empty(&sample_tree()));
        assert_eq!(ids(recent.items()), vec!["dash"]);
        assert!(!recent.seed_if_empty(&sample_tree()));

        recent.reset();
        assert!(recent.items().is_empty());
        assert!(storage.get_item(KEY).is_none());
        recent.reset();
        assert!(recent.get().is_empty());
    }

    #[test]
    fn test_seed_skips_when_no_leaf() {
        let (_, mut recent) = recent();
        assert!(!recent.seed_if_empty(&[leaf("solo", "solo", "*")]));
        assert!(!recent.seed_if_empty(&[]));
    }
}
