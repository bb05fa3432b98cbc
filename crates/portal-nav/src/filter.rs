//! Permission Filter

use crate::model::{MenuItem, PermissionSet};

/// Visible iff `auth` is the wildcard or one of the user's keys
pub fn has_permission(item: &MenuItem, permissions: &PermissionSet, wildcard: &str) -> bool {
    item.auth == wildcard || permissions.contains(&item.auth)
}

/// Two-level filter of the menu tree
///
/// Failing top-level items are dropped, then failing children inside the
/// survivors. A parent is kept even when every child is filtered out.
/// `visible_mode` bypasses the check entirely.
pub fn filter_menu(
    tree: &[MenuItem],
    permissions: &PermissionSet,
    visible_mode: bool,
    wildcard: &str,
) -> Vec<MenuItem> {
    if visible_mode {
        return tree.to_vec();
    }

    tree.iter()
        .filter(|item| has_permission(item, permissions, wildcard))
        .map(|item| MenuItem {
            children: item
                .children
                .iter()
                .filter(|child| has_permission(child, permissions, wildcard))
                .cloned()
                .collect(),
            ..item.clone()
        })
        .collect()
}
