//! Navigation Models
//!
//! Data structures matching the menu-tree endpoint.

use std::collections::HashSet;
use serde::{Deserialize, Deserializer, Serialize};

/// One node of the two-level navigation tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    pub path: String,
    pub auth: String,
    /// Populated on top-level items only
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<MenuItem>,
    /// External link, opened outside the console
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The backend sends `"children": null` on leaves
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<MenuItem>, D::Error> {
    Option::<Vec<MenuItem>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl MenuItem {
    pub fn is_external(&self) -> bool {
        self.href.as_deref().is_some_and(|href| !href.is_empty())
    }

    pub fn first_child(&self) -> Option<&MenuItem> {
        self.children.first()
    }
}

/// Currently highlighted top-level / second-level pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSelection {
    pub menu: MenuItem,
    pub sub_menu: Option<MenuItem>,
}

impl ActiveSelection {
    pub fn new(menu: MenuItem, sub_menu: Option<MenuItem>) -> Self {
        Self { menu, sub_menu }
    }

    /// Selection used when the tree is empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.menu.id.is_empty() && self.sub_menu.is_none()
    }

    /// Same menu/sub-menu ids, regardless of the rest of the payload
    pub fn same_identity(&self, other: &ActiveSelection) -> bool {
        self.menu.id == other.menu.id
            && self.sub_menu.as_ref().map(|s| s.id.as_str()) == other.sub_menu.as_ref().map(|s| s.id.as_str())
    }
}

/// Authorization keys of the current user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(HashSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
