//! Active-Path Resolver
//!
//! Maps the current URL onto the menu tree.

use crate::model::{ActiveSelection, MenuItem};

/// Non-empty `/`-separated segments of a path, query and fragment stripped
pub fn path_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolve the active top-level / second-level pair for `path`
///
/// Segment 1 selects the top-level item, segment 2 the child inside it.
/// An unmatched top-level segment falls back to the first top-level item and
/// its first child; an unmatched child falls back to the parent's first child.
pub fn resolve_active(tree: &[MenuItem], path: &str) -> ActiveSelection {
    let Some(first) = tree.first() else {
        return ActiveSelection::empty();
    };

    let segments = path_segments(path);
    let matched = segments
        .first()
        .and_then(|seg| tree.iter().find(|item| item.path == *seg));

    let Some(menu) = matched else {
        return ActiveSelection::new(first.clone(), first.first_child().cloned());
    };

    let sub_menu = segments
        .get(1)
        .and_then(|seg| menu.children.iter().find(|child| child.path == *seg))
        .or_else(|| menu.first_child())
        .cloned();

    ActiveSelection::new(menu.clone(), sub_menu)
}

/// Top-level item owning the child with `id`
pub fn find_parent<'a>(tree: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
    tree.iter().find(|item| item.children.iter().any(|child| child.id == id))
}

/// Route for a click: `/<parent>/<child>`, or `/<parent>` when the child path is empty
pub fn target_path(parent: &MenuItem, item: &MenuItem) -> String {
    if item.path.is_empty() {
        format!("/{}", parent.path)
    } else {
        format!("/{}/{}", parent.path, item.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{leaf, parent, sample_tree};

    fn ids(sel: &ActiveSelection) -> (&str, Option<&str>) {
        (sel.menu.id.as_str(), sel.sub_menu.as_ref().map(|s| s.id.as_str()))
    }

    #[test]
    fn test_segments() {
        assert_eq!(path_segments("//home/dashboard/?tab=1"), vec!["home", "dashboard"]);
        assert!(path_segments("/").is_empty());
    }

    #[test]
    fn test_exact_pair() {
        let tree = sample_tree();
        assert_eq!(ids(&resolve_active(&tree, "/home/stats")), ("home", Some("stats")));
        assert_eq!(ids(&resolve_active(&tree, "/agent/builder/42")), ("agent", Some("builder")));
    }

    #[test]
    fn test_unknown_top_level_falls_back_to_first() {
        let tree = sample_tree();
        assert_eq!(ids(&resolve_active(&tree, "/nowhere/builder")), ("home", Some("dash")));
        assert_eq!(ids(&resolve_active(&tree, "/")), ("home", Some("dash")));
    }

    #[test]
    fn test_unknown_child_falls_back_to_first_child() {
        let tree = sample_tree();
        assert_eq!(ids(&resolve_active(&tree, "/home/missing")), ("home", Some("dash")));
    }

    #[test]
    fn test_childless_parent() {
        let tree = sample_tree();
        assert_eq!(ids(&resolve_active(&tree, "/admin")), ("admin", None));
    }

    #[test]
    fn test_empty_tree_gives_sentinel() {
        assert!(resolve_active(&[], "/home/dashboard").is_empty());
    }

    #[test]
    fn test_find_parent_and_target() {
        let tree = sample_tree();
        let owner = find_parent(&tree, "builder").unwrap();
        assert_eq!(owner.id, "agent");
        assert_eq!(target_path(owner, &owner.children[0]), "/agent/builder");
        assert!(find_parent(&tree, "home").is_none());

        let index = parent("docs", "docs", "*", vec![leaf("root", "", "*")]);
        assert_eq!(target_path(&index, &index.children[0]), "/docs");
    }
}
