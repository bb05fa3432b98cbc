//! Paged Query Builder
//!
//! Query strings for list endpoints, built from heterogeneous filter values.

use std::collections::BTreeMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unreserved characters (RFC 3986) pass through unencoded
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Page request for a list screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page number
    pub page: u32,
    pub size: u32,
    pub sort: Option<String>,
    #[serde(default)]
    pub filters: Map<String, Value>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, size: 10, sort: None, filters: Map::new() }
    }
}

impl PageQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size, ..Default::default() }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// `page=..&size=..[&sort=..][&filters..]`
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("page={}", self.page), format!("size={}", self.size)];
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("sort={}", encode(sort)));
        }
        let filters = build_query_string(&self.filters);
        if !filters.is_empty() {
            parts.push(filters);
        }
        parts.join("&")
    }

    /// Stable cache key for this page of `endpoint`
    pub fn cache_key(&self, endpoint: &str) -> String {
        format!("{}?{}", endpoint, self.to_query_string())
    }
}

/// Encode filters as `key=value` pairs joined by `&`
///
/// Arrays repeat the key per element, nested objects flatten to
/// `parent.child`, null and empty-string values are skipped.
pub fn build_query_string(filters: &Map<String, Value>) -> String {
    let mut pairs = BTreeMap::<String, Vec<String>>::new();
    for (key, value) in filters {
        collect(key, value, &mut pairs);
    }

    pairs
        .iter()
        .flat_map(|(key, values)| values.iter().map(move |v| format!("{}={}", encode(key), encode(v))))
        .collect::<Vec<_>>()
        .join("&")
}

fn collect(key: &str, value: &Value, out: &mut BTreeMap<String, Vec<String>>) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                if let Some(scalar) = scalar(item) {
                    out.entry(key.to_string()).or_default().push(scalar);
                }
            }
        }
        Value::Object(fields) => {
            for (child, nested) in fields {
                collect(&format!("{}.{}", key, child), nested, out);
            }
        }
        other => {
            if let Some(scalar) = scalar(other) {
                out.entry(key.to_string()).or_default().push(scalar);
            }
        }
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_ENCODE_SET).to_string()
}

/// One page of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_count.div_ceil(u64::from(self.size))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filters(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("filters must be an object"),
        }
    }

    #[test]
    fn test_mixed_filter_shapes() {
        let f = filters(json!({
            "status": ["RUNNING", "", "DONE"],
            "owner": { "team": "ml", "id": 7 },
            "name": "fine tune",
            "archived": false,
            "deleted": null,
            "empty": ""
        }));
        assert_eq!(
            build_query_string(&f),
            "archived=false&name=fine%20tune&owner.id=7&owner.team=ml&status=RUNNING&status=DONE"
        );
    }

    #[test]
    fn test_page_query_string() {
        let q = PageQuery::new(2, 20)
            .with_sort("createdAt,desc")
            .with_filter("type", json!(["agent", "tool"]));
        assert_eq!(q.to_query_string(), "page=2&size=20&sort=createdAt%2Cdesc&type=agent&type=tool");
        assert_eq!(q.cache_key("/api/agents"), "/api/agents?page=2&size=20&sort=createdAt%2Cdesc&type=agent&type=tool");
    }

    #[test]
    fn test_default_page_has_no_filters() {
        assert_eq!(PageQuery::default().to_query_string(), "page=1&size=10");
    }

    #[test]
    fn test_page_math() {
        let page: Page<String> = serde_json::from_str(r#"{"items":["a"],"totalCount":41,"page":2,"size":20}"#).unwrap();
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        let last = Page::<String> { page: 3, ..page.clone() };
        assert!(!last.has_next());
        let empty = Page::<String> { size: 0, ..page };
        assert_eq!(empty.total_pages(), 0);
    }
}
