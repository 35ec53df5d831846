//! Wire types shared by every paginated collection endpoint.
//!
//! Collection endpoints answer with `{ "count": N, "results": [...] }` and
//! accept a flat query map (`limit`, `offset`/`page`, `ordering`, filters).

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// One page of a collection plus the total number of matching records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub count: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
        }
    }
}

impl<T> ListPage<T> {
    pub fn new(count: u64, results: Vec<T>) -> Self {
        Self { count, results }
    }

    /// A page with no rows. Past-the-end pages look like this too.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Converts every row, stopping at the first failure.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<ListPage<U>, E> {
        let results = self.results.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(ListPage {
            count: self.count,
            results,
        })
    }
}

/// Sort direction for the `ordering` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Prefix used by the API: descending fields are written as `-field`.
    pub fn prefix(self) -> &'static str {
        match self {
            SortDirection::Asc => "",
            SortDirection::Desc => "-",
        }
    }
}

/// A single query-string value. The API accepts strings and integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Int(v) => write!(f, "{}", v),
            QueryValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Int(v)
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Int(i64::from(v))
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Text(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Text(v)
    }
}

/// Ordered query map sent to a collection endpoint.
///
/// Keys are kept sorted so two derivations of the same state compare equal
/// and serialize to the same query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, QueryValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.0.remove(key)
    }

    /// Merges `other` on top of `self`; keys present in both take `other`'s value.
    pub fn merge(&mut self, other: QueryParams) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, QueryValue> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a String, &'a QueryValue);
    type IntoIter = btree_map::Iter<'a, String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_page_parses_api_payload() {
        let raw = r#"{"count": 42, "next": null, "results": [{"id": 1}, {"id": 2}]}"#;
        let page: ListPage<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.count, 42);
        assert_eq!(page.results.len(), 2);
    }

    #[test]
    fn test_list_page_without_results_is_empty() {
        let page: ListPage<serde_json::Value> = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_sort_direction_prefix() {
        assert_eq!(SortDirection::Asc.prefix(), "");
        assert_eq!(SortDirection::Desc.prefix(), "-");
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    }

    #[test]
    fn test_query_params_merge_prefers_right_side() {
        let mut base: QueryParams = [("limit", QueryValue::from(10i64)), ("atype", "0".into())]
            .into_iter()
            .collect();
        let extra: QueryParams = [("atype", "1")].into_iter().collect();
        base.merge(extra);
        assert_eq!(base.get("atype"), Some(&QueryValue::Text("1".to_string())));
        assert_eq!(base.get("limit"), Some(&QueryValue::Int(10)));
    }

    #[test]
    fn test_query_params_serialize_as_flat_map() {
        let params: QueryParams = [("limit", QueryValue::from(5i64)), ("type", "alert".into())]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"limit": 5, "type": "alert"}));
    }
}
