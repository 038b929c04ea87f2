//! Query-parameter extraction
//!
//! Reads a fixed set of recognized keys from an externally supplied
//! key/value snapshot (conventionally a URL's query parameters), optionally
//! namespaced by a prefix. The snapshot is always passed by argument; the
//! crate never reads an ambient location object, which keeps extraction
//! trivially unit-testable.

use indexmap::IndexMap;

/// Externally owned snapshot of string key/value pairs
///
/// Read-only to this crate. Insertion order is preserved so repeated
/// extractions iterate deterministically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSource {
    entries: IndexMap<String, String>,
}

impl ParamSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Result of one extraction call
///
/// Maps each recognized key (unprefixed) to its value, or `None` when the
/// effective key was absent or empty in the source. Allocated fresh on
/// every call; no identity persists across extractions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedParams {
    values: IndexMap<String, Option<String>>,
}

impl ExtractedParams {
    /// Value for a recognized key, `None` when absent or empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_deref())
    }

    /// Whether the key was part of the recognized set at all
    pub fn recognizes(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over (key, value) pairs in extraction order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

/// Extract the recognized keys from a parameter snapshot
///
/// With a prefix, the effective lookup key for `key` is `"{prefix}_{key}"`;
/// the result entry is always stored under the unprefixed name. No type
/// coercion happens here: numeric-looking values stay strings and callers
/// parse them (see [`ListParams`]). Pure and total: absent or malformed
/// input yields `None` for that key, never an error.
pub fn extract(source: &ParamSource, keys: &[&str], prefix: Option<&str>) -> ExtractedParams {
    let values = keys
        .iter()
        .map(|key| {
            let effective = match prefix {
                Some(p) => format!("{}_{}", p, key),
                None => (*key).to_string(),
            };
            let value = source
                .get(&effective)
                .filter(|v| !v.is_empty())
                .map(str::to_string);
            ((*key).to_string(), value)
        })
        .collect();

    ExtractedParams { values }
}

/// Typed view of the listing keys the dashboard recognizes
///
/// Values stay raw strings as extracted; the accessors perform the parsing
/// with documented defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    /// Free-text filter over group names
    pub q: Option<String>,

    /// Sort directive in `[-]field` encoding
    pub order: Option<String>,

    /// Page offset, raw string form
    pub offset: Option<String>,

    /// Page size, raw string form
    pub limit: Option<String>,
}

impl ListParams {
    /// The recognized keys, in extraction order
    pub const KEYS: [&'static str; 4] = ["q", "order", "offset", "limit"];

    pub fn from_extracted(params: &ExtractedParams) -> Self {
        Self {
            q: params.get("q").map(str::to_string),
            order: params.get("order").map(str::to_string),
            offset: params.get("offset").map(str::to_string),
            limit: params.get("limit").map(str::to_string),
        }
    }

    /// Parsed offset, defaulting to 0 on absent or malformed input
    pub fn offset(&self) -> usize {
        self.offset
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }

    /// Parsed page size, defaulting on absent or malformed input and
    /// clamped to `1..=max`
    pub fn limit_or(&self, default: usize, max: usize) -> usize {
        self.limit
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(default)
            .clamp(1, max.max(1))
    }
}
