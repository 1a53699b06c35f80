use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Canonical configuration tree: a nested mapping with no dotted keys.
pub type ConfigMap = Map<String, Value>;

/// Hierarchical key/value store addressed with dot-notation paths.
///
/// The store is filled once through [`normalize`](ConfigStore::normalize) and
/// afterwards only grows or changes through [`merge`](ConfigStore::merge), so
/// a later value never wipes out unrelated siblings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    tree: ConfigMap,
}

impl ConfigStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self { tree: ConfigMap::new() }
    }

    /// Build a store from raw values, expanding dotted keys.
    pub fn from_map(raw: ConfigMap) -> Self {
        let mut store = Self::new();
        store.normalize(raw);
        store
    }

    /// Replace the tree with the canonical form of `raw`.
    ///
    /// Empty input leaves the store untouched.
    pub fn normalize(&mut self, raw: ConfigMap) {
        if raw.is_empty() {
            return;
        }
        self.tree = normalize(raw);
    }

    /// Deep-merge `updates` over the current tree.
    pub fn merge(&mut self, updates: ConfigMap) {
        let current = std::mem::take(&mut self.tree);
        self.tree = merge(current, updates);
    }

    /// Merge a single dotted key. Siblings of `key` are preserved.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let mut updates = ConfigMap::new();
        updates.insert(key.to_string(), value.into());
        self.merge(updates);
    }

    /// Look up a dotted path.
    pub fn get(&self, key: &str) -> Option<&Value> {
        get(&self.tree, key)
    }

    /// Look up a dotted path and deserialize it into `T`.
    ///
    /// Returns `None` when the key is absent or has an incompatible shape.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Get a configuration value with default
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get_as(key).unwrap_or(default)
    }

    /// Check if key exists
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn as_map(&self) -> &ConfigMap {
        &self.tree
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Top-level keys of the tree
    pub fn keys(&self) -> Vec<String> {
        self.tree.keys().cloned().collect()
    }
}

/// Expand every dotted key of `raw`, at any depth, into nested mappings.
///
/// Keys with an empty segment (`""`, `"a..b"`, `".a"`, `"a."`) cannot be
/// addressed by [`get`] and are dropped with a warning. Sequences are left
/// as they are; their elements are opaque values.
pub fn normalize(raw: ConfigMap) -> ConfigMap {
    let mut canonical = ConfigMap::new();
    for (key, value) in raw {
        if key.split('.').any(str::is_empty) {
            log::warn!("Dropping configuration key '{}': empty path segment", key);
            continue;
        }
        let value = match value {
            Value::Object(nested) => Value::Object(normalize(nested)),
            other => other,
        };
        let (head, value) = nest(&key, value);
        merge_entry(&mut canonical, head, value);
    }
    canonical
}

/// Deep-merge `updates` onto `current`.
///
/// `updates` is normalized first. For each key, two mappings merge
/// recursively; in every other case the update's value wins.
pub fn merge(current: ConfigMap, updates: ConfigMap) -> ConfigMap {
    let mut merged = current;
    for (key, value) in normalize(updates) {
        merge_entry(&mut merged, key, value);
    }
    merged
}

/// Traverse `tree` segment by segment.
///
/// Returns `None` as soon as a segment is missing or an intermediate value
/// is not a mapping.
pub fn get<'a>(tree: &'a ConfigMap, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return None;
    }
    let mut segments = key.split('.');
    let mut current = tree.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Split a dotted key into its first segment and the nested value for the rest.
fn nest(key: &str, value: Value) -> (String, Value) {
    let segments: Vec<&str> = key.split('.').collect();
    if segments.len() == 1 {
        return (key.to_string(), value);
    }

    let mut nested = value;
    for segment in segments[1..].iter().rev() {
        let mut map = ConfigMap::new();
        map.insert((*segment).to_string(), nested);
        nested = Value::Object(map);
    }
    (segments[0].to_string(), nested)
}

fn merge_entry(target: &mut ConfigMap, key: String, value: Value) {
    let incoming = match value {
        Value::Object(incoming) => incoming,
        scalar => {
            target.insert(key, scalar);
            return;
        }
    };

    if let Some(Value::Object(existing)) = target.get_mut(&key) {
        for (child_key, child_value) in incoming {
            merge_entry(existing, child_key, child_value);
        }
        return;
    }
    target.insert(key, Value::Object(incoming));
}
