//! Key/value labels
//!
//! This module provides:
//! - `Labels`: a resolved, key-sorted set of labels owned by a single entry
//! - `LabelStore`: the thread-safe store shared by an instance, holding
//!   static and dynamic values
//!
//! Both keep keys unique and sorted ascending after every mutation, so the
//! formatted output is deterministic for a given key set.

use parking_lot::Mutex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Producer of a dynamic label value, evaluated whenever the store is snapshotted.
pub type DynamicLabel = Arc<dyn Fn() -> String + Send + Sync>;

/// Overwrites the value for `key` in place, or appends a new pair, then re-sorts.
pub(crate) fn upsert<V>(pairs: &mut Vec<(String, V)>, key: String, value: V) {
    match pairs.iter().position(|(k, _)| *k == key) {
        Some(idx) => pairs[idx].1 = value,
        None => pairs.push((key, value)),
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
}

/// Resolved labels, sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    pairs: Vec<(String, String)>,
}

impl Labels {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Set a label, overwriting any existing value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        upsert(&mut self.pairs, key.into(), value.into());
    }

    /// Builder-style variant of [`Labels::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Add every label from `other` whose key is not already present.
    ///
    /// Labels already held take priority over `other`.
    pub fn merge_missing(&mut self, other: &Labels) {
        let mut changed = false;
        for (key, value) in &other.pairs {
            if !self.contains_key(key) {
                self.pairs.push((key.clone(), value.clone()));
                changed = true;
            }
        }
        if changed {
            self.pairs.sort_by(|a, b| a.0.cmp(&b.0));
        }
    }

    /// Format labels as space-joined `key=value` tokens
    pub fn format_fields(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl Serialize for Labels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut labels = Labels::new();
        for (key, value) in iter {
            labels.set(key, value);
        }
        labels
    }
}

#[derive(Clone)]
enum LabelValue {
    Static(String),
    Dynamic(DynamicLabel),
}

impl fmt::Debug for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Static(s) => f.debug_tuple("Static").field(s).finish(),
            LabelValue::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Thread-safe label store shared by an instance.
///
/// Every read and write holds the store's lock for its duration. Snapshots
/// copy the pairs under the lock and evaluate dynamic producers after
/// releasing it, so a producer may itself log through the same instance.
///
/// # Example
///
/// ```
/// use labelled_logger::core::LabelStore;
///
/// let store = LabelStore::new();
/// store.set("service", "checkout");
/// store.set_dynamic("pid", || std::process::id().to_string());
///
/// let labels = store.snapshot();
/// assert_eq!(labels.keys().collect::<Vec<_>>(), vec!["pid", "service"]);
/// ```
#[derive(Debug, Default)]
pub struct LabelStore {
    pairs: Mutex<Vec<(String, LabelValue)>>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self {
            pairs: Mutex::new(Vec::new()),
        }
    }

    /// Set a static label. An existing key is overwritten in place.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        upsert(
            &mut *self.pairs.lock(),
            key.into(),
            LabelValue::Static(value.into()),
        );
    }

    /// Set a label whose value is produced on every snapshot.
    pub fn set_dynamic<F>(&self, key: impl Into<String>, producer: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.set_producer(key, Arc::new(producer));
    }

    /// Like [`LabelStore::set_dynamic`], for an already shared producer.
    pub fn set_producer(&self, key: impl Into<String>, producer: DynamicLabel) {
        upsert(
            &mut *self.pairs.lock(),
            key.into(),
            LabelValue::Dynamic(producer),
        );
    }

    pub fn remove(&self, key: &str) -> bool {
        let mut pairs = self.pairs.lock();
        let before = pairs.len();
        pairs.retain(|(k, _)| k != key);
        pairs.len() != before
    }

    pub fn clear(&self) {
        self.pairs.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.lock().is_empty()
    }

    /// Resolve every label into an owned, sorted copy.
    ///
    /// A dynamic producer that panics is left out of the result.
    pub fn snapshot(&self) -> Labels {
        self.snapshot_with(|_| {})
    }

    /// Like [`LabelStore::snapshot`], calling `on_failure` with the key of
    /// each dynamic label that failed to produce a value.
    pub(crate) fn snapshot_with(&self, mut on_failure: impl FnMut(&str)) -> Labels {
        let pairs = self.pairs.lock().clone();

        let mut resolved = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            match value {
                LabelValue::Static(s) => resolved.push((key, s)),
                LabelValue::Dynamic(producer) => {
                    match panic::catch_unwind(AssertUnwindSafe(|| producer())) {
                        Ok(s) => resolved.push((key, s)),
                        Err(_) => on_failure(&key),
                    }
                }
            }
        }

        // Already sorted: the store is sorted on every mutation.
        Labels { pairs: resolved }
    }
}
