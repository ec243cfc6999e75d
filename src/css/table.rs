//! Per-kind style interning: ClassName, StyleKey, StyleTable.
//!
//! Each widget kind owns one [`StyleTable`] mapping its style key (every
//! visually relevant constructor parameter, as an immutable value) to a
//! shared class name `shared-<kind>-<ordinal>`. Tables only grow; a class that
//! no live tree references is filtered out at stylesheet time, never removed.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use super::model::{DeclarationBlock, RuleSet};

// ---------------------------------------------------------------------------
// ClassName
// ---------------------------------------------------------------------------

/// A shared style class name, e.g. `shared-text-0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    /// Build the class name for `kind` at `ordinal`.
    pub fn new(kind: &str, ordinal: usize) -> Self {
        ClassName(format!("shared-{kind}-{ordinal}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The CSS class selector (`.shared-text-0`).
    pub fn selector(&self) -> String {
        format!(".{}", self.0)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// StyleKey
// ---------------------------------------------------------------------------

/// A normalized, hashable style description for one widget kind.
///
/// Keys are owned values: the table clones the key on first intern, so later
/// changes to a caller's copy can never alter what a class name stands for.
pub trait StyleKey: Clone + Eq + Hash + fmt::Debug + 'static {
    /// The kind segment of the class name (`"text"`, `"button"`, ...).
    const KIND: &'static str;

    /// The declarations of the shared rule for this key.
    fn declarations(&self) -> DeclarationBlock;
}

// ---------------------------------------------------------------------------
// StyleTable
// ---------------------------------------------------------------------------

/// Grow-only map from style key to shared class name, iterated in ordinal
/// order.
#[derive(Debug)]
pub struct StyleTable<K: StyleKey> {
    entries: IndexMap<K, ClassName>,
}

impl<K: StyleKey> Default for StyleTable<K> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K: StyleKey> StyleTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the class for `key`, allocating `shared-<kind>-<len>` on first
    /// sight. Structurally equal keys always get the same name.
    pub fn intern(&mut self, key: &K) -> ClassName {
        if let Some(existing) = self.entries.get(key) {
            return existing.clone();
        }
        let class = ClassName::new(K::KIND, self.entries.len());
        debug!(kind = K::KIND, class = %class, "interned style");
        self.entries.insert(key.clone(), class.clone());
        class
    }

    /// The class previously interned for `key`.
    pub fn get(&self, key: &K) -> Option<&ClassName> {
        self.entries.get(key)
    }

    /// The ordinal `key` was interned at.
    pub fn ordinal(&self, key: &K) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every interned entry in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &ClassName)> {
        self.entries.iter()
    }

    /// The keys whose class names appear in `active`.
    pub fn keys_for(&self, active: &HashSet<ClassName>) -> HashSet<K> {
        self.entries
            .iter()
            .filter(|(_, class)| active.contains(*class))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// One rule per interned key in `keys`, in ordinal order, each on its own
    /// line. Keys that were never interned are ignored.
    pub fn rules_for(&self, keys: &HashSet<K>) -> String {
        self.entries
            .iter()
            .filter(|(key, _)| keys.contains(*key))
            .map(|(key, class)| format!("{}\n", RuleSet::new(class.selector(), key.declarations())))
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Sample {
        color: &'static str,
        size: i32,
    }

    impl StyleKey for Sample {
        const KIND: &'static str = "sample";

        fn declarations(&self) -> DeclarationBlock {
            DeclarationBlock::new()
                .with("color", self.color)
                .with("font-size", format!("{}px", self.size))
        }
    }

    fn key(color: &'static str, size: i32) -> Sample {
        Sample { color, size }
    }

    #[test]
    fn class_name_format() {
        let class = ClassName::new("text", 3);
        assert_eq!(class.as_str(), "shared-text-3");
        assert_eq!(class.selector(), ".shared-text-3");
    }

    #[test]
    fn equal_keys_share_a_class() {
        let mut table = StyleTable::new();
        let a = table.intern(&key("red", 12));
        let b = table.intern(&key("red", 12));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "shared-sample-0");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn one_field_difference_allocates() {
        let mut table = StyleTable::new();
        let a = table.intern(&key("red", 12));
        let b = table.intern(&key("red", 13));
        assert_ne!(a, b);
        assert_eq!(b.as_str(), "shared-sample-1");
        assert_eq!(table.get(&key("red", 13)), Some(&b));
    }

    #[test]
    fn ordinal_follows_first_intern() {
        let mut table = StyleTable::new();
        table.intern(&key("red", 1));
        table.intern(&key("green", 2));
        table.intern(&key("red", 1));
        assert_eq!(table.ordinal(&key("green", 2)), Some(1));
        assert_eq!(table.ordinal(&key("blue", 3)), None);
        let classes: Vec<_> = table.iter().map(|(_, class)| class.to_string()).collect();
        assert_eq!(classes, ["shared-sample-0", "shared-sample-1"]);
    }

    #[test]
    fn intern_clones_the_key() {
        let mut table = StyleTable::new();
        let mut caller_copy = key("red", 12);
        let class = table.intern(&caller_copy);
        caller_copy.size = 40;
        assert_eq!(table.get(&key("red", 12)), Some(&class));
        assert_eq!(table.get(&caller_copy), None);
    }

    #[test]
    fn rules_for_filters_and_keeps_ordinal_order() {
        let mut table = StyleTable::new();
        table.intern(&key("red", 1));
        table.intern(&key("green", 2));
        table.intern(&key("blue", 3));
        let keys: HashSet<_> = [key("blue", 3), key("red", 1)].into_iter().collect();
        assert_eq!(
            table.rules_for(&keys),
            ".shared-sample-0 { color: red; font-size: 1px; }\n\
             .shared-sample-2 { color: blue; font-size: 3px; }\n"
        );
    }

    #[test]
    fn keys_for_active_classes() {
        let mut table = StyleTable::new();
        table.intern(&key("red", 1));
        let green = table.intern(&key("green", 2));
        let active: HashSet<_> = [green, ClassName::new("other", 0)].into_iter().collect();
        let keys = table.keys_for(&active);
        assert_eq!(keys.len(), 1);
        assert!(keys.contains(&key("green", 2)));
    }

    #[test]
    fn unreferenced_entries_stay_in_table() {
        let mut table = StyleTable::new();
        table.intern(&key("red", 1));
        assert_eq!(table.rules_for(&HashSet::new()), "");
        assert_eq!(table.len(), 1);
        let again = table.intern(&key("red", 1));
        assert_eq!(again.as_str(), "shared-sample-0");
    }
}
