//! StyleRegistry: one [`StyleTable`] per widget kind, type-erased.
//!
//! Widgets intern their own key type through [`StyleRegistry::intern`]; the
//! sync protocol asks for a single stylesheet covering the classes an active
//! tree references.

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashSet};

use super::table::{ClassName, StyleKey, StyleTable};

/// Object-safe view over a `StyleTable<K>` of any key type.
trait ErasedTable: Any {
    fn len(&self) -> usize;
    fn active_rules(&self, active: &HashSet<ClassName>) -> String;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<K: StyleKey> ErasedTable for StyleTable<K> {
    fn len(&self) -> usize {
        StyleTable::len(self)
    }

    fn active_rules(&self, active: &HashSet<ClassName>) -> String {
        self.rules_for(&self.keys_for(active))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// All style tables, ordered by kind name for deterministic output.
#[derive(Default)]
pub struct StyleRegistry {
    tables: BTreeMap<(&'static str, TypeId), Box<dyn ErasedTable>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `key` in its kind's table, creating the table on first use.
    pub fn intern<K: StyleKey>(&mut self, key: &K) -> ClassName {
        let table = self
            .tables
            .entry((K::KIND, TypeId::of::<K>()))
            .or_insert_with(|| Box::new(StyleTable::<K>::new()));
        match table.as_any_mut().downcast_mut::<StyleTable<K>>() {
            Some(table) => table.intern(key),
            // The map key includes the TypeId, so the entry is always a
            // StyleTable<K>.
            None => unreachable!("style table type mismatch for {}", K::KIND),
        }
    }

    /// The table for key type `K`, if anything of that kind was interned.
    pub fn table<K: StyleKey>(&self) -> Option<&StyleTable<K>> {
        self.tables
            .get(&(K::KIND, TypeId::of::<K>()))
            .and_then(|table| table.as_any().downcast_ref::<StyleTable<K>>())
    }

    /// Total interned entries over all kinds.
    pub fn len(&self) -> usize {
        self.tables.values().map(|table| table.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full stylesheet text for the classes in `active`: every kind in name
    /// order, every rule in ordinal order. Classes not in `active` are left
    /// out even though their entries remain interned.
    pub fn stylesheet(&self, active: &HashSet<ClassName>) -> String {
        self.tables
            .values()
            .map(|table| table.active_rules(active))
            .collect()
    }

    /// Forget every interned style.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.tables.iter().map(|((kind, _), table)| (kind, table.len())))
            .finish()
    }
}
