// ============================================================================
// spark-collection - Derived Collections
// Operations that leave the source untouched and return a fresh collection
// ============================================================================

use indexmap::IndexMap;

use super::collection::Collection;
use crate::common::error::{CollectionError, Result};
use crate::common::key::Key;
use crate::common::traits::{Children, Lookup, Nested};

impl<V> Collection<V> {
    // =========================================================================
    // FLATTEN
    // =========================================================================

    /// Returns a new list holding every leaf value, depth first.
    ///
    /// Array-like values (see [`Nested`]) are descended into and their keys
    /// dropped. The result is keyed `0..n`.
    ///
    /// # Example
    ///
    /// ```
    /// use spark_collection::{value, Collection, Value};
    ///
    /// let nested = Collection::from(vec![value!(1), value!([2, 3, [4]]), value!(5)]);
    /// let flat: Vec<Value> = nested.flatten().into_iter().map(|(_, v)| v).collect();
    ///
    /// assert_eq!(flat, vec![value!(1), value!(2), value!(3), value!(4), value!(5)]);
    /// ```
    pub fn flatten(&self) -> Collection<V>
    where
        V: Nested + Clone,
    {
        let mut leaves = Vec::with_capacity(self.len());
        collect_leaves(Box::new(self.all().values()), &mut leaves);

        log::trace!("flatten: {} items -> {} leaves", self.len(), leaves.len());
        Collection::from(leaves)
    }

    // =========================================================================
    // REVERSE
    // =========================================================================

    /// Returns a new collection with the entries in reverse order.
    ///
    /// String keys stay attached to their values. Integer keys are
    /// renumbered `0, 1, ..` in the new order.
    pub fn reverse(&self) -> Collection<V>
    where
        V: Clone,
    {
        let mut position: i64 = 0;
        let items: IndexMap<Key, V> = self
            .iter()
            .rev()
            .map(|(key, value)| {
                let key = match key {
                    Key::Int(_) => {
                        let renumbered = Key::Int(position);
                        position += 1;
                        renumbered
                    }
                    Key::Str(_) => key.clone(),
                };
                (key, value.clone())
            })
            .collect();

        log::trace!("reverse: {} items", items.len());
        Collection::from_map(items)
    }

    // =========================================================================
    // MAP
    // =========================================================================

    /// Returns a new collection of `f(value)` for each value, keeping keys.
    pub fn map<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&V) -> U,
    {
        let items: IndexMap<Key, U> = self
            .iter()
            .map(|(key, value)| (key.clone(), f(value)))
            .collect();

        Collection::from_map(items)
    }

    // =========================================================================
    // UNIQUE
    // =========================================================================

    /// Returns a new collection keeping only the first occurrence of each value.
    ///
    /// Retained entries keep their keys and relative order.
    pub fn unique(&self) -> Collection<V>
    where
        V: PartialEq + Clone,
    {
        let mut items: IndexMap<Key, V> = IndexMap::with_capacity(self.len());
        for (key, value) in self.iter() {
            if !items.values().any(|seen| seen == value) {
                items.insert(key.clone(), value.clone());
            }
        }

        log::trace!("unique: {} items -> {}", self.len(), items.len());
        Collection::from_map(items)
    }

    // =========================================================================
    // PLUCK
    // =========================================================================

    /// Reads `key` out of every element, in order.
    ///
    /// Strict: fails on the first element that is not indexable or has no
    /// entry under `key`.
    pub fn pluck<K>(&self, key: K) -> Result<Vec<V::Output>>
    where
        K: Into<Key>,
        V: Lookup,
        V::Output: Clone,
    {
        let key = key.into().canonical();
        let mut plucked = Vec::with_capacity(self.len());

        for (at, item) in self.iter() {
            if !item.is_indexable() {
                log::debug!("pluck `{key}`: item at `{at}` is not indexable");
                return Err(CollectionError::NotIndexable { at: at.clone() });
            }
            match item.lookup(&key) {
                Some(value) => plucked.push(value.clone()),
                None => {
                    log::debug!("pluck `{key}`: item at `{at}` has no such key");
                    return Err(CollectionError::PluckMissing {
                        at: at.clone(),
                        key,
                    });
                }
            }
        }

        Ok(plucked)
    }
}

/// Depth-first walk pushing every non-nested value into `out`.
fn collect_leaves<'a, V>(values: Children<'a, V>, out: &mut Vec<V>)
where
    V: Nested + Clone + 'a,
{
    for value in values {
        match value.children() {
            Some(children) => collect_leaves(children, out),
            None => out.push(value.clone()),
        }
    }
}

// =============================================================================
// LOOKUP FOR COLLECTIONS
// =============================================================================

impl<V> Lookup for Collection<V> {
    type Output = V;

    fn lookup(&self, key: &Key) -> Option<&V> {
        self.get(key)
    }
}

// =============================================================================
// TESTS
// =============================================================================
