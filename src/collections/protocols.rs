// ============================================================================
// spark-collection - Standard Trait Impls
// Iteration, indexing, conversion, equality
// ============================================================================

use std::ops::{Index, IndexMut};

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, IterMut};

use super::collection::Collection;
use crate::common::key::Key;

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Collection<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("items", self.all())
            .field("count", &self.len())
            .finish()
    }
}

/// Order-sensitive: equal collections hold equal entries in the same order.
impl<V: PartialEq> PartialEq for Collection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Collection<V> {}

// =============================================================================
// INDEX (strict)
// =============================================================================

impl<V, K: Into<Key>> Index<K> for Collection<V> {
    type Output = V;

    /// Strict read.
    ///
    /// # Panics
    /// Panics if `key` is absent. Use `get` or `try_get` to avoid this.
    fn index(&self, key: K) -> &Self::Output {
        let key = key.into().canonical();
        match self.all().get(&key) {
            Some(value) => value,
            None => panic!("undefined key `{key}`"),
        }
    }
}

impl<V, K: Into<Key>> IndexMut<K> for Collection<V> {
    /// Strict write to an existing entry.
    ///
    /// # Panics
    /// Panics if `key` is absent. Use `put` or `store` to insert.
    fn index_mut(&mut self, key: K) -> &mut Self::Output {
        let key = key.into().canonical();
        match self.get_mut(&key) {
            Some(value) => value,
            None => panic!("undefined key `{key}`"),
        }
    }
}

// =============================================================================
// ITERATION
// =============================================================================

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Collection<V> {
    type Item = (&'a Key, &'a mut V);
    type IntoIter = IterMut<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Collects values as a list, pushing each in turn.
impl<V> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<V> Extend<V> for Collection<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl<V> From<Vec<V>> for Collection<V> {
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<V, const N: usize> From<[V; N]> for Collection<V> {
    fn from(values: [V; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<V> From<IndexMap<Key, V>> for Collection<V> {
    fn from(items: IndexMap<Key, V>) -> Self {
        Self::from_map(items)
    }
}

impl<V> From<Collection<V>> for IndexMap<Key, V> {
    fn from(collection: Collection<V>) -> Self {
        collection.into_inner()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_reads_existing() {
        let c = Collection::from_pairs([("a", 1)]);
        assert_eq!(c["a"], 1);
    }

    #[test]
    #[should_panic(expected = "undefined key `b`")]
    fn index_panics_on_missing() {
        let c = Collection::from_pairs([("a", 1)]);
        let _ = c["b"];
    }

    #[test]
    fn index_mut_writes_existing() {
        let mut c = Collection::from(vec![1, 2]);
        c[1] += 10;
        assert_eq!(c[1], 12);
    }

    #[test]
    #[should_panic(expected = "undefined key `5`")]
    fn index_mut_panics_on_missing() {
        let mut c = Collection::from(vec![1, 2]);
        c[5] = 0;
    }

    #[test]
    fn iteration_yields_pairs_in_order() {
        let mut c = Collection::new();
        c.put("z", 1);
        c.put("a", 2);
        c.push(3);

        let pairs: Vec<(Key, i32)> = (&c).into_iter().map(|(k, v)| (k.clone(), *v)).collect();
        assert_eq!(
            pairs,
            [(Key::from("z"), 1), (Key::from("a"), 2), (Key::Int(0), 3)]
        );
    }

    #[test]
    fn iter_mut_updates() {
        let mut c = Collection::from(vec![1, 2, 3]);
        for (_, v) in &mut c {
            *v *= 2;
        }
        assert_eq!(c, Collection::from(vec![2, 4, 6]));
    }

    #[test]
    fn collect_and_extend() {
        let mut c: Collection<i32> = (1..=3).collect();
        c.extend([4, 5]);
        assert_eq!(c.count(), 5);
        assert_eq!(c[4], 5);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Collection::from_pairs([("x", 1), ("y", 2)]);
        let b = Collection::from_pairs([("y", 2), ("x", 1)]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn debug_format() {
        let c = Collection::from(vec![1]);
        let debug = format!("{c:?}");
        assert!(debug.contains("Collection"));
        assert!(debug.contains("count: 1"));
    }
}
