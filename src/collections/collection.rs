// ============================================================================
// spark-collection - Collection
// An ordered map that behaves like a list when its keys are 0..n
// ============================================================================

use indexmap::IndexMap;
use indexmap::map::{Iter, IterMut};

use crate::common::error::{CollectionError, Result};
use crate::common::key::Key;

// =============================================================================
// COLLECTION
// =============================================================================

/// An ordered collection of values addressed by integer or string keys.
///
/// Entries iterate in insertion order. Appending with [`push`](Self::push)
/// picks the next free integer key, so a collection built only by pushing
/// is a plain list keyed `0..n`.
///
/// Accessors come in two flavors:
/// 1. Lenient: `get`, `has`, `remove`, `pop` never fail on missing data
/// 2. Strict: `try_get`, `pluck` and the `[]` operator fail on a missing key
///
/// # Example
///
/// ```
/// use spark_collection::{Collection, Key};
///
/// let mut fruits: Collection<&str> = Collection::new();
///
/// // Push appends under the next integer key
/// fruits.push("apple");
/// fruits.push("pear");
/// assert_eq!(fruits.get(1), Some(&"pear"));
///
/// // Put writes under an explicit key
/// fruits.put("best", "fig");
/// assert!(fruits.has("best"));
///
/// // Lenient reads fall back to a default
/// assert_eq!(fruits.get_or("worst", &"none"), &"none");
///
/// // Strict reads fail
/// assert!(fruits.try_get("worst").is_err());
///
/// assert_eq!(fruits.count(), 3);
/// ```
#[derive(Clone)]
pub struct Collection<V> {
    /// The entries, in iteration order
    items: IndexMap<Key, V>,

    /// Key handed out by the next `push`; `None` once `i64::MAX` is taken
    next_index: Option<i64>,
}

impl<V> Collection<V> {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            next_index: Some(0),
        }
    }

    /// Create an empty collection with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: IndexMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Create a collection from key-value pairs.
    ///
    /// Later pairs overwrite earlier ones with the same key, keeping the
    /// position of the first.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut collection = Self::new();
        for (key, value) in pairs {
            collection.put(key, value);
        }
        collection
    }

    /// Wrap an existing map.
    ///
    /// Keys are canonicalized. Should two keys collapse into one, the later
    /// value wins at the earlier position, as with `from_pairs`.
    pub fn from_map(items: IndexMap<Key, V>) -> Self {
        let items = if items.keys().all(|key| key.clone().canonical() == *key) {
            items
        } else {
            let mut canonical = IndexMap::with_capacity(items.len());
            for (key, value) in items {
                canonical.insert(key.canonical(), value);
            }
            canonical
        };
        let next_index = next_index_of(&items);
        Self { items, next_index }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Returns the underlying map.
    pub fn all(&self) -> &IndexMap<Key, V> {
        &self.items
    }

    /// Unwraps into the underlying map.
    pub fn into_inner(self) -> IndexMap<Key, V> {
        self.items
    }

    /// Returns the value under `key`, or `None` if absent.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&V> {
        self.items.get(&key.into().canonical())
    }

    /// Returns the value under `key`, or `default` if absent.
    pub fn get_or<'a, K: Into<Key>>(&'a self, key: K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns a mutable reference to the value under `key`.
    pub fn get_mut<K: Into<Key>>(&mut self, key: K) -> Option<&mut V> {
        self.items.get_mut(&key.into().canonical())
    }

    /// Strict read: fails with [`CollectionError::MissingKey`] if `key` is absent.
    pub fn try_get<K: Into<Key>>(&self, key: K) -> Result<&V> {
        let key = key.into().canonical();
        match self.items.get(&key) {
            Some(value) => Ok(value),
            None => {
                log::debug!("strict read of undefined key `{key}`");
                Err(CollectionError::MissingKey(key))
            }
        }
    }

    /// Returns true if an entry exists under `key`.
    pub fn has<K: Into<Key>>(&self, key: K) -> bool {
        self.items.contains_key(&key.into().canonical())
    }

    /// Returns true if the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of entries. Same as [`len`](Self::len).
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns the key the next `push` will use.
    pub fn next_index(&self) -> Option<i64> {
        self.next_index
    }

    /// Returns true if the keys are exactly `0, 1, .., n-1` in order.
    ///
    /// Such a collection encodes as a JSON array rather than an object.
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .enumerate()
            .all(|(position, key)| matches!(key, Key::Int(i) if usize::try_from(*i) == Ok(position)))
    }

    // =========================================================================
    // ITERATION
    // =========================================================================

    /// Returns an iterator over `(key, value)` pairs in order.
    pub fn iter(&self) -> Iter<'_, Key, V> {
        self.items.iter()
    }

    /// Returns an iterator over `(key, &mut value)` pairs in order.
    pub fn iter_mut(&mut self) -> IterMut<'_, Key, V> {
        self.items.iter_mut()
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Appends `value` under the next free integer key and returns that key.
    ///
    /// # Panics
    /// Panics if the next integer key would exceed `i64::MAX`.
    pub fn push(&mut self, value: V) -> Key {
        let Some(index) = self.next_index else {
            panic!("next integer key overflowed");
        };

        self.items.insert(Key::Int(index), value);
        self.next_index = index.checked_add(1);
        Key::Int(index)
    }

    /// Inserts or overwrites the entry under `key`.
    ///
    /// Returns the previous value. Overwriting keeps the entry's position.
    pub fn put<K: Into<Key>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key.into().canonical();
        self.bump_next_index(&key);
        self.items.insert(key, value)
    }

    /// Writes `value` under `key`, or appends it when no key is given.
    ///
    /// Returns the key the value landed under.
    pub fn store<K: Into<Key>>(&mut self, key: Option<K>, value: V) -> Key {
        match key {
            Some(key) => {
                let key = key.into().canonical();
                self.put(key.clone(), value);
                key
            }
            None => self.push(value),
        }
    }

    /// Removes the entry under `key`, returning its value if it existed.
    ///
    /// Later entries keep their order. Removing never frees the key for `push`.
    pub fn remove<K: Into<Key>>(&mut self, key: K) -> Option<V> {
        self.items.shift_remove(&key.into().canonical())
    }

    /// Renumbers the entries `0..n` in their current order, dropping the old keys.
    #[doc(alias = "values")]
    pub fn reset_keys(&mut self) {
        let len = self.items.len();
        self.items = std::mem::take(&mut self.items)
            .into_values()
            .enumerate()
            .map(|(position, value)| (Key::from(position), value))
            .collect();
        self.next_index = i64::try_from(len).ok();
    }

    /// Removes and returns the last value, or `None` if empty.
    pub fn pop(&mut self) -> Option<V> {
        let (key, value) = self.items.pop()?;

        // Popping the most recently pushed key gives it back
        if let Key::Int(i) = key {
            if i >= 0 && i.checked_add(1) == self.next_index {
                self.next_index = Some(i);
            }
        }

        Some(value)
    }

    /// Replaces every value with `f(&value)`, keeping keys and order.
    ///
    /// The new values are computed before any is written, so a panic in `f`
    /// leaves the collection unchanged. The next integer key is recomputed
    /// from the keys present afterwards.
    pub fn transform<F>(&mut self, mut f: F)
    where
        F: FnMut(&V) -> V,
    {
        log::trace!("transform: {} items", self.items.len());
        let items: IndexMap<Key, V> = self
            .items
            .iter()
            .map(|(key, value)| (key.clone(), f(value)))
            .collect();
        self.next_index = next_index_of(&items);
        self.items = items;
    }

    /// Removes all entries and resets the next integer key.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_index = Some(0);
    }

    /// Move the next free integer key past `key` if needed.
    fn bump_next_index(&mut self, key: &Key) {
        if let (Key::Int(i), Some(next)) = (key, self.next_index) {
            if *i >= next {
                self.next_index = i.checked_add(1);
            }
        }
    }
}

/// One past the largest non-negative integer key, or 0 when there is none.
fn next_index_of<V>(items: &IndexMap<Key, V>) -> Option<i64> {
    items
        .keys()
        .filter_map(Key::as_int)
        .filter(|i| *i >= 0)
        .max()
        .map_or(Some(0), |max| max.checked_add(1))
}

// =============================================================================
// TESTS
// =============================================================================
