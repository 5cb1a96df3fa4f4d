// ============================================================================
// spark-collection - Element Traits
// How flatten and pluck see inside the values they visit
// ============================================================================

use super::key::Key;

/// Iterator over the children of an array-like value.
pub type Children<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

// =============================================================================
// NESTED
// =============================================================================

/// A value that may itself hold further values of the same type.
///
/// `Collection::flatten` recurses into every value whose `children` returns
/// `Some`, and keeps every value returning `None` as a leaf. Keys of nested
/// containers are discarded.
pub trait Nested: Sized {
    /// The children in iteration order, or `None` for a leaf.
    fn children(&self) -> Option<Children<'_, Self>>;
}

// =============================================================================
// LOOKUP
// =============================================================================

/// A value that can be indexed by [`Key`].
///
/// Used by `Collection::pluck` to read one field out of every element.
pub trait Lookup {
    type Output;

    /// Whether this value can be indexed at all.
    ///
    /// Leaves (numbers, strings, ...) return `false`.
    fn is_indexable(&self) -> bool {
        true
    }

    /// Returns the entry stored under `key`, if any.
    fn lookup(&self, key: &Key) -> Option<&Self::Output>;
}
