// ============================================================================
// spark-collection - Errors
// ============================================================================

use thiserror::Error;

use super::key::Key;

/// Errors returned by the strict accessors and the JSON layer.
///
/// Lenient accessors (`get`, `has`, `remove`, `pop`) never produce these.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A strict read addressed a key that is not present.
    #[error("undefined key `{0}`")]
    MissingKey(Key),

    /// An element visited by `pluck` has no entry under the plucked key.
    #[error("item at `{at}` has no key `{key}`")]
    PluckMissing { at: Key, key: Key },

    /// An element visited by `pluck` is a leaf and cannot be indexed.
    #[error("item at `{at}` is not indexable")]
    NotIndexable { at: Key },

    #[cfg(feature = "json")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CollectionError>;
