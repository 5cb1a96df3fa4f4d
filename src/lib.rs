// ============================================================================
// spark-collection - An Ordered Keyed Collection for Rust
// ============================================================================
//
// One container, `Collection<V>`, that is a list when its keys are 0..n and
// an ordered map otherwise. Derived operations (flatten, reverse, map,
// unique) return fresh collections; everything else mutates in place.
// ============================================================================

#[macro_use]
mod macros;

pub mod collections;
pub mod common;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use indexmap::IndexMap;

pub use collections::Collection;
pub use common::error::{CollectionError, Result};
pub use common::key::Key;
pub use common::traits::{Children, Lookup, Nested};
pub use value::Value;

#[cfg(feature = "json")]
pub use json::{JsonFormat, ToJson};

// =============================================================================
// TESTS
// =============================================================================
