// ============================================================================
// spark-collection - Collections
// The Collection type and everything built on top of it
// ============================================================================
//
// collection.rs  - storage, lenient/strict reads, in-place mutation
// derived.rs     - flatten, reverse, map, unique, pluck
// protocols.rs   - iteration, indexing, conversions, equality
// ============================================================================

mod collection;
mod derived;
mod protocols;

pub use collection::Collection;
