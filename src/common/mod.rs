// ============================================================================
// spark-collection - Common Types
// ============================================================================

pub mod error;
pub mod key;
pub mod traits;
