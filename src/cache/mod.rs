//! Cache Module
//!
//! A narrow put/get/delete/clear capability over the concurrent map, so call
//! sites depend on the [`Cache`] trait rather than a concrete store.

mod store;
mod traits;

// Re-export public types
pub use store::CacheStore;
pub use traits::Cache;
