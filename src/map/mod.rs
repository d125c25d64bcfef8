//! Concurrent Map Module
//!
//! Generic key/value storage guarded by a single reader/writer lock.

mod concurrent;


// Re-export public types
pub use concurrent::ConcurrentMap;
