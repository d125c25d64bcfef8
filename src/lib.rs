//! Shared Cache - a generic, thread-safe in-memory key/value store
//!
//! [`map::ConcurrentMap`] guards a `HashMap` with one reader/writer lock.
//! [`cache::Cache`] is the narrow put/get/delete/clear capability callers
//! program against, with [`cache::CacheStore`] as its default implementation.
//! The `api` module serves a string cache over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod map;
pub mod models;

pub use api::AppState;
pub use cache::{Cache, CacheStore};
pub use config::Config;
pub use map::ConcurrentMap;
