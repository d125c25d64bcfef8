//! Request and Response models for the key/value service
//!
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SetRequest;
pub use responses::{ClearResponse, DeleteResponse, GetResponse, HealthResponse, SetResponse};
