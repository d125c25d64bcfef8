//! Request DTOs for the key/value service
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the SET operation (PUT /set)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl SetRequest {
    /// Validates the request against the configured size limits.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self, max_key_length: usize, max_value_size: usize) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > max_key_length {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                max_key_length
            ));
        }
        if self.value.len() > max_value_size {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                max_value_size
            ));
        }
        None
    }
}
