//! Configuration Module
//!
//! Loads settings for the key/value service from environment variables. The
//! map and cache layers take no configuration.

use std::env;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum accepted key length in bytes
    pub max_key_length: usize,
    /// Maximum accepted value size in bytes
    pub max_value_size: usize,
}

/// Reads `name` and parses it, falling back to `default` when unset or invalid.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MAX_KEY_LENGTH` - Maximum key length in bytes (default: 256)
    /// - `MAX_VALUE_SIZE` - Maximum value size in bytes (default: 1 MiB)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            max_key_length: env_or("MAX_KEY_LENGTH", defaults.max_key_length),
            max_value_size: env_or("MAX_VALUE_SIZE", defaults.max_value_size),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            max_key_length: 256,
            max_value_size: 1024 * 1024, // 1 MiB
        }
    }
}
