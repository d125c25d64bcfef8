//! API Handlers
//!
//! HTTP request handlers for each key/value service endpoint. Handlers only
//! see the [`Cache`] trait, never a concrete store.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::{Cache, CacheStore};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, SetRequest, SetResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache backend
    pub cache: Arc<dyn Cache<String, String>>,
    /// Maximum accepted key length in bytes
    pub max_key_length: usize,
    /// Maximum accepted value size in bytes
    pub max_value_size: usize,
}

impl AppState {
    /// Creates a new AppState over a caller-supplied cache, taking request
    /// limits from `config`.
    pub fn new(cache: Arc<dyn Cache<String, String>>, config: &Config) -> Self {
        Self {
            cache,
            max_key_length: config.max_key_length,
            max_value_size: config.max_value_size,
        }
    }

    /// Creates a new AppState from configuration, backed by a fresh [`CacheStore`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(CacheStore::<String, String>::new()), config)
    }
}

/// Handler for PUT /set
///
/// Stores a key-value pair, replacing any previous value.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate(state.max_key_length, state.max_value_size) {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    state.cache.put(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value by key; a missing key maps to 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(ApiError::NotFound(key)),
    }
}

/// Handler for DELETE /del/:key
///
/// Deleting a key that does not exist still succeeds.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    state.cache.delete(&key);

    Json(DeleteResponse::new(key))
}

/// Handler for DELETE /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear();
    debug!("Cache cleared via API");

    Json(ClearResponse::new())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
