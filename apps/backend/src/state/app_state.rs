use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::error::AppError;
use crate::http::router::Router;
use crate::repos::store::Store;
use crate::routes;

/// Application state containing shared resources. Immutable once built;
/// shared read-only across all concurrent request handlers.
pub struct AppState {
    /// Persistence store (absent in router-only test scenarios)
    store: Option<Arc<dyn Store>>,
    /// Security configuration for the token codec
    pub security: SecurityConfig,
    /// Route table, populated once at startup
    pub router: Router,
}

impl AppState {
    /// Create a new AppState with the given store and security config
    pub fn new(store: Arc<dyn Store>, security: SecurityConfig) -> Self {
        Self {
            store: Some(store),
            security,
            router: routes::build_router(),
        }
    }

    /// Create a new AppState without a persistence store (for testing)
    pub fn without_store(security: SecurityConfig) -> Self {
        Self {
            store: None,
            security,
            router: routes::build_router(),
        }
    }

    /// The persistence store, or an internal error when running storeless
    pub fn store(&self) -> Result<&Arc<dyn Store>, AppError> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::internal("Persistence store not available"))
    }
}
