//! Application state shared across handlers

use std::sync::Arc;

use gemdrop_common::AppConfig;
use gemdrop_db::PgPool;
use gemdrop_service::ServiceContext;

/// Shared application state
///
/// Cheap to clone; all fields are reference counted or pooled.
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    pool: PgPool,
}

impl AppState {
    /// Create new application state
    pub fn new(service_context: ServiceContext, config: AppConfig, pool: PgPool) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            pool,
        }
    }

    /// Access the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Access the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Access the database pool (readiness probe only)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
