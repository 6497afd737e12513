use std::sync::Arc;

use crate::config::ServerConfig;
use crate::revalidate::Revalidator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ablek_db::DbPool,
    /// Server configuration (credential fallbacks, session secret, paths).
    pub config: Arc<ServerConfig>,
    /// Render-invalidation signal bumped after every mutating operation.
    pub revalidator: Arc<Revalidator>,
}
