//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Initialized once during server startup and cloned for each request via Axum's state
/// extraction. `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
