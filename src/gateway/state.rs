use std::sync::Arc;

use crate::db::Database;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL database (read-only access)
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}
