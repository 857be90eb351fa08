use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tera::Tera;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool
    db: DatabaseConnection,
    /// Compiled template set, built once at startup
    templates: Arc<Tera>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, templates: Tera) -> Self {
        Self {
            db,
            templates: Arc::new(templates),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn templates(&self) -> &Tera {
        &self.templates
    }
}
