//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        history::{HistoryService, PgHistoryService},
        search::{CatalogSearchService, SearchService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub search: Arc<dyn SearchService>,
    pub history: Arc<dyn HistoryService>,
    db: Db,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(
        url: &str,
        database_name: Option<&str>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, database_name)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        info!("database migrations applied");

        Ok(Self::from_db(Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            search: Arc::new(CatalogSearchService::default()),
            history: Arc::new(PgHistoryService::new(db.pool().clone())),
            db,
        }
    }

    /// Release the database pool.
    pub async fn close(&self) {
        self.db.close().await;
    }
}
