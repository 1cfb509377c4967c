//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::cart::{CartService, PgCartService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub cart: Arc<dyn CartService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// The in-memory cart aggregate is created here, lives for the
    /// process lifetime, and is never persisted.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or
    /// bootstrapping the cart table fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::ensure_cart_table(&pool)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            cart: Arc::new(PgCartService::new(db)),
        })
    }
}
