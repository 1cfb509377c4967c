//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, query};

/// Idempotent DDL for the cart line-item table.
///
/// Rows are keyed by item name without a uniqueness constraint: repeated
/// adds of the same item produce additional rows, and removal decrements
/// quantity in place rather than deleting.
pub const CREATE_CART_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS cart (
    item TEXT NOT NULL,
    price NUMERIC NOT NULL,
    quantity BIGINT NOT NULL
)";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin the transaction holding one request's store statements.
    ///
    /// Dropping the transaction without committing rolls it back, so every
    /// exit path releases the connection.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Create the cart table if it does not exist yet.
///
/// # Errors
///
/// Returns an error when executing the DDL fails.
pub async fn ensure_cart_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    query(CREATE_CART_TABLE_SQL).execute(pool).await?;

    Ok(())
}
