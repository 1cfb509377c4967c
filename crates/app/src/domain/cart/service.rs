//! Cart service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    database::Db,
    domain::cart::{
        aggregate::CartAggregate,
        errors::CartServiceError,
        models::{ItemRemoval, ItemTotals, NewLineItem},
        repository::PgCartRepository,
    },
};

#[derive(Debug)]
pub struct PgCartService {
    db: Db,
    repository: PgCartRepository,
    aggregate: Mutex<CartAggregate>,
}

impl PgCartService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartRepository::new(),
            aggregate: Mutex::new(CartAggregate::new()),
        }
    }
}

#[async_trait]
impl CartService for PgCartService {
    async fn add_item(&self, item: NewLineItem) -> Result<ItemTotals, CartServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.insert_line_item(&mut tx, &item).await?;

        tx.commit().await?;

        info!(
            "item {} added to cart with price {} and quantity {}",
            item.item, item.price, item.quantity
        );

        // Patch memory only once the store commit has succeeded, so a
        // store failure never dirties the aggregate.
        let mut aggregate = self.aggregate.lock().await;

        aggregate.record_addition(&item.item, item.quantity, item.price);

        Ok(ItemTotals {
            quantity: item.quantity,
            price: item.price,
        })
    }

    async fn get_cart(&self) -> Result<FxHashMap<String, ItemTotals>, CartServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self.repository.select_line_items(&mut tx).await?;

        tx.commit().await?;

        let entries = CartAggregate::from_rows(rows).into_entries();

        info!("fetched {} aggregated items from cart", entries.len());

        Ok(entries)
    }

    async fn remove_item(&self, removal: ItemRemoval) -> Result<(), CartServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .decrement_line_items(&mut tx, &removal.item, removal.quantity)
            .await?;

        tx.commit().await?;

        if rows_affected == 0 {
            return Err(CartServiceError::InsufficientQuantity { item: removal.item });
        }

        info!("{} {} removed from cart", removal.quantity, removal.item);

        let mut aggregate = self.aggregate.lock().await;

        aggregate.record_removal(&removal.item, removal.quantity);

        Ok(())
    }

    async fn apply_discount(&self, percentage: Decimal) -> Result<Decimal, CartServiceError> {
        info!("applying {percentage}% discount");

        let mut aggregate = self.aggregate.lock().await;

        Ok(aggregate.apply_discount(percentage))
    }

    async fn total_price(&self) -> Result<Option<Decimal>, CartServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.sum_total_price(&mut tx).await?;

        tx.commit().await?;

        info!("total cart price: {total:?}");

        Ok(total)
    }
}

#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Persist one new row and patch the in-memory aggregate.
    ///
    /// Returns the just-added delta, not the cumulative totals.
    async fn add_item(&self, item: NewLineItem) -> Result<ItemTotals, CartServiceError>;

    /// Recompute the per-item aggregate from all persisted rows.
    ///
    /// This read is independent of the in-memory aggregate.
    async fn get_cart(&self) -> Result<FxHashMap<String, ItemTotals>, CartServiceError>;

    /// Decrement quantity on rows individually holding enough of it.
    async fn remove_item(&self, removal: ItemRemoval) -> Result<(), CartServiceError>;

    /// Discount every in-memory entry; the store is untouched.
    ///
    /// Returns the sum of the discounted aggregate prices.
    async fn apply_discount(&self, percentage: Decimal) -> Result<Decimal, CartServiceError>;

    /// `SUM(price * quantity)` over all persisted rows, `None` when the
    /// cart is empty. Ignores any discount applied to the aggregate.
    async fn total_price(&self) -> Result<Option<Decimal>, CartServiceError>;
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;
    use testresult::TestResult;

    use super::*;

    fn lazy_service() -> Result<PgCartService, sqlx::Error> {
        // connect_lazy never opens a connection; only the memory-side
        // paths of the service can run against it.
        let pool = PgPoolOptions::new().connect_lazy("postgres://localhost/trolley")?;

        Ok(PgCartService::new(Db::new(pool)))
    }

    #[tokio::test]
    async fn discount_on_a_fresh_service_totals_zero() -> TestResult {
        let service = lazy_service()?;

        let total = service.apply_discount(Decimal::from(50)).await?;

        assert_eq!(total, Decimal::ZERO);

        Ok(())
    }
}
