//! Cart repository.

use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::cart::models::{LineItem, NewLineItem};

const INSERT_LINE_ITEM_SQL: &str = include_str!("sql/insert_line_item.sql");
const SELECT_LINE_ITEMS_SQL: &str = include_str!("sql/select_line_items.sql");
const DECREMENT_LINE_ITEMS_SQL: &str = include_str!("sql/decrement_line_items.sql");
const SUM_TOTAL_PRICE_SQL: &str = include_str!("sql/sum_total_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartRepository;

impl PgCartRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert one new row; repeat items are not merged.
    pub(crate) async fn insert_line_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: &NewLineItem,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_LINE_ITEM_SQL)
            .bind(&item.item)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn select_line_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<LineItem>, sqlx::Error> {
        query_as::<Postgres, LineItem>(SELECT_LINE_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Decrement quantity on rows matching the item name that individually
    /// keep a non-negative quantity afterwards. Rows failing the predicate
    /// are left untouched; the requested quantity is never split across
    /// rows. Returns the number of rows affected.
    pub(crate) async fn decrement_line_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: &str,
        quantity: i64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DECREMENT_LINE_ITEMS_SQL)
            .bind(quantity)
            .bind(item)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// `SUM(price * quantity)` over all rows, `None` when the table is
    /// empty.
    pub(crate) async fn sum_total_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<Decimal>, sqlx::Error> {
        query_scalar::<Postgres, Option<Decimal>>(SUM_TOTAL_PRICE_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for LineItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            item: row.try_get("item")?,
            price: row.try_get("price")?,
            quantity: row.try_get("quantity")?,
        })
    }
}
