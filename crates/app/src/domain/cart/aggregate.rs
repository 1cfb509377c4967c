//! In-memory cart aggregate.
//!
//! A per-item summed view of line items, patched incrementally on add and
//! remove. The cart listing rebuilds the same fold from the store instead
//! of reading this structure, so the two views can diverge: the store-side
//! decrement is governed by row-level conditions while the patch here only
//! tracks one decrement per call, and discounts applied here never reach
//! the store.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::domain::cart::models::{ItemTotals, LineItem};

#[derive(Debug, Default)]
pub struct CartAggregate {
    entries: FxHashMap<String, ItemTotals>,
}

impl CartAggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold persisted rows into a fresh aggregate, summing quantity and
    /// price per item name.
    #[must_use]
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = LineItem>,
    {
        let mut aggregate = Self::new();

        for row in rows {
            aggregate.record_addition(&row.item, row.quantity, row.price);
        }

        aggregate
    }

    /// Add a quantity and price delta for an item.
    ///
    /// Both fields sum across repeated additions of the same item, so
    /// `price` holds an accumulated total rather than a unit price.
    pub fn record_addition(&mut self, item: &str, quantity: i64, price: Decimal) {
        let entry = self.entries.entry(item.to_owned()).or_default();

        entry.quantity += quantity;
        entry.price += price;
    }

    /// Mirror a store-side removal.
    ///
    /// An entry that does not hold more than the removed quantity is
    /// dropped outright; otherwise its quantity is decremented and its
    /// price left untouched.
    pub fn record_removal(&mut self, item: &str, quantity: i64) {
        let exhausted = match self.entries.get_mut(item) {
            Some(entry) if entry.quantity > quantity => {
                entry.quantity -= quantity;

                false
            }
            Some(_) => true,
            None => false,
        };

        if exhausted {
            self.entries.remove(item);
        }
    }

    /// Scale every entry's price by `1 - percentage / 100`.
    ///
    /// Returns the sum of the discounted prices.
    pub fn apply_discount(&mut self, percentage: Decimal) -> Decimal {
        let factor = Decimal::ONE - percentage / Decimal::ONE_HUNDRED;

        let mut total = Decimal::ZERO;

        for entry in self.entries.values_mut() {
            entry.price *= factor;
            total += entry.price;
        }

        total
    }

    #[must_use]
    pub fn get(&self, item: &str) -> Option<&ItemTotals> {
        self.entries.get(item)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the aggregate, yielding the per-item totals.
    #[must_use]
    pub fn into_entries(self) -> FxHashMap<String, ItemTotals> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn row(item: &str, price: i64, quantity: i64) -> LineItem {
        LineItem {
            item: item.to_owned(),
            price: dec(price),
            quantity,
        }
    }

    #[test]
    fn addition_creates_an_entry_holding_the_delta() {
        let mut aggregate = CartAggregate::new();

        aggregate.record_addition("apple", 3, dec(10));

        let entry = aggregate.get("apple").expect("entry should exist");

        assert_eq!(entry.quantity, 3);
        assert_eq!(entry.price, dec(10));
    }

    #[test]
    fn repeated_addition_sums_quantity_and_price() {
        let mut aggregate = CartAggregate::new();

        aggregate.record_addition("apple", 2, dec(3));
        aggregate.record_addition("apple", 5, dec(4));

        let entry = aggregate.get("apple").expect("entry should exist");

        // price is the accumulated sum of row prices, not a unit price
        assert_eq!(entry.quantity, 7);
        assert_eq!(entry.price, dec(7));
    }

    #[test]
    fn from_rows_sums_rows_sharing_an_item_name() {
        let aggregate = CartAggregate::from_rows(vec![
            row("apple", 10, 3),
            row("pear", 5, 1),
            row("apple", 10, 2),
        ]);

        let apples = aggregate.get("apple").expect("apple entry should exist");
        let pears = aggregate.get("pear").expect("pear entry should exist");

        assert_eq!(apples.quantity, 5);
        assert_eq!(apples.price, dec(20));
        assert_eq!(pears.quantity, 1);
        assert_eq!(pears.price, dec(5));
    }

    #[test]
    fn removing_the_full_quantity_drops_the_entry() {
        let mut aggregate = CartAggregate::new();

        aggregate.record_addition("apple", 3, dec(10));
        aggregate.record_removal("apple", 3);

        assert!(aggregate.get("apple").is_none());
    }

    #[test]
    fn removing_more_than_held_drops_the_entry() {
        let mut aggregate = CartAggregate::new();

        aggregate.record_addition("apple", 3, dec(10));
        aggregate.record_removal("apple", 7);

        assert!(aggregate.get("apple").is_none());
    }

    #[test]
    fn partial_removal_decrements_quantity_and_keeps_price() {
        let mut aggregate = CartAggregate::new();

        aggregate.record_addition("apple", 5, dec(10));
        aggregate.record_removal("apple", 2);

        let entry = aggregate.get("apple").expect("entry should exist");

        assert_eq!(entry.quantity, 3);
        assert_eq!(entry.price, dec(10));
    }

    #[test]
    fn removal_of_an_unknown_item_is_ignored() {
        let mut aggregate = CartAggregate::new();

        aggregate.record_addition("apple", 3, dec(10));
        aggregate.record_removal("pear", 1);

        assert_eq!(
            aggregate.get("apple").map(|entry| entry.quantity),
            Some(3),
            "unrelated entries must be untouched"
        );
    }

    #[test]
    fn fifty_percent_discount_halves_prices() {
        let mut aggregate = CartAggregate::new();

        aggregate.record_addition("widget", 1, dec(20));

        let total = aggregate.apply_discount(dec(50));

        let entry = aggregate.get("widget").expect("entry should exist");

        assert_eq!(entry.price, dec(10));
        assert_eq!(total, dec(10));
    }

    #[test]
    fn discount_total_sums_every_discounted_entry() {
        let mut aggregate = CartAggregate::new();

        aggregate.record_addition("apple", 1, dec(30));
        aggregate.record_addition("pear", 1, dec(10));

        let total = aggregate.apply_discount(dec(10));

        assert_eq!(total, dec(36));
    }

    #[test]
    fn discount_on_an_empty_aggregate_totals_zero() {
        let mut aggregate = CartAggregate::new();

        let total = aggregate.apply_discount(dec(50));

        assert!(aggregate.is_empty());
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn discount_leaves_quantities_untouched() {
        let mut aggregate = CartAggregate::new();

        aggregate.record_addition("apple", 4, dec(8));
        aggregate.apply_discount(dec(25));

        let entry = aggregate.get("apple").expect("entry should exist");

        assert_eq!(entry.quantity, 4);
        assert_eq!(entry.price, dec(6));
    }
}
