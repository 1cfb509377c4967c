//! Cart models.

use rust_decimal::Decimal;

use crate::domain::cart::errors::CartServiceError;

/// One persisted `(item, price, quantity)` row.
///
/// Item names are not unique across rows; every add inserts a fresh row
/// and removal decrements quantities without ever deleting.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub item: String,
    pub price: Decimal,
    pub quantity: i64,
}

/// A line item to be inserted into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    pub item: String,
    pub price: Decimal,
    pub quantity: i64,
}

impl NewLineItem {
    /// Reject empty or zero fields.
    ///
    /// Zero values are treated exactly like absent ones, so a literal
    /// zero price or quantity cannot be inserted.
    ///
    /// # Errors
    ///
    /// Returns [`CartServiceError::InvalidPayload`] when any field is
    /// empty or zero.
    pub fn validate(&self) -> Result<(), CartServiceError> {
        if self.item.is_empty() || self.price.is_zero() || self.quantity == 0 {
            return Err(CartServiceError::InvalidPayload);
        }

        Ok(())
    }
}

/// A request to decrement quantity for an item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRemoval {
    pub item: String,
    pub quantity: i64,
}

impl ItemRemoval {
    /// Reject empty or zero fields, matching [`NewLineItem::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`CartServiceError::InvalidPayload`] when a field is empty
    /// or zero.
    pub fn validate(&self) -> Result<(), CartServiceError> {
        if self.item.is_empty() || self.quantity == 0 {
            return Err(CartServiceError::InvalidPayload);
        }

        Ok(())
    }
}

/// Summed view of all line items sharing an item name.
///
/// `price` accumulates row prices across repeated adds; it is not a unit
/// price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemTotals {
    pub quantity: i64,
    pub price: Decimal,
}

/// Validate a discount percentage.
///
/// Zero is rejected the same way as an absent field, so a literal 0%
/// discount request cannot be expressed.
///
/// # Errors
///
/// Returns [`CartServiceError::InvalidPayload`] when the percentage is
/// zero.
pub fn validate_discount(percentage: Decimal) -> Result<(), CartServiceError> {
    if percentage.is_zero() {
        return Err(CartServiceError::InvalidPayload);
    }

    Ok(())
}
