//! Cart endpoint handlers

pub(crate) mod apply_discount;
pub(crate) mod get_cart;
pub(crate) mod insert;
pub(crate) mod remove;
pub(crate) mod total;
