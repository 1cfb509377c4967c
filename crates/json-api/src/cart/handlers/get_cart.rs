//! Get Cart Handler

use std::{collections::BTreeMap, sync::Arc};

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use trolley_app::domain::cart::models::ItemTotals;

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// Aggregated totals for one item name.
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub(crate) struct CartEntry {
    /// Summed quantity across all rows for the item
    pub quantity: i64,
    /// Summed price across all rows for the item
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

impl From<ItemTotals> for CartEntry {
    fn from(totals: ItemTotals) -> Self {
        Self {
            quantity: totals.quantity,
            price: totals.price,
        }
    }
}

/// Get Cart Handler
///
/// Recomputes the per-item aggregate by scanning the persisted rows. This
/// is the only read that is strongly consistent with the store.
#[endpoint(
    tags("cart"),
    summary = "List aggregated cart contents",
    responses(
        (status_code = StatusCode::OK, description = "Aggregated cart contents"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<BTreeMap<String, CartEntry>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let entries = state.app.cart.get_cart().await.map_err(into_status_error)?;

    Ok(Json(
        entries
            .into_iter()
            .map(|(item, totals)| (item, totals.into()))
            .collect(),
    ))
}
