//! Insert Line Item Handler

use std::{collections::BTreeMap, sync::Arc};

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trolley_app::domain::cart::models::NewLineItem;

use crate::{
    cart::{errors::into_status_error, get_cart::CartEntry},
    extensions::*,
    state::State,
};

/// Insert Line Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InsertItemRequest {
    /// Item name
    pub item: String,
    /// Price for this line
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
    /// Quantity for this line
    pub quantity: i64,
}

impl From<InsertItemRequest> for NewLineItem {
    fn from(request: InsertItemRequest) -> Self {
        NewLineItem {
            item: request.item,
            price: request.price,
            quantity: request.quantity,
        }
    }
}

/// Insert Line Item Handler
///
/// Persists one new row per call, even for repeat items, and responds with
/// the just-added delta keyed by item name.
#[endpoint(
    tags("cart"),
    summary = "Add an item to the cart",
    responses(
        (status_code = StatusCode::OK, description = "Line item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<InsertItemRequest>,
    depot: &mut Depot,
) -> Result<Json<BTreeMap<String, CartEntry>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item: NewLineItem = json.into_inner().into();

    item.validate().map_err(into_status_error)?;

    let name = item.item.clone();

    let delta = state
        .app
        .cart
        .add_item(item)
        .await
        .map_err(into_status_error)?;

    Ok(Json(BTreeMap::from([(name, delta.into())])))
}
