//! Remove From Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trolley_app::domain::cart::models::ItemRemoval;

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// Remove From Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemoveItemRequest {
    /// Item name
    pub item: String,
    /// Quantity to remove
    pub quantity: i64,
}

impl From<RemoveItemRequest> for ItemRemoval {
    fn from(request: RemoveItemRequest) -> Self {
        ItemRemoval {
            item: request.item,
            quantity: request.quantity,
        }
    }
}

/// Confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Remove From Cart Handler
///
/// Decrements quantity on rows that individually hold enough of it; the
/// requested quantity is never split across rows.
#[endpoint(
    tags("cart"),
    summary = "Remove quantity of an item from the cart",
    responses(
        (status_code = StatusCode::OK, description = "Quantity removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or insufficient quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RemoveItemRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let removal: ItemRemoval = json.into_inner().into();

    removal.validate().map_err(into_status_error)?;

    let message = format!("{} {} deleted successfully.", removal.quantity, removal.item);

    state
        .app
        .cart
        .remove_item(removal)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse { message }))
}
