//! Apply Discount Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trolley_app::domain::cart::models::validate_discount;

use crate::{
    cart::{errors::into_status_error, remove::MessageResponse},
    extensions::*,
    state::State,
};

/// Apply Discount Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyDiscountRequest {
    /// Discount percentage applied to every aggregated item
    #[salvo(schema(value_type = f64))]
    pub discount: Decimal,
}

/// Apply Discount Handler
///
/// Discounts the in-memory aggregate only. Persisted rows keep their
/// original prices, so the store-derived listing and total are unchanged.
#[endpoint(
    tags("cart"),
    summary = "Apply a percentage discount to the cart",
    responses(
        (status_code = StatusCode::OK, description = "Discount applied"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ApplyDiscountRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let discount = json.into_inner().discount;

    validate_discount(discount).map_err(into_status_error)?;

    let total = state
        .app
        .cart
        .apply_discount(discount)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse {
        message: format!(
            "{discount}% discount applied successfully. Total after applying discount is {total}"
        ),
    }))
}
