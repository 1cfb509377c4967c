//! Get Total Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// Total Price Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TotalResponse {
    /// `SUM(price * quantity)` over the persisted rows, null when the cart
    /// is empty
    #[salvo(schema(value_type = Option<f64>))]
    pub total_price: Option<Decimal>,
}

/// Get Total Handler
///
/// Computes the total directly over the persisted rows, ignoring the
/// in-memory aggregate and any discount applied to it.
#[endpoint(
    tags("cart"),
    summary = "Compute the total cart price",
    responses(
        (status_code = StatusCode::OK, description = "Total price"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TotalResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let total_price = state
        .app
        .cart
        .total_price()
        .await
        .map_err(into_status_error)?;

    Ok(Json(TotalResponse { total_price }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trolley_app::domain::cart::{CartServiceError, MockCartService};

    use crate::test_helpers::cart_service;

    use super::*;

    fn make_service(cart: MockCartService) -> Service {
        cart_service(cart, Router::with_path("v1/total").get(handler))
    }

    #[tokio::test]
    async fn test_total_returns_store_sum() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_total_price()
            .once()
            .return_once(|| Ok(Some(Decimal::from(30))));

        cart.expect_add_item().never();
        cart.expect_get_cart().never();
        cart.expect_remove_item().never();
        cart.expect_apply_discount().never();

        let body: TotalResponse = TestClient::get("http://example.com/v1/total")
            .send(&make_service(cart))
            .await
            .take_json()
            .await?;

        assert_eq!(body.total_price, Some(Decimal::from(30)));

        Ok(())
    }

    #[tokio::test]
    async fn test_total_empty_cart_returns_null() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_total_price().once().return_once(|| Ok(None));

        cart.expect_add_item().never();
        cart.expect_get_cart().never();
        cart.expect_remove_item().never();
        cart.expect_apply_discount().never();

        let body: TotalResponse = TestClient::get("http://example.com/v1/total")
            .send(&make_service(cart))
            .await
            .take_json()
            .await?;

        assert_eq!(body.total_price, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_total_store_error_returns_500() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_total_price()
            .once()
            .return_once(|| Err(CartServiceError::Sql(sqlx::Error::RowNotFound)));

        cart.expect_add_item().never();
        cart.expect_get_cart().never();
        cart.expect_remove_item().never();
        cart.expect_apply_discount().never();

        let res = TestClient::get("http://example.com/v1/total")
            .send(&make_service(cart))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
