//! Errors

use salvo::http::StatusError;
use tracing::error;

use trolley_app::domain::cart::CartServiceError;

pub(crate) fn into_status_error(error: CartServiceError) -> StatusError {
    match error {
        CartServiceError::InvalidPayload => StatusError::bad_request().brief("Invalid payload"),
        CartServiceError::InsufficientQuantity { item } => StatusError::bad_request()
            .brief(format!("{item} not found in cart or not enough quantity")),
        CartServiceError::Sql(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error().brief("Database error")
        }
    }
}
