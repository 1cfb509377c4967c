//! App Router

use salvo::Router;

use crate::cart;

pub(crate) fn app_router() -> Router {
    Router::with_path("v1")
        .push(Router::with_path("insert").post(cart::insert::handler))
        .push(Router::with_path("get_cart").get(cart::get_cart::handler))
        .push(Router::with_path("remove").delete(cart::remove::handler))
        .push(Router::with_path("apply_discount").post(cart::apply_discount::handler))
        .push(Router::with_path("total").get(cart::total::handler))
}
