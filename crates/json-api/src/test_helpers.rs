//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use trolley_app::{context::AppContext, domain::cart::MockCartService};

use crate::state::State;

pub(crate) fn state_with_cart(cart: MockCartService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        cart: Arc::new(cart),
    }))
}

pub(crate) fn cart_service(cart: MockCartService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_cart(cart)))
            .push(route),
    )
}
