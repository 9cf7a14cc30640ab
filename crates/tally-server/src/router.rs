//! Axum router wiring.
//!
//! The counter handler is installed as the fallback: like the reference
//! deployment's root handler, it catches every path and every method.

use axum::Router;

use crate::{app_state::AppState, counter};

pub fn build_router(state: AppState) -> Router {
    Router::new().fallback(counter::serve).with_state(state)
}
