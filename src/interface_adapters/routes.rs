use crate::interface_adapters::handlers::{
    health, minute_validation, visitor_sign_in, visitor_sign_out,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/minute-validation", post(minute_validation))
        .route("/visitor-sign-in", post(visitor_sign_in))
        .route("/visitor-sign-out", post(visitor_sign_out))
        .with_state(state)
}
