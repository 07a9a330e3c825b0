pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::handle_score_job))
        .route("/health", get(health::health_handler))
        .with_state(state)
}
