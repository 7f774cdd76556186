pub mod callback;

use axum::{Router, routing::get};

use crate::adapters::http::app_state::AppState;

pub fn router(callback_path: &str) -> Router<AppState> {
    Router::new()
        .merge(callback::router(callback_path))
        .route("/health", get(|| async { "ok" }))
}
