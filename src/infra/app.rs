use axum::{Router, http};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::adapters::{self, http::app_state::AppState};

pub fn create_app(app_state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
        let request_id = Uuid::new_v4();
        // Only the path: callback query strings carry hashes
        tracing::info_span!(
            "http-request",
            method = %request.method(),
            path = %request.uri().path(),
            version = ?request.version(),
            request_id = %request_id
        )
    });

    adapters::http::routes::router(&app_state.config.callback_path)
        .with_state(app_state)
        .layer(ServiceBuilder::new().layer(trace))
}
