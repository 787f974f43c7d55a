//! Router assembly.

mod api;
mod health;
mod ui;

pub use api::api_routes;
pub use health::health_routes;
pub use ui::ui_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: editor page, REST API and health routes, with request tracing and a body size limit.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(ui_routes())
        .merge(api_routes(state.clone()))
        .merge(health_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit_bytes)),
        )
}
