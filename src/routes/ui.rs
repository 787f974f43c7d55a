use crate::handlers::ui::{editor_script, index};
use axum::{routing::get, Router};

/// GET / and GET /static/editor.js.
pub fn ui_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/editor.js", get(editor_script))
}
