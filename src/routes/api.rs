//! REST routes for customers and orders. Orders expose no update or delete.

use crate::handlers::{customers, orders};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", get(customers::list).post(customers::create))
        .route(
            "/api/customers/:id",
            get(customers::read).put(customers::update).delete(customers::delete),
        )
        .route("/api/orders", get(orders::list).post(orders::create))
        .with_state(state)
}
