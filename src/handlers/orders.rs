//! Order handlers. Orders can only be listed and created.

use crate::error::AppError;
use crate::response::{created, ok};
use crate::service::validation::body_to_map;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.store.ensure_tables().await?;
    let rows = state.store.list_orders().await?;
    Ok(ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    state.store.ensure_tables().await?;
    let body = body_to_map(body)?;
    let new = RequestValidator::new_order(&body)?;
    let row = state.store.create_order(&new).await?;
    Ok(created(row))
}
