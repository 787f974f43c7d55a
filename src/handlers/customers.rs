//! Customer handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::response::{created, deleted, ok};
use crate::service::validation::{body_to_map, parse_id};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.store.ensure_tables().await?;
    let rows = state.store.list_customers().await?;
    Ok(ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    state.store.ensure_tables().await?;
    let body = body_to_map(body)?;
    let new = RequestValidator::new_customer(&body)?;
    let row = state.store.create_customer(&new).await?;
    Ok(created(row))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.store.ensure_tables().await?;
    let id = parse_id(&id_str)?;
    let row = state
        .store
        .get_customer(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;
    Ok(ok(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    state.store.ensure_tables().await?;
    let id = parse_id(&id_str)?;
    let body = body_to_map(body)?;
    let patch = RequestValidator::customer_patch(&body)?;
    let row = state
        .store
        .update_customer(id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;
    Ok(ok(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.store.ensure_tables().await?;
    let id = parse_id(&id_str)?;
    if !state.store.delete_customer(id).await? {
        return Err(AppError::NotFound(format!("customer {}", id)));
    }
    Ok(deleted())
}
