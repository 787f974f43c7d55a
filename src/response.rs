//! Response helpers. Rows and lists are returned bare, without an envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Deleted {
    pub ok: bool,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn deleted() -> (StatusCode, Json<Deleted>) {
    (StatusCode::OK, Json(Deleted { ok: true }))
}
