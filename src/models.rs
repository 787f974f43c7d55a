//! Row types for the two tables and the write payloads derived from request bodies.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `total` serializes as a decimal string such as `"12.50"`.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
}

/// What an update does to the stored email.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EmailPatch {
    #[default]
    Keep,
    Clear,
    Set(String),
}

impl EmailPatch {
    /// Bind pair for `CASE WHEN $3 THEN $4 ELSE email END`.
    pub fn as_bind(&self) -> (bool, Option<&str>) {
        match self {
            EmailPatch::Keep => (false, None),
            EmailPatch::Clear => (true, None),
            EmailPatch::Set(email) => (true, Some(email.as_str())),
        }
    }
}

/// Partial update: `None` / `Keep` leave the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: EmailPatch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewOrder {
    pub customer_name: String,
    pub total: Decimal,
}
