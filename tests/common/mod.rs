//! In-memory `CrudStore` and request helpers shared by the router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use two_tables::{app, AppError, AppState, CrudStore, Customer, CustomerPatch, EmailPatch, NewCustomer, NewOrder, Order};

#[derive(Default)]
struct Tables {
    customers: Vec<Customer>,
    orders: Vec<Order>,
    next_customer_id: i32,
    next_order_id: i32,
}

/// Mirrors the table semantics: serial ids, unique email, partial updates.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    pub ensure_calls: Arc<AtomicUsize>,
    pub offline: bool,
}

impl MemoryStore {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn customer_count(&self) -> usize {
        self.tables.lock().unwrap().customers.len()
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

/// Same outcome as `CASE WHEN $3 THEN $4 ELSE email END`.
fn patched_email(patch: &EmailPatch, current: Option<String>) -> Option<String> {
    match patch {
        EmailPatch::Keep => current,
        EmailPatch::Clear => None,
        EmailPatch::Set(email) => Some(email.clone()),
    }
}

fn duplicate_email() -> AppError {
    AppError::Db(sqlx::Error::Protocol(
        "duplicate key value violates unique constraint \"customers_email_key\"".into(),
    ))
}

#[async_trait]
impl CrudStore for MemoryStore {
    async fn ensure_tables(&self) -> Result<(), AppError> {
        self.check_online()?;
        self.ensure_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        let t = self.tables.lock().unwrap();
        let mut rows = t.customers.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn create_customer(&self, new: &NewCustomer) -> Result<Customer, AppError> {
        let mut t = self.tables.lock().unwrap();
        if new.email.is_some() && t.customers.iter().any(|c| c.email == new.email) {
            return Err(duplicate_email());
        }
        t.next_customer_id += 1;
        let row = Customer {
            id: t.next_customer_id,
            name: new.name.clone(),
            email: new.email.clone(),
            created_at: Utc::now(),
        };
        t.customers.push(row.clone());
        Ok(row)
    }

    async fn get_customer(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn update_customer(&self, id: i32, patch: &CustomerPatch) -> Result<Option<Customer>, AppError> {
        let mut t = self.tables.lock().unwrap();
        let Some(current) = t.customers.iter().find(|c| c.id == id).cloned() else {
            return Ok(None);
        };
        let email = patched_email(&patch.email, current.email.clone());
        if email.is_some() && t.customers.iter().any(|c| c.id != id && c.email == email) {
            return Err(duplicate_email());
        }
        let row = t.customers.iter_mut().find(|c| c.id == id).map(|c| {
            if let Some(name) = &patch.name {
                c.name = name.clone();
            }
            c.email = email;
            c.clone()
        });
        Ok(row)
    }

    async fn delete_customer(&self, id: i32) -> Result<bool, AppError> {
        let mut t = self.tables.lock().unwrap();
        let before = t.customers.len();
        t.customers.retain(|c| c.id != id);
        Ok(t.customers.len() < before)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        let t = self.tables.lock().unwrap();
        let mut rows = t.orders.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn create_order(&self, new: &NewOrder) -> Result<Order, AppError> {
        let mut t = self.tables.lock().unwrap();
        t.next_order_id += 1;
        let row = Order {
            id: t.next_order_id,
            customer_name: new.customer_name.clone(),
            total: new.total,
            created_at: Utc::now(),
        };
        t.orders.push(row.clone());
        Ok(row)
    }
}

pub fn router(store: MemoryStore) -> Router {
    app(AppState::new(store), 64 * 1024)
}

pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}
