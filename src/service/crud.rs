//! CRUD execution against PostgreSQL. Each operation is a single statement.

use crate::error::AppError;
use crate::models::{Customer, CustomerPatch, NewCustomer, NewOrder, Order};
use crate::sql::{
    DELETE_CUSTOMER, INSERT_CUSTOMER, INSERT_ORDER, LIST_CUSTOMERS, LIST_ORDERS, SELECT_CUSTOMER, UPDATE_CUSTOMER,
};
use crate::service::validation::with_total_scale;
use crate::store;
use async_trait::async_trait;
use sqlx::PgPool;

/// Storage used by the HTTP handlers.
#[async_trait]
pub trait CrudStore: Send + Sync {
    /// Idempotent schema creation; runs before every request's statement.
    async fn ensure_tables(&self) -> Result<(), AppError>;

    /// All customers, newest id first.
    async fn list_customers(&self) -> Result<Vec<Customer>, AppError>;

    async fn create_customer(&self, new: &NewCustomer) -> Result<Customer, AppError>;

    async fn get_customer(&self, id: i32) -> Result<Option<Customer>, AppError>;

    /// `None` when no customer has this id.
    async fn update_customer(&self, id: i32, patch: &CustomerPatch) -> Result<Option<Customer>, AppError>;

    /// `true` when a row was removed.
    async fn delete_customer(&self, id: i32) -> Result<bool, AppError>;

    /// All orders, newest id first.
    async fn list_orders(&self) -> Result<Vec<Order>, AppError>;

    async fn create_order(&self, new: &NewOrder) -> Result<Order, AppError>;
}

#[derive(Clone)]
pub struct PgCrudStore {
    pool: PgPool,
}

impl PgCrudStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CrudStore for PgCrudStore {
    async fn ensure_tables(&self) -> Result<(), AppError> {
        store::ensure_tables(&self.pool).await
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        tracing::debug!(sql = %LIST_CUSTOMERS, "query");
        let rows = sqlx::query_as::<_, Customer>(LIST_CUSTOMERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_customer(&self, new: &NewCustomer) -> Result<Customer, AppError> {
        tracing::debug!(sql = %INSERT_CUSTOMER, name = %new.name, email = ?new.email, "query");
        let row = sqlx::query_as::<_, Customer>(INSERT_CUSTOMER)
            .bind(&new.name)
            .bind(new.email.as_deref())
            .fetch_one(&self.pool)
            .await?;
        tracing::info!(id = row.id, "created customer");
        Ok(row)
    }

    async fn get_customer(&self, id: i32) -> Result<Option<Customer>, AppError> {
        tracing::debug!(sql = %SELECT_CUSTOMER, id, "query");
        let row = sqlx::query_as::<_, Customer>(SELECT_CUSTOMER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_customer(&self, id: i32, patch: &CustomerPatch) -> Result<Option<Customer>, AppError> {
        let (write_email, email) = patch.email.as_bind();
        tracing::debug!(sql = %UPDATE_CUSTOMER, id, name = ?patch.name, email = ?patch.email, "query");
        let row = sqlx::query_as::<_, Customer>(UPDATE_CUSTOMER)
            .bind(id)
            .bind(patch.name.as_deref())
            .bind(write_email)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        if row.is_some() {
            tracing::info!(id, "updated customer");
        }
        Ok(row)
    }

    async fn delete_customer(&self, id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE_CUSTOMER, id, "query");
        let result = sqlx::query(DELETE_CUSTOMER).bind(id).execute(&self.pool).await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "deleted customer");
        }
        Ok(deleted)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        tracing::debug!(sql = %LIST_ORDERS, "query");
        let rows = sqlx::query_as::<_, Order>(LIST_ORDERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(scaled).collect())
    }

    async fn create_order(&self, new: &NewOrder) -> Result<Order, AppError> {
        tracing::debug!(sql = %INSERT_ORDER, customer_name = %new.customer_name, total = %new.total, "query");
        let row = sqlx::query_as::<_, Order>(INSERT_ORDER)
            .bind(&new.customer_name)
            .bind(new.total)
            .fetch_one(&self.pool)
            .await?;
        tracing::info!(id = row.id, "created order");
        Ok(scaled(row))
    }
}

fn scaled(order: Order) -> Order {
    Order {
        total: with_total_scale(order.total),
        ..order
    }
}
