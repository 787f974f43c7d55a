//! Two editable tables: customers and orders over a REST API backed by PostgreSQL,
//! with a browser page that edits both.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use models::{Customer, CustomerPatch, EmailPatch, NewCustomer, NewOrder, Order};
pub use routes::{api_routes, app, health_routes, ui_routes};
pub use service::{CrudStore, PgCrudStore, RequestValidator};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
