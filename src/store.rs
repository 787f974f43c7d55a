//! Schema creation and database bootstrap.

use crate::error::{AppError, ConfigError};
use crate::sql::{CREATE_CUSTOMERS, CREATE_ORDERS, SCHEMA_LOCK};
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Advisory lock key held while the schema is created ("2tables" in ASCII).
const SCHEMA_LOCK_KEY: i64 = 0x3274_6162_6c65_73;

/// Create `customers` and `orders` if missing; called at the top of every API request.
///
/// `CREATE TABLE IF NOT EXISTS` is not atomic against a concurrent create of the same
/// table (the loser fails on `pg_type_typname_nsp_index`), so both statements run in one
/// transaction holding a transaction-scoped advisory lock.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    tracing::debug!("ensure tables");
    let mut tx = pool.begin().await?;
    sqlx::query(SCHEMA_LOCK).bind(SCHEMA_LOCK_KEY).execute(&mut *tx).await?;
    sqlx::query(CREATE_CUSTOMERS).execute(&mut *tx).await?;
    sqlx::query(CREATE_ORDERS).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database if it does not exist.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = admin_options(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// The error text is reported instead of the URL so credentials stay out of logs.
fn admin_options(admin_url: &str) -> Result<PgConnectOptions, ConfigError> {
    PgConnectOptions::from_str(admin_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: e.to_string(),
    })
}

/// Split a connection URL into (maintenance URL, database name). The query string is carried over.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let (without_query, query) = match url.split_once('?') {
        Some((u, q)) => (u, Some(q)),
        None => (url, None),
    };
    let authority_start = without_query.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = match without_query.get(authority_start..).and_then(|rest| rest.find('/')) {
        Some(i) => authority_start + i + 1,
        None => return Ok((url.to_string(), String::new())),
    };
    let db_name = without_query.get(path_start..).unwrap_or("").trim();
    let base = without_query.get(..path_start).unwrap_or(without_query);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
