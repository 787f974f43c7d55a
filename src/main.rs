//! Server binary: loads configuration, connects the pool, mounts the editor page and API.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use two_tables::{app, ensure_database_exists, AppConfig, AppState, PgCrudStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("two_tables=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.ensure_database {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    let state = AppState::new(PgCrudStore::new(pool));
    let router = app(state, config.body_limit_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
