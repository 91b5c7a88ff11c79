use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pokedex_api::infrastructure::database::connection::Database;
use pokedex_api::infrastructure::http::{self, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database = Arc::new(Database::new()?);
    database.run_migrations()?;

    let state = Arc::new(AppState::new(database));
    let app = http::router(state);

    let addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Pokedex API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
