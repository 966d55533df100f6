#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::process::ExitCode;

use config::{AppConfig, ConfigError};
use services::cards::{CardStore, CardStoreError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("card data: {0}")]
    Cards(#[from] CardStoreError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "staysafe failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    let cards = CardStore::load(&config.cards_path)?;
    tracing::info!(path = %config.cards_path.display(), count = cards.len(), "card data loaded");
    if cards.is_empty() {
        tracing::warn!("card data file is empty; the results list will be blank");
    }

    let state = state::AppState::new(cards);
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "staysafe listening");
    axum::serve(listener, app).await?;
    Ok(())
}
