mod bot;
mod config;
mod error;
mod model;
mod service;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A missing or malformed environment variable aborts here, before the
    // gateway connection is attempted.
    let config = Config::from_env()?;
    let state = AppState::new(config);

    tracing::info!("Starting event bot");

    bot::start::start_bot(state).await
}
