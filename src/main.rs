//! SessionMint: signed, time-limited session cookies for user identity.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod server;
pub mod session;
pub mod state;
pub mod telemetry;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // A missing or weak secret stops the process here.
    let config = config::Config::from_env()?;
    let state = state::build_state(&config);

    console::print_banner();
    tracing::info!(environment = %config.environment, "starting sessionmint on {}", config.bind_addr);
    console::print_startup(&config.bind_addr, config.environment);

    server::run(state, &config.bind_addr).await?;
    Ok(())
}
