//! Media Track API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p track-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use track_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().inspect_err(|e| {
        eprintln!("Failed to load configuration: {e}");
    })?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::from_settings(&config.app)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    track_api::run(config).await?;

    Ok(())
}
