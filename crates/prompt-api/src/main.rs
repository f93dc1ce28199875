//! Prompt Gallery API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p prompt-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use prompt_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.env,
        address = %config.server.address(),
        "Starting Prompt Gallery API"
    );

    if let Err(e) = prompt_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
