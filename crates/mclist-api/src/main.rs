//! mclist API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p mclist-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use mclist_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting mclist API server"
    );

    if let Err(e) = mclist_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
