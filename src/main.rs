//! seclist - symbol list snapshot builder
//!
//! Downloads the stock, ETF, forex and crypto symbol lists from Financial
//! Modeling Prep, normalizes them into one record shape and writes the
//! combined list to `./generated/securities.json`.
//!
//! # Usage
//! ```sh
//! NODE_FMP_KEY=<key> cargo run
//! ```
//!
//! # Environment Variables
//! - `NODE_FMP_KEY` - Financial Modeling Prep API key (required, may come from `.env`)
//! - `RUST_LOG` - Extra log directives on top of the `info` default

use seclist::application::pipeline;
use seclist::config::Config;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("seclist {} starting...", env!("CARGO_PKG_VERSION"));

    // Fail before any request is made
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Configuration loaded: {:?}", config);

    match pipeline::run(&config).await {
        Ok(count) => {
            info!("Done. {} symbols saved to {:?}", count, config.output_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Symbol list run failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
