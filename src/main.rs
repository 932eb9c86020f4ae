//! HTTP server for the education payroll engine.
//!
//! Environment:
//! - `EDUPAY_CONFIG`: rule configuration directory (default `./config/edupay`)
//! - `EDUPAY_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use edupay_engine::api::{AppState, create_router};
use edupay_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/edupay";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Builds the log filter from `RUST_LOG` directives, defaulting to `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config_dir =
        std::env::var("EDUPAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("EDUPAY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load configuration from {}", config_dir))?;
    info!(
        config_dir = %config_dir,
        rules = %config.metadata().code,
        version = %config.metadata().version,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
