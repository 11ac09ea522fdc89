pub mod config;

pub use config::{Config, ServerConfig, ServiceConfig, ValidationResult};

use anyhow::Result;

/// Initialize telemetry for the service
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("ceptemp core initialized");
    Ok(())
}
