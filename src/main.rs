use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use ceptemp_lookup::{ViaCepClient, WttrClient};
use ceptemp_server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize telemetry
    ceptemp_core::init()?;

    let (config, _validation) = ceptemp_core::Config::load_validated()?;

    // One shared client; both downstream calls use the configured timeout.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.services.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let state = AppState::new(
        Arc::new(ViaCepClient::new(
            client.clone(),
            config.services.viacep_url.clone(),
        )),
        Arc::new(WttrClient::new(client, config.services.wttr_url.clone())),
    );

    let app = ceptemp_server::router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;

    tracing::info!("listening on http://{}", config.server.bind_addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
