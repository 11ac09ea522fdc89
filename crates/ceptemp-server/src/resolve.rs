//! Resolver trait seams between the HTTP handler and the lookup clients.
//!
//! The handler depends only on these traits, so tests can substitute fakes
//! without real network access.

use async_trait::async_trait;
use ceptemp_lookup::{LookupError, ViaCepClient, WttrClient};

/// Maps a postal code to a locality name.
#[async_trait]
pub trait LocalityResolver: Send + Sync {
    async fn locality(&self, cep: &str) -> Result<String, LookupError>;
}

/// Maps a locality name to its current Celsius temperature.
#[async_trait]
pub trait TemperatureResolver: Send + Sync {
    async fn celsius(&self, locality: &str) -> Result<f64, LookupError>;
}

#[async_trait]
impl LocalityResolver for ViaCepClient {
    async fn locality(&self, cep: &str) -> Result<String, LookupError> {
        ViaCepClient::locality(self, cep).await
    }
}

#[async_trait]
impl TemperatureResolver for WttrClient {
    async fn celsius(&self, locality: &str) -> Result<f64, LookupError> {
        WttrClient::celsius(self, locality).await
    }
}
