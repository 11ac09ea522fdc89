//! ViaCEP address lookup client.

use serde::Deserialize;
use tracing::instrument;

use crate::error::LookupError;

pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    localidade: String,
}

impl ViaCepClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolve a CEP to its locality name.
    ///
    /// The CEP is expected to be already validated (exactly 8 digits).
    /// Issues a single request; errors are never retried here.
    #[instrument(skip(self), level = "info")]
    pub async fn locality(&self, cep: &str) -> Result<String, LookupError> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        Ok(body.localidade)
    }
}
