//! wttr.in weather client.
//!
//! Uses the `?format=j1` JSON API, which reports the current temperature as
//! a string in the first `current_condition` record.

use serde::Deserialize;
use tracing::instrument;

use crate::error::LookupError;

pub struct WttrClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct WttrResponse {
    current_condition: Vec<CurrentCondition>,
}

#[derive(Debug, Deserialize)]
struct CurrentCondition {
    #[serde(rename = "temp_C")]
    temp_c: String,
}

impl WttrClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the current Celsius temperature for a locality.
    ///
    /// Issues a single request; errors are never retried here.
    #[instrument(skip(self), level = "info")]
    pub async fn celsius(&self, locality: &str) -> Result<f64, LookupError> {
        let url = format!(
            "{}/{}?format=j1",
            self.base_url,
            urlencoding::encode(locality)
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: WttrResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        let condition = body
            .current_condition
            .first()
            .ok_or(LookupError::NoCondition)?;

        condition
            .temp_c
            .parse::<f64>()
            .map_err(|e| LookupError::Parse(format!("temp_C is not a number: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_celsius_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Diadema"))
            .and(query_param("format", "j1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"current_condition":[{"temp_C":"25"}]}"#),
            )
            .mount(&mock_server)
            .await;

        let client = WttrClient::new(reqwest::Client::new(), mock_server.uri());
        let celsius = client.celsius("Diadema").await.unwrap();

        assert_eq!(celsius, 25.0);
    }

    #[tokio::test]
    async fn test_celsius_encodes_locality() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/S%C3%A3o%20Paulo"))
            .and(query_param("format", "j1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"current_condition":[{"temp_C":"-3.5"}]}"#),
            )
            .mount(&mock_server)
            .await;

        let client = WttrClient::new(reqwest::Client::new(), mock_server.uri());
        let celsius = client.celsius("São Paulo").await.unwrap();

        assert_eq!(celsius, -3.5);
    }

    #[tokio::test]
    async fn test_celsius_non_ok_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Diadema"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = WttrClient::new(reqwest::Client::new(), mock_server.uri());
        let result = client.celsius("Diadema").await;

        assert!(matches!(result, Err(LookupError::Status(503))));
    }

    #[tokio::test]
    async fn test_celsius_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Diadema"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{]"))
            .mount(&mock_server)
            .await;

        let client = WttrClient::new(reqwest::Client::new(), mock_server.uri());
        let result = client.celsius("Diadema").await;

        assert!(matches!(result, Err(LookupError::Parse(_))));
    }

    #[tokio::test]
    async fn test_celsius_no_condition_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Diadema"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"current_condition":[]}"#),
            )
            .mount(&mock_server)
            .await;

        let client = WttrClient::new(reqwest::Client::new(), mock_server.uri());
        let result = client.celsius("Diadema").await;

        // Distinct sentinel, not a generic parse failure.
        assert!(matches!(result, Err(LookupError::NoCondition)));
    }

    #[tokio::test]
    async fn test_celsius_non_numeric_temp() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Diadema"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"current_condition":[{"temp_C":"warm"}]}"#),
            )
            .mount(&mock_server)
            .await;

        let client = WttrClient::new(reqwest::Client::new(), mock_server.uri());
        let result = client.celsius("Diadema").await;

        assert!(matches!(result, Err(LookupError::Parse(_))));
    }

    #[tokio::test]
    async fn test_celsius_network_error() {
        let client = WttrClient::new(reqwest::Client::new(), "http://127.0.0.1:1");
        let result = client.celsius("Diadema").await;

        assert!(matches!(result, Err(LookupError::Network(_))));
    }
}
