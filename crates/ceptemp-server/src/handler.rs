//! Request orchestration: validate the CEP, resolve the locality, then the
//! temperature, and serialize the converted reading.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::resolve::{LocalityResolver, TemperatureResolver};
use crate::temperature::TemperatureResponse;

/// Shared state handed to the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub locality: Arc<dyn LocalityResolver>,
    pub temperature: Arc<dyn TemperatureResolver>,
}

impl AppState {
    pub fn new(
        locality: Arc<dyn LocalityResolver>,
        temperature: Arc<dyn TemperatureResolver>,
    ) -> Self {
        Self {
            locality,
            temperature,
        }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/temperature/{cep}", get(get_temperature))
        .with_state(state)
}

/// A CEP is exactly 8 ASCII digits.
fn is_valid_cep(cep: &str) -> bool {
    cep.len() == 8 && cep.bytes().all(|b| b.is_ascii_digit())
}

async fn get_temperature(State(state): State<AppState>, Path(cep): Path<String>) -> Response {
    if !is_valid_cep(&cep) {
        tracing::debug!(%cep, "rejected invalid CEP");
        return StatusCode::BAD_REQUEST.into_response();
    }

    let locality = match state.locality.locality(&cep).await {
        Ok(locality) => locality,
        Err(e) => {
            tracing::error!(%cep, error = %e, "address lookup failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let celsius = match state.temperature.celsius(&locality).await {
        Ok(celsius) => celsius,
        Err(e) => {
            tracing::error!(%locality, error = %e, "temperature lookup failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    Json(TemperatureResponse::from_celsius(celsius)).into_response()
}
