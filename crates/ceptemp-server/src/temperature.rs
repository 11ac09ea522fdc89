//! Temperature response type and scale conversion.

use serde::{Deserialize, Serialize};

/// Offset between Celsius and Kelvin used by the public API.
///
/// Kept at the integer 273 for output compatibility with existing consumers.
const KELVIN_OFFSET: f64 = 273.0;

/// The response body for a successful temperature lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureResponse {
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl TemperatureResponse {
    /// Derive all three scales from a Celsius reading.
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            temp_c: celsius,
            temp_f: celsius * 1.8 + 32.0,
            temp_k: celsius + KELVIN_OFFSET,
        }
    }
}
