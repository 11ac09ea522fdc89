//! HTTP surface for the ceptemp service.
//!
//! Exposes `GET /temperature/{cep}`, orchestrating the address and weather
//! lookups behind resolver trait seams so the handler can be tested with
//! fakes.

pub mod handler;
pub mod resolve;
pub mod temperature;

pub use handler::{router, AppState};
pub use resolve::{LocalityResolver, TemperatureResolver};
pub use temperature::TemperatureResponse;
