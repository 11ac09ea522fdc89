//! Outbound lookup clients for the ceptemp service.
//!
//! Resolves a postal code (CEP) to a locality name via a ViaCEP-compatible
//! API, and a locality name to its current temperature via a
//! wttr.in-compatible API.

pub mod error;
pub mod viacep;
pub mod wttr;

pub use error::LookupError;
pub use viacep::ViaCepClient;
pub use wttr::WttrClient;
