//! Error types shared by the lookup clients.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport-level failure reaching the downstream service.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Downstream service replied with a non-success HTTP status.
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// Downstream response body was not valid JSON or not in the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weather service returned an empty current-condition list.
    #[error("No current condition found")]
    NoCondition,
}

impl LookupError {
    /// The HTTP status received from the downstream service, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}
