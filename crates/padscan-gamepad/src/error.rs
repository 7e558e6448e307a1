use thiserror::Error;

use crate::types::DeviceIndex;

/// Error type for device backend operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to initialize the backend (SDL2 or subsystems).
    #[error("Backend init failed: {0}")]
    BackendInit(String),
    /// The backend could not report its device table.
    #[error("Device query failed: {0}")]
    Query(String),
    /// A device could not be opened.
    #[error("Could not open device #{index}: {reason}")]
    Open { index: DeviceIndex, reason: String },
}

impl Error {
    /// Returns the backend's own error text, without the surrounding context.
    pub fn reason(&self) -> &str {
        match self {
            Error::BackendInit(reason) | Error::Query(reason) => reason,
            Error::Open { reason, .. } => reason,
        }
    }
}

/// Convenient result alias for backend operations.
pub type Result<T> = std::result::Result<T, Error>;
