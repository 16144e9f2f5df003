//! Host-service error type.

use thiserror::Error;

/// Failure reported by a host adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host environment does not expose the requested facility.
    #[error("{0} is unavailable on this host")]
    Unavailable(&'static str),
    /// The backing preference storage rejected an operation.
    #[error("preference storage failed: {0}")]
    Storage(String),
    /// The host refused to open an external location.
    #[error("failed to open {url}: {reason}")]
    Navigation {
        /// Requested URL.
        url: String,
        /// Host-reported reason.
        reason: String,
    },
}
