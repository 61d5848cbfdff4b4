//! Error taxonomy for the fetch boundary.

use thiserror::Error;

/// Failure to retrieve the source document.
///
/// Absence of usable table data is not an error; it flows through the
/// empty-result path instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connect, TLS, or timeout.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
