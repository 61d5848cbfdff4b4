//! Bounded-timeout HTTP client for published documents.
//!
//! Thin wrapper over `reqwest` configured for one-shot document retrieval:
//! rustls TLS, transparent Brotli/Zstd/Gzip/Deflate decompression, a fixed
//! connect timeout, and a caller-supplied total timeout. Non-2xx responses
//! are errors.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::error::FetchError;

/// Seconds allowed for TCP/TLS connection establishment.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum redirects to follow (published document URLs redirect at least once).
const MAX_REDIRECTS: usize = 10;

/// HTTP client with bounded timeouts.
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    /// Create a client with the given total request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            // TLS 1.3 via rustls
            .use_rustls_tls()
            // Compression (auto-negotiated via Accept-Encoding)
            .brotli(true)
            .zstd(true)
            .gzip(true)
            .deflate(true)
            // Timeouts
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            // Redirects
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a URL and return the response body as text.
    ///
    /// Fails with [`FetchError::Status`] on a non-2xx response and
    /// [`FetchError::Network`] on transport failure or timeout.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("sending request");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        info!(
            status = %status,
            version = ?response.version(),
            content_encoding = ?response.headers().get("content-encoding"),
            "response received"
        );

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Get the underlying reqwest client.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}
