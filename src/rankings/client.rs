use anyhow::{Context, Result};
use std::time::Duration;

/// Install the ring crypto provider for rustls (required for rustls 0.23+).
/// Later calls are no-ops.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Create the HTTP client used for both ranking pages
pub fn create_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("disc-league/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")
}
