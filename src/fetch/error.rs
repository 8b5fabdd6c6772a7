use thiserror::Error;

/// Errors produced while fetching an externally-hosted dashboard view.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The host answered, but not with a success status.
    #[error("upstream returned HTTP {code}")]
    Status { code: u16 },
}
