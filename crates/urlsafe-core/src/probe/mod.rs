//! HTTP HEAD reachability probing.
//!
//! Header-only requests with a fixed timeout; no body is ever downloaded.
//! The checker depends on the [`ProbeTransport`] trait so tests can script
//! responses without a network.

mod transport;

pub use transport::CurlProbe;

use std::time::Duration;

/// Fixed wall-clock budget for a single probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection-level probe failures. A response with an unwelcome status code
/// is not an error; it comes back as a normal status classification.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("probe timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Trait implemented by HTTP probe collaborators.
pub trait ProbeTransport: Send + Sync {
    /// Issues a header-only request against `url` and returns the numeric
    /// status code, without following redirects.
    fn head(&self, url: &str) -> Result<u32, ProbeError>;
}
