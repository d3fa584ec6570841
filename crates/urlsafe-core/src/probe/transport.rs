//! libcurl-backed HEAD transport.

use std::time::Duration;

use super::{ProbeError, ProbeTransport, PROBE_TIMEOUT};

/// HEAD prober on libcurl's easy interface.
///
/// Redirects are not followed: a 301 must surface to the caller, which
/// classifies it as reachable. Runs on the calling thread; call from
/// `spawn_blocking` if used from async code.
#[derive(Debug, Clone)]
pub struct CurlProbe {
    timeout: Duration,
}

impl CurlProbe {
    pub fn new() -> Self {
        Self {
            timeout: PROBE_TIMEOUT,
        }
    }

    /// Override the probe timeout (integration tests shorten it).
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for CurlProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTransport for CurlProbe {
    fn head(&self, url: &str) -> Result<u32, ProbeError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(|e| classify(&e))?;
        easy.nobody(true).map_err(|e| classify(&e))?;
        easy.timeout(self.timeout).map_err(|e| classify(&e))?;
        easy.perform().map_err(|e| classify(&e))?;
        easy.response_code().map_err(|e| classify(&e))
    }
}

/// Classify a curl error into the probe error taxonomy.
fn classify(e: &curl::Error) -> ProbeError {
    if e.is_operation_timedout() {
        return ProbeError::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ProbeError::Connect(e.to_string());
    }
    ProbeError::Transport(e.to_string())
}
