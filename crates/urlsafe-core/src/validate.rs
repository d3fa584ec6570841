//! Structural URL validation.
//!
//! Pure string work: no network or disk I/O happens here. The checker calls
//! this first so malformed input is rejected before any lookup is attempted.

use url::Url;

/// Recommended maximum URL length; longer input is rejected outright.
pub const MAX_URL_LEN: usize = 2048;

/// Maximum hostname length per RFC 3986.
pub const MAX_HOST_LEN: usize = 255;

/// Schemes accepted by the checker. Anything else is rejected as uncommon.
pub const ALLOWED_SCHEMES: [&str; 5] = ["http", "https", "ftp", "news", "telnet"];

/// A validated URL, broken into the parts the pipeline needs.
///
/// Created fresh per validation call and never stored; the ledger keys off
/// the host and path copied out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Reconstructed, normalized form of the input.
    pub url: String,
    /// Lowercase hostname.
    pub host: String,
    /// Path component; may be empty for non-special schemes.
    pub path: String,
}

/// Rejection reasons for raw URL input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("URL is not specified")]
    Empty,
    #[error("URL exceeds the recommended max length of {MAX_URL_LEN} chars (got {0})")]
    TooLong(usize),
    #[error("URL scheme is not specified")]
    MissingScheme,
    #[error("{0} is not a common URL scheme")]
    DisallowedScheme(String),
    #[error("URL domain is not specified")]
    MissingHost,
    #[error("domain name exceeds {MAX_HOST_LEN} chars (got {0})")]
    HostTooLong(usize),
    #[error("URL is not parseable: {0}")]
    Syntax(#[from] url::ParseError),
}

/// Validates `raw` and extracts the normalized URL, lowercase host, and path.
///
/// Checks run in a fixed order so the first violation wins: emptiness,
/// length, structure, scheme allow-list, host presence, host length.
pub fn validate(raw: &str) -> Result<ParsedUrl, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::Empty);
    }
    if raw.len() > MAX_URL_LEN {
        return Err(ParseError::TooLong(raw.len()));
    }

    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        // A relative URL is one with no scheme at all.
        Err(url::ParseError::RelativeUrlWithoutBase) => return Err(ParseError::MissingScheme),
        Err(url::ParseError::EmptyHost) => return Err(ParseError::MissingHost),
        Err(err) => return Err(ParseError::Syntax(err)),
    };

    let scheme = parsed.scheme();
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return Err(ParseError::DisallowedScheme(scheme.to_string()));
    }

    // Special schemes come back lowercased already; non-special ones (news,
    // telnet) keep the host verbatim, so lowercase here for both.
    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host.to_ascii_lowercase(),
        _ => return Err(ParseError::MissingHost),
    };
    if host.len() > MAX_HOST_LEN {
        return Err(ParseError::HostTooLong(host.len()));
    }

    Ok(ParsedUrl {
        url: parsed.to_string(),
        host,
        path: parsed.path().to_string(),
    })
}
