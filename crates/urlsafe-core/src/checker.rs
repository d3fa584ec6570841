//! Pipeline orchestration: validate, then resolve, then probe.

use std::collections::HashMap;

use crate::ledger::{HostRecord, StatusLedger};
use crate::probe::{CurlProbe, ProbeError, ProbeTransport};
use crate::resolve::{DnsLookup, ResolutionCache, SystemDns};
use crate::validate::{self, ParseError};

/// Terminal outcome of a single check. Each variant marks the pipeline stage
/// the invocation ended at; there are no retries, so the first failure wins.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The raw string failed structural validation.
    ParseFailed(ParseError),
    /// The host did not resolve via DNS.
    Unresolved { host: String },
    /// The probe could not complete (connection failure or timeout).
    ProbeFailed(ProbeError),
    /// The probe completed with a status other than 200/301.
    Unreachable { status: u32 },
    /// The probe completed with 200 or 301.
    Reachable { status: u32 },
}

impl CheckOutcome {
    /// The caller-facing boolean: true only for a reachable classification.
    pub fn is_safe(&self) -> bool {
        matches!(self, CheckOutcome::Reachable { .. })
    }
}

/// URL reachability checker.
///
/// Owns the resolution cache and the status ledger outright; callers only
/// get at them through [`check`](Self::check) and the diagnostics snapshot.
/// A single instance is safe to share across threads.
pub struct UrlChecker {
    dns: ResolutionCache,
    probe: Box<dyn ProbeTransport>,
    ledger: StatusLedger,
}

impl UrlChecker {
    /// Checker over the production collaborators: the system resolver and a
    /// curl HEAD transport with the fixed 30-second timeout.
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(SystemDns), Box::new(CurlProbe::new()))
    }

    /// Checker over explicit collaborators. Tests inject fakes here.
    pub fn with_collaborators(dns: Box<dyn DnsLookup>, probe: Box<dyn ProbeTransport>) -> Self {
        Self {
            dns: ResolutionCache::new(dns),
            probe,
            ledger: StatusLedger::new(),
        }
    }

    /// Runs the full pipeline for one raw URL string.
    ///
    /// Stages run strictly in order and the first failure is terminal:
    /// malformed input never reaches the resolver, and an unresolvable host
    /// never gets probed.
    pub fn check(&self, raw: &str) -> CheckOutcome {
        let parsed = match validate::validate(raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::error!("rejecting URL: {err}");
                return CheckOutcome::ParseFailed(err);
            }
        };

        tracing::debug!("resolution cache holds {} hosts", self.dns.len());
        if !self.dns.contains(&parsed.host) {
            // The host record exists before anything is written under it.
            self.ledger.ensure_host(&parsed.host);
            let resolved = self.dns.resolve(&parsed.host);
            self.ledger.set_host_status(&parsed.host, resolved);
            if !resolved {
                tracing::error!("{} is network unreachable", parsed.host);
                return CheckOutcome::Unresolved { host: parsed.host };
            }
        }

        match self.probe.head(&parsed.url) {
            Ok(status) => {
                tracing::info!("HEAD {} -> HTTP {status}", parsed.url);
                let reachable = matches!(status, 200 | 301);
                self.ledger.record_path(&parsed.host, &parsed.path, reachable);
                if reachable {
                    CheckOutcome::Reachable { status }
                } else {
                    CheckOutcome::Unreachable { status }
                }
            }
            Err(err) => {
                tracing::error!("HEAD {} failed: {err}", parsed.url);
                self.ledger.set_host_status(&parsed.host, false);
                CheckOutcome::ProbeFailed(err)
            }
        }
    }

    /// Diagnostics copy of the status ledger.
    pub fn ledger_snapshot(&self) -> HashMap<String, HostRecord> {
        self.ledger.snapshot()
    }
}

impl Default for UrlChecker {
    fn default() -> Self {
        Self::new()
    }
}
