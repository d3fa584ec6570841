//! Per-host/per-path record of observed reachability outcomes.
//!
//! The ledger is advisory state: the checker writes every outcome here but
//! never consults it to short-circuit a future probe. It is readable from
//! outside only as a snapshot, for diagnostics.

use std::collections::HashMap;
use std::sync::Mutex;

/// Last observed outcomes for a single host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    /// Host-level flag: the DNS outcome, or false after a connection-level
    /// probe failure. `None` until either has been observed.
    pub status: Option<bool>,
    /// Reachability of each probed path.
    pub paths: HashMap<String, bool>,
}

/// Host-keyed reachability ledger. Grows for the process lifetime; there is
/// no eviction.
#[derive(Debug, Default)]
pub struct StatusLedger {
    hosts: Mutex<HashMap<String, HostRecord>>,
}

impl StatusLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the host's record if absent. A host entry always exists
    /// before any path entry is written under it.
    pub(crate) fn ensure_host(&self, host: &str) {
        self.hosts
            .lock()
            .unwrap()
            .entry(host.to_string())
            .or_default();
    }

    /// Sets the host-level flag, creating the record if needed. Used for the
    /// DNS outcome and for connection-level probe failures; the path map is
    /// left intact either way.
    pub(crate) fn set_host_status(&self, host: &str, up: bool) {
        self.hosts
            .lock()
            .unwrap()
            .entry(host.to_string())
            .or_default()
            .status = Some(up);
    }

    /// Records the probe outcome for one path under `host`.
    pub(crate) fn record_path(&self, host: &str, path: &str, reachable: bool) {
        self.hosts
            .lock()
            .unwrap()
            .entry(host.to_string())
            .or_default()
            .paths
            .insert(path.to_string(), reachable);
    }

    /// Diagnostics copy of the current ledger contents.
    pub fn snapshot(&self) -> HashMap<String, HostRecord> {
        self.hosts.lock().unwrap().clone()
    }
}
