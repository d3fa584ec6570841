//! DNS resolution with memoization of successful lookups.
//!
//! The checker only depends on the [`DnsLookup`] trait and does not know
//! which resolver backs it; production uses the system resolver, tests
//! inject fakes.

use std::collections::HashSet;
use std::net::ToSocketAddrs;
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Trait implemented by DNS collaborators.
///
/// Only success/failure is reported; the resolved addresses themselves are
/// of no interest to the pipeline.
pub trait DnsLookup: Send + Sync {
    fn lookup(&self, host: &str) -> Result<()>;
}

/// System resolver, backed by getaddrinfo via `ToSocketAddrs`.
pub struct SystemDns;

impl DnsLookup for SystemDns {
    fn lookup(&self, host: &str) -> Result<()> {
        let mut addrs = (host, 0u16)
            .to_socket_addrs()
            .with_context(|| format!("name resolution failed for {host}"))?;
        if addrs.next().is_none() {
            anyhow::bail!("resolver returned no addresses for {host}");
        }
        Ok(())
    }
}

/// Set of hosts that have resolved successfully, consulted before every
/// lookup so known-good hosts skip the resolver entirely.
///
/// Failed lookups are never recorded: a genuinely unresolvable host pays the
/// lookup cost on every request. Entries are kept for the process lifetime
/// with no eviction.
pub struct ResolutionCache {
    dns: Box<dyn DnsLookup>,
    resolved: Mutex<HashSet<String>>,
}

impl ResolutionCache {
    pub fn new(dns: Box<dyn DnsLookup>) -> Self {
        Self {
            dns,
            resolved: Mutex::new(HashSet::new()),
        }
    }

    /// True if `host` has already resolved successfully.
    pub fn contains(&self, host: &str) -> bool {
        self.resolved.lock().unwrap().contains(host)
    }

    /// Number of memoized hosts.
    pub fn len(&self) -> usize {
        self.resolved.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves `host`, consulting the memoized successes first.
    ///
    /// Resolution failure is a normal boolean outcome, not an error; it is
    /// logged and the host is left out of the cache.
    pub fn resolve(&self, host: &str) -> bool {
        if self.contains(host) {
            tracing::trace!("resolution cache hit for {host}");
            return true;
        }
        match self.dns.lookup(host) {
            Ok(()) => {
                self.resolved.lock().unwrap().insert(host.to_string());
                true
            }
            Err(err) => {
                tracing::error!("DNS resolution of {host} failed: {err:#}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Fake resolver that fails for hosts in `failing` and counts lookups.
    struct ScriptedDns {
        failing: HashSet<String>,
        lookups: Arc<AtomicUsize>,
    }

    impl DnsLookup for ScriptedDns {
        fn lookup(&self, host: &str) -> Result<()> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.failing.contains(host) {
                anyhow::bail!("name resolution failed for {host}");
            }
            Ok(())
        }
    }

    fn scripted(failing: &[&str]) -> (ResolutionCache, Arc<AtomicUsize>) {
        let lookups = Arc::new(AtomicUsize::new(0));
        let dns = ScriptedDns {
            failing: failing.iter().map(|h| h.to_string()).collect(),
            lookups: Arc::clone(&lookups),
        };
        (ResolutionCache::new(Box::new(dns)), lookups)
    }

    #[test]
    fn second_resolve_hits_the_memoized_path() {
        let (cache, lookups) = scripted(&[]);
        assert!(cache.resolve("www.cisco.com"));
        assert!(cache.resolve("www.cisco.com"));
        assert_eq!(lookups.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_resolution_is_not_cached() {
        let (cache, lookups) = scripted(&["woksfornoneallnonsense.com"]);
        assert!(!cache.resolve("woksfornoneallnonsense.com"));
        assert!(!cache.contains("woksfornoneallnonsense.com"));
        // Every retry pays the lookup cost again.
        assert!(!cache.resolve("woksfornoneallnonsense.com"));
        assert_eq!(lookups.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn hosts_are_cached_independently() {
        let (cache, lookups) = scripted(&["bad.example"]);
        assert!(cache.resolve("good.example"));
        assert!(!cache.resolve("bad.example"));
        assert!(cache.resolve("good.example"));
        assert_eq!(lookups.load(Ordering::SeqCst), 2);
        assert!(cache.contains("good.example"));
        assert!(!cache.contains("bad.example"));
    }

    #[test]
    fn system_dns_resolves_loopback_literal() {
        // IP literals go through getaddrinfo without touching real DNS.
        assert!(SystemDns.lookup("127.0.0.1").is_ok());
    }
}
