//! Canonical client-source resolution.
//!
//! The resolved source string is the single key every per-source
//! decision (rate limiting, allow-listing) is made on. Forwarded
//! headers are only honoured when the immediate peer is trusted to
//! relay them.

use std::collections::HashSet;
use std::net::IpAddr;

/// Max `X-Forwarded-For` entries inspected per request.
pub(crate) const MAX_FORWARDED_HOPS: usize = 5;
/// Capacity of the trusted-proxy set.
pub(crate) const MAX_TRUSTED_PROXIES: usize = 32;

/// Canonicalises a host: trims whitespace, strips a port, re-emits IPs
/// in their canonical textual form and lowercases hostnames.
///
/// Returns an empty string for empty input.
pub(crate) fn canonical_host(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let host = strip_port(trimmed);
    match host.parse::<IpAddr>() {
        Ok(ip) => ip.to_string(),
        Err(_) => host.to_ascii_lowercase(),
    }
}

fn strip_port(value: &str) -> &str {
    // bracketed IPv6, e.g. [::1]:8080
    if let Some(rest) = value.strip_prefix('[')
        && let Some(end) = rest.find(']')
    {
        return &rest[..end];
    }
    // exactly one colon separates host and port; more means a bare IPv6
    if value.matches(':').count() == 1
        && let Some((host, _port)) = value.rsplit_once(':')
    {
        return host;
    }
    value
}

/// Decides whose `X-Forwarded-For` headers are honoured and resolves
/// the canonical client source per request.
pub(crate) struct SourcePolicy {
    trust_all: bool,
    trusted: HashSet<String>,
}

impl SourcePolicy {
    /// Builds the policy. Proxy hosts are canonicalised; at most
    /// [`MAX_TRUSTED_PROXIES`] are kept.
    pub(crate) fn new(trust_all: bool, proxies: impl IntoIterator<Item = String>) -> Self {
        let mut trusted = HashSet::new();
        for proxy in proxies {
            if trusted.len() >= MAX_TRUSTED_PROXIES {
                tracing::warn!("trusted-proxy set is full, ignoring {proxy}");
                continue;
            }
            let canonical = canonical_host(&proxy);
            if !canonical.is_empty() {
                trusted.insert(canonical);
            }
        }
        Self { trust_all, trusted }
    }

    /// Resolves the canonical client source for a request.
    ///
    /// Starts from the TCP peer. When the peer may relay, walks the
    /// forwarded chain left to right, inspecting at most
    /// [`MAX_FORWARDED_HOPS`] entries; the first usable entry wins and
    /// an unusable chain falls back to the peer.
    pub(crate) fn resolve(&self, remote: &str, forwarded: Option<&str>) -> String {
        let peer = canonical_host(remote);
        let peer = if peer.is_empty() {
            "unknown".to_owned()
        } else {
            peer
        };
        if let Some(chain) = forwarded
            && (self.trust_all || self.trusted.contains(&peer))
        {
            for entry in chain.split(',').take(MAX_FORWARDED_HOPS) {
                let canonical = canonical_host(entry);
                if !canonical.is_empty() {
                    return canonical;
                }
            }
        }
        peer
    }
}
