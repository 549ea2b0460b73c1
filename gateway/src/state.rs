//! Shared per-server state.

use std::net::IpAddr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ipnet::IpNet;

use crate::api::auth::AuthGate;
use crate::api::router::MethodTable;
use crate::config::GatewayConfig;
use crate::services::node::NodeServices;
use crate::services::rate_limiter::RateLimiter;
use crate::services::source::SourcePolicy;
use crate::services::tx_seen::TxSeenCache;

/// Everything a request handler needs, owned by the server instance.
///
/// The caches are process-local and best-effort; nothing here survives
/// a restart.
pub(crate) struct GatewayState {
    pub(crate) node: NodeServices,
    pub(crate) auth: AuthGate,
    pub(crate) limiter: RateLimiter,
    pub(crate) tx_seen: TxSeenCache,
    pub(crate) sources: SourcePolicy,
    pub(crate) allowed_cidrs: Vec<IpNet>,
    pub(crate) caller_ttl_limit: Option<Duration>,
    pub(crate) methods: MethodTable,
}

impl GatewayState {
    pub(crate) fn new(
        config: &GatewayConfig,
        token: Option<secrecy::SecretString>,
        node: NodeServices,
    ) -> Self {
        Self {
            node,
            auth: AuthGate::new(token),
            limiter: RateLimiter::new(config.rate_limit_window, config.rate_limit_max),
            tx_seen: TxSeenCache::new(config.tx_seen_ttl),
            sources: SourcePolicy::new(
                config.trust_proxy_headers,
                config.trusted_proxies.iter().cloned(),
            ),
            allowed_cidrs: config.allowed_client_cidrs.clone(),
            caller_ttl_limit: config.caller_ttl_limit,
            methods: MethodTable::build(),
        }
    }

    /// Applies the client CIDR allow-list. An empty list allows
    /// everyone; with a list configured, sources that are not IP
    /// addresses are denied.
    pub(crate) fn client_allowed(&self, source: &str) -> bool {
        if self.allowed_cidrs.is_empty() {
            return true;
        }
        match source.parse::<IpAddr>() {
            Ok(ip) => self.allowed_cidrs.iter().any(|net| net.contains(&ip)),
            Err(_) => false,
        }
    }
}

/// Current unix time in seconds.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
