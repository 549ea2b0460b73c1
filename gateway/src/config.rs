//! Configuration types and CLI/environment parsing for the gateway.
//!
//! Hosting applications may have a more detailed config and can use the
//! exposed [`GatewayConfig`] and flatten it with `#[clap(flatten)]`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eyre::bail;
use ipnet::IpNet;
use secrecy::SecretString;

/// Hard cap on the request body, bytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The configuration for the NHB gateway.
///
/// It can be configured via environment variables or command line
/// arguments using `clap`.
#[derive(Parser, Debug)]
pub struct GatewayConfig {
    /// Honour `X-Forwarded-For` from any peer.
    ///
    /// Without this flag the header is only honoured when the immediate
    /// peer is listed in `--trusted-proxies`.
    #[clap(long, env = "NHB_GATEWAY_TRUST_PROXY_HEADERS")]
    pub trust_proxy_headers: bool,

    /// Hosts that may relay client addresses via `X-Forwarded-For`.
    ///
    /// At most 32 entries are kept; extra entries are dropped with a
    /// warning.
    #[clap(long, env = "NHB_GATEWAY_TRUSTED_PROXIES", value_delimiter = ',')]
    pub trusted_proxies: Vec<String>,

    /// CIDR blocks clients must resolve into. Empty allows everyone.
    ///
    /// Applies to the HTTP ingress and the finality WebSocket alike.
    #[clap(long, env = "NHB_GATEWAY_ALLOWED_CLIENT_CIDRS", value_delimiter = ',')]
    pub allowed_client_cidrs: Vec<IpNet>,

    /// Max time to read the request head.
    #[clap(
        long,
        env = "NHB_GATEWAY_READ_HEADER_TIMEOUT",
        default_value = "5s",
        value_parser = humantime::parse_duration
    )]
    pub read_header_timeout: Duration,

    /// Max time to read a request body.
    #[clap(
        long,
        env = "NHB_GATEWAY_READ_TIMEOUT",
        default_value = "15s",
        value_parser = humantime::parse_duration
    )]
    pub read_timeout: Duration,

    /// Max time to handle a request and write the response.
    #[clap(
        long,
        env = "NHB_GATEWAY_WRITE_TIMEOUT",
        default_value = "15s",
        value_parser = humantime::parse_duration
    )]
    pub write_timeout: Duration,

    /// Max time an idle keep-alive connection is kept open.
    #[clap(
        long,
        env = "NHB_GATEWAY_IDLE_TIMEOUT",
        default_value = "60s",
        value_parser = humantime::parse_duration
    )]
    pub idle_timeout: Duration,

    /// PEM certificate chain. TLS is enabled when both this and
    /// `--tls-key-file` are set; one without the other is a fatal
    /// configuration error.
    #[clap(long, env = "NHB_GATEWAY_TLS_CERT_FILE")]
    pub tls_cert_file: Option<PathBuf>,

    /// PEM private key, see `--tls-cert-file`.
    #[clap(long, env = "NHB_GATEWAY_TLS_KEY_FILE")]
    pub tls_key_file: Option<PathBuf>,

    /// Length of the per-source rate-limit window.
    #[clap(
        long,
        env = "NHB_GATEWAY_RATE_LIMIT_WINDOW",
        default_value = "1m",
        value_parser = humantime::parse_duration
    )]
    pub rate_limit_window: Duration,

    /// Max submit-class requests per source and window.
    #[clap(long, env = "NHB_GATEWAY_RATE_LIMIT_MAX", default_value = "100")]
    pub rate_limit_max: u32,

    /// How long submitted transaction hashes are remembered for
    /// duplicate detection.
    #[clap(
        long,
        env = "NHB_GATEWAY_TX_SEEN_TTL",
        default_value = "15m",
        value_parser = humantime::parse_duration
    )]
    pub tx_seen_ttl: Duration,

    /// Upper bound on caller-supplied transaction TTLs. Unset means no
    /// limit.
    #[clap(
        long,
        env = "NHB_GATEWAY_CALLER_TTL_LIMIT",
        value_parser = humantime::parse_duration
    )]
    pub caller_ttl_limit: Option<Duration>,

    /// Bearer token protecting auth-required methods. When unset, every
    /// auth-required method is disabled.
    #[clap(long, env = "NHB_GATEWAY_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<SecretString>,
}

impl GatewayConfig {
    /// Returns the TLS material paths, or `None` for plain TCP.
    ///
    /// # Errors
    ///
    /// Fails when only one of the two paths is configured.
    pub fn tls_paths(&self) -> eyre::Result<Option<(PathBuf, PathBuf)>> {
        match (&self.tls_cert_file, &self.tls_key_file) {
            (Some(cert), Some(key)) => Ok(Some((cert.clone(), key.clone()))),
            (None, None) => Ok(None),
            _ => bail!("tls-cert-file and tls-key-file must be configured together"),
        }
    }
}
