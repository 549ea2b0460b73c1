//! Peer management payloads (`net_*`).

use serde::{Deserialize, Serialize};

/// Result of `net_info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetInfo {
    /// This node's peer identifier.
    pub node_id: String,
    /// Multiaddresses the node listens on.
    pub listen_addrs: Vec<String>,
    /// Number of connected peers.
    pub peer_count: u32,
    /// Local chain height.
    pub chain_height: u64,
}

/// One row of `net_peers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerInfo {
    /// Peer identifier.
    pub node_id: String,
    /// Remote address.
    pub address: String,
    /// `inbound` or `outbound`.
    pub direction: String,
    /// Smoothed round-trip latency, milliseconds.
    pub latency_ms: u32,
    /// Ban expiry, unix seconds, when banned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned_until: Option<u64>,
}

/// Parameters of `net_ban`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanParams {
    /// Peer identifier.
    pub node_id: String,
    /// Ban duration in seconds; the node default applies when absent.
    #[serde(default)]
    pub seconds: Option<u64>,
}
