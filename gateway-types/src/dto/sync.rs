//! Snapshot sync payloads (`sync_*`).

use serde::{Deserialize, Serialize};

/// Result of `sync_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    /// Whether the node is catching up.
    pub syncing: bool,
    /// Local height.
    pub current_height: u64,
    /// Best known network height.
    pub target_height: u64,
    /// Height of the latest local snapshot, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_height: Option<u64>,
}

/// Result of `sync_exportSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotExport {
    /// Snapshot height.
    pub height: u64,
    /// Number of chunks written.
    pub chunks: u32,
    /// `0x`-prefixed checksum over all chunks.
    pub checksum: String,
}

/// Parameters of `sync_importSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotImportParams {
    /// Where to fetch the snapshot from.
    pub source: String,
    /// Expected `0x`-prefixed checksum.
    pub checksum: String,
}
