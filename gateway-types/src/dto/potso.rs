//! Proof-of-time-spent-online payloads (`potso_*`).

use serde::{Deserialize, Serialize};

use crate::Address;

/// Parameters of `potso_heartbeat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatParams {
    /// Participating account, bech32.
    pub address: String,
    /// Client-reported timestamp, unix seconds. Defaults to arrival
    /// time when absent.
    #[serde(default)]
    pub timestamp: Option<u64>,
}

/// Receipt returned by `potso_heartbeat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatReceipt {
    /// Participating account.
    pub address: Address,
    /// Meter day, `YYYY-MM-DD`.
    pub day: String,
    /// Credited uptime for the day, seconds.
    pub uptime_seconds: u64,
}

/// Parameters of `potso_meters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetersParams {
    /// Metered account, bech32.
    pub address: String,
    /// Meter day, `YYYY-MM-DD`. Defaults to today.
    #[serde(default)]
    pub day: Option<String>,
}

/// Parameters of `potso_leaderboard`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardParams {
    /// Leaderboard day, `YYYY-MM-DD`. Defaults to today.
    #[serde(default)]
    pub day: Option<String>,
    /// Max rows returned.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Per-day meters returned by `potso_meters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meters {
    /// Metered account.
    pub address: Address,
    /// Meter day, `YYYY-MM-DD`.
    pub day: String,
    /// Credited uptime, seconds.
    pub uptime_seconds: u64,
    /// Engagement score for the day.
    pub engagement: u64,
    /// Transactions counted for the day.
    pub tx_count: u64,
}

/// One row of `potso_leaderboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Ranked account.
    pub address: Address,
    /// Composite weight, decimal string.
    pub weight: String,
    /// One-based rank.
    pub rank: u32,
}

/// Parameters of `potso_stakeLock` and `potso_stakeUnlock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeLockParams {
    /// Account, bech32.
    pub address: String,
    /// Locked or unlocked amount, decimal string.
    pub amount: String,
}

/// Receipt returned by the lock mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockReceipt {
    /// Account.
    pub address: Address,
    /// Total locked after the mutation, decimal string.
    pub locked: String,
    /// Earliest withdrawal time for pending unbonds, unix seconds.
    pub unlock_at: u64,
}

/// Parameters of `potso_submitEvidence`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceParams {
    /// Offence kind, `equivocation` or `downtime`.
    pub kind: String,
    /// Accused account, bech32.
    pub offender: String,
    /// Height the offence was observed at.
    pub height: u64,
    /// Optional free-form detail.
    #[serde(default)]
    pub details: Option<String>,
}

/// Receipt returned by `potso_submitEvidence`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceReceipt {
    /// Evidence identifier, lowercase hex.
    pub id: String,
    /// Whether the node accepted the evidence for processing.
    pub accepted: bool,
}
