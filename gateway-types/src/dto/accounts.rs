//! Account, block and epoch read payloads (`nhb_*`).

use serde::{Deserialize, Serialize};

use crate::Address;

/// Account summary returned by `nhb_getBalance`.
///
/// Amounts are decimal strings so values above 2^53 survive JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    /// The queried account.
    pub address: Address,
    /// Spendable NHB balance.
    pub balance_nhb: String,
    /// Spendable ZNHB balance.
    pub balance_znhb: String,
    /// ZNHB currently delegated.
    pub stake: String,
    /// Next expected transaction nonce.
    pub nonce: u64,
    /// Engagement score accrued by the POTSO meters.
    pub engagement_score: u64,
}

/// One entry of `nhb_getLatestBlocks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    /// Block height.
    pub height: u64,
    /// `0x`-prefixed block hash.
    pub hash: String,
    /// Number of transactions included.
    pub tx_count: u32,
    /// Proposer-reported timestamp, unix seconds.
    pub timestamp: u64,
}

/// Result of `nhb_getEpochSummary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochSummary {
    /// Epoch number.
    pub epoch: u64,
    /// Height the epoch was sealed at, or the current head for the
    /// running epoch.
    pub height: u64,
    /// Total validator weight, decimal string.
    pub total_weight: String,
    /// Number of active validators.
    pub active_validators: u32,
    /// Whether the epoch has been sealed.
    pub finalized: bool,
}
