//! Creator economy payloads (`creator_*`).

use serde::{Deserialize, Serialize};

use crate::Address;

/// Parameters of `creator_publish`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishParams {
    /// Creator account, bech32.
    pub creator: String,
    /// Content reference, e.g. a CID.
    pub content_ref: String,
}

/// Published content as recorded by the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Content identifier, lowercase hex.
    pub id: String,
    /// Creator account.
    pub creator: Address,
    /// Content reference.
    pub content_ref: String,
    /// Publication time, unix seconds.
    pub published_at: u64,
    /// Lifetime tips, decimal string.
    pub total_tips: String,
    /// Currently staked on the content, decimal string.
    pub total_stake: String,
}

/// Parameters of `creator_tip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipParams {
    /// Tipping account, bech32.
    pub fan: String,
    /// Tipped content, lowercase hex.
    pub content_id: String,
    /// Tip amount, decimal string.
    pub amount: String,
}

/// Parameters of `creator_stake` and `creator_unstake`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorStakeParams {
    /// Staking account, bech32.
    pub fan: String,
    /// Creator account, bech32.
    pub creator: String,
    /// Amount staked or withdrawn, decimal string.
    pub amount: String,
}

/// Result of the creator stake mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeTotal {
    /// Staking account.
    pub fan: Address,
    /// Creator account.
    pub creator: Address,
    /// Amount moved by this call, decimal string.
    pub amount: String,
    /// Fan's total stake on the creator afterwards, decimal string.
    pub total_stake: String,
}

/// One row of `creator_payouts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRow {
    /// Payout period, `YYYY-MM`.
    pub period: String,
    /// Paid amount, decimal string.
    pub amount: String,
    /// Whether the payout has settled on chain.
    pub settled: bool,
}
