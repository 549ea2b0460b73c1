//! Staking payloads (`stake_*`).

use serde::{Deserialize, Serialize};

use crate::Address;

/// Parameters of `stake_delegate` and `stake_undelegate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationParams {
    /// Delegating account, bech32.
    pub delegator: String,
    /// Validator account, bech32.
    pub validator: String,
    /// Delegated amount, decimal string.
    pub amount: String,
}

/// Receipt returned by delegation mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeReceipt {
    /// Delegating account.
    pub delegator: Address,
    /// Validator account.
    pub validator: Address,
    /// Amount moved, decimal string.
    pub amount: String,
    /// Total shares after the mutation, decimal string.
    pub shares: String,
}

/// Result of `stake_previewClaim` and `stake_claimRewards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardClaim {
    /// Delegating account.
    pub delegator: Address,
    /// Claimable rewards, decimal string.
    pub amount: String,
    /// Earliest payout time, unix seconds. Zero when payable now.
    pub payout_at: u64,
}
