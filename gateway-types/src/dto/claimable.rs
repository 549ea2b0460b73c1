//! Hash-locked claimable transfer payloads.

use serde::{Deserialize, Serialize};

use crate::{Address, TokenSymbol};

/// Lifecycle state of a claimable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimableStatus {
    /// Funds locked, waiting for the recipient.
    Pending,
    /// Claimed by the recipient.
    Claimed,
    /// Cancelled by the payer.
    Cancelled,
    /// Deadline passed unclaimed.
    Expired,
}

/// Parameters of `claimable_create`.
///
/// `recipient` is a hint: either a 64-char hex identifier or an alias
/// that the gateway normalises and hashes through the identity
/// derivation before it reaches the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimableCreateParams {
    /// Funding account, bech32.
    pub payer: String,
    /// Locked token.
    pub token: String,
    /// Locked amount, decimal string.
    pub amount: String,
    /// Claim deadline, unix seconds.
    pub deadline: u64,
    /// Recipient hint, hex identifier or alias.
    pub recipient: String,
}

/// Parameters of `claimable_claim`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimParams {
    /// Claimable identifier, 32-byte hex.
    pub id: String,
    /// Claiming account, bech32.
    pub payee: String,
    /// Optional preimage for preimage-locked claimables, hex.
    #[serde(default)]
    pub preimage: Option<String>,
}

/// Parameters of `claimable_cancel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelParams {
    /// Claimable identifier, 32-byte hex.
    pub id: String,
    /// Acting account, must be the payer, bech32.
    pub caller: String,
}

/// Full claimable state as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimableRecord {
    /// Claimable identifier, lowercase hex.
    pub id: String,
    /// Funding account.
    pub payer: Address,
    /// Locked token.
    pub token: TokenSymbol,
    /// Locked amount, decimal string.
    pub amount: String,
    /// Recipient hint the funds are locked to, lowercase hex.
    pub recipient_hint: String,
    /// Claim deadline, unix seconds.
    pub deadline: u64,
    /// Current lifecycle state.
    pub status: ClaimableStatus,
}
