//! Fiat on-ramp voucher payloads (`swap_*`).

use serde::{Deserialize, Serialize};

use crate::{Address, TokenSymbol};

/// Lifecycle state of a voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoucherStatus {
    /// Submitted, not yet minted.
    Pending,
    /// Tokens minted to the recipient.
    Minted,
    /// Reversed by the provider.
    Reversed,
}

/// Parameters of `swap_submitVoucher`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherSubmission {
    /// Provider identifier.
    pub provider: String,
    /// Provider-side transaction id, unique per provider.
    pub provider_tx_id: String,
    /// Recipient account, bech32.
    pub recipient: String,
    /// Minted token.
    pub token: String,
    /// Minted amount, decimal string.
    pub amount: String,
    /// ISO-4217 fiat currency the voucher settles.
    pub fiat_currency: String,
    /// Fiat amount, decimal string.
    pub fiat_amount: String,
    /// Provider signature over the voucher body, hex.
    pub signature: String,
}

/// A voucher as recorded by the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRecord {
    /// Provider-side transaction id.
    pub provider_tx_id: String,
    /// Recipient account.
    pub recipient: Address,
    /// Minted token.
    pub token: TokenSymbol,
    /// Minted amount, decimal string.
    pub amount: String,
    /// Current lifecycle state.
    pub status: VoucherStatus,
    /// Submission time, unix seconds.
    pub submitted_at: u64,
}

/// Parameters of `swap_setLimits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapLimits {
    /// Token the caps apply to.
    pub token: String,
    /// Maximum minted per rolling day, decimal string.
    pub daily_cap: String,
    /// Maximum minted per voucher, decimal string.
    pub per_tx_cap: String,
}

/// Result of `swap_providerStatus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    /// Provider identifier.
    pub provider: String,
    /// Whether the provider passed its last health probe.
    pub healthy: bool,
    /// Timestamp of the last accepted oracle price, unix seconds.
    pub last_oracle_ts: u64,
}
