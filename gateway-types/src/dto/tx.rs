//! Transaction submission and sponsorship payloads.

use serde::{Deserialize, Serialize};

use crate::Address;

/// A signed transaction as submitted by callers.
///
/// The node re-verifies the signature and the hash; the gateway only
/// checks shape and uses `hash` as the duplicate-detection key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Chain the transaction is bound to.
    pub chain_id: u64,
    /// Sender nonce.
    pub nonce: u64,
    /// Sender address, bech32.
    pub from: String,
    /// Recipient address, bech32.
    pub to: String,
    /// Token symbol the value moves in.
    pub token: String,
    /// Transferred amount, decimal string.
    pub value: String,
    /// Optional `0x`-prefixed payload, at most 32 bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Sender signature, hex.
    pub signature: String,
    /// 32-byte transaction hash, hex with optional `0x` prefix.
    pub hash: String,
    /// Optional caller metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<CallerMeta>,
}

/// Caller metadata attached to submit-class requests.
///
/// At most one of `ttl_seconds` and `expiry` is honoured; `expiry` wins
/// when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerMeta {
    /// Requested time-to-live in seconds, relative to arrival.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<u64>,
    /// Absolute expiry, unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
}

/// Parameters of `tx_sponsor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorParams {
    /// The transaction to sponsor.
    pub tx: Transaction,
    /// Sponsor address, bech32.
    pub sponsor: String,
    /// Sponsor signature over the transaction hash, hex.
    pub sponsor_signature: String,
}

/// Result of `tx_sponsorshipStatus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipStatus {
    /// Queried transaction hash, lowercase hex.
    pub hash: String,
    /// `none`, `pending` or `settled`.
    pub status: String,
    /// Sponsor account, when sponsored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<Address>,
}
