//! Escrow payloads, including milestones and arbitration realms.

use serde::{Deserialize, Serialize};

use crate::{Address, TokenSymbol};

/// Lifecycle state of an escrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscrowStatus {
    /// Created, not funded.
    Init,
    /// Payer deposit received.
    Funded,
    /// Funds released to the payee.
    Released,
    /// Funds returned to the payer.
    Refunded,
    /// Frozen pending arbitration.
    Disputed,
    /// Arbitrated to an outcome.
    Resolved,
}

/// Arbitration metadata attached at creation time.
///
/// The gateway returns the realm as the node recorded it; the policy is
/// frozen when the escrow is created and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmPolicy {
    /// Realm identifier.
    pub id: String,
    /// Arbitration scheme name, e.g. `single` or `committee`.
    pub arbitrator_scheme: String,
    /// When the policy was frozen, unix seconds.
    pub frozen_at: u64,
}

/// One milestone leg of a milestone escrow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Zero-based leg index.
    pub index: u32,
    /// Leg amount, decimal string.
    pub amount: String,
    /// `pending`, `released` or `cancelled`.
    pub status: String,
}

/// Parameters of `escrow_create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowCreateParams {
    /// Funding account, bech32.
    pub payer: String,
    /// Receiving account, bech32.
    pub payee: String,
    /// Escrowed token.
    pub token: String,
    /// Escrowed amount, decimal string.
    pub amount: String,
    /// Mediator fee in basis points, at most 10_000.
    #[serde(default)]
    pub fee_bps: Option<u32>,
    /// Funding deadline, unix seconds.
    pub deadline: u64,
    /// Optional mediator account, bech32.
    #[serde(default)]
    pub mediator: Option<String>,
    /// Optional `0x`-prefixed metadata, at most 32 bytes.
    #[serde(default)]
    pub meta: Option<String>,
    /// Optional arbitration realm identifier.
    #[serde(default)]
    pub realm: Option<String>,
}

/// Parameters of the single-escrow mutations (`fund`, `release`,
/// `refund`, `dispute`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowMutationParams {
    /// Escrow identifier, 32-byte hex.
    pub id: String,
    /// Acting account, bech32.
    pub caller: String,
}

/// Parameters of `escrow_resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowResolveParams {
    /// Escrow identifier, 32-byte hex.
    pub id: String,
    /// Arbitrator account, bech32.
    pub caller: String,
    /// `release` or `refund`.
    pub outcome: String,
}

/// Parameters of `escrow_milestoneUpdate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneUpdateParams {
    /// Escrow identifier, 32-byte hex.
    pub id: String,
    /// Acting account, bech32.
    pub caller: String,
    /// Zero-based leg index.
    pub leg: u32,
    /// `pending`, `released` or `cancelled`.
    pub status: String,
}

/// Full escrow state as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowSnapshot {
    /// Escrow identifier, lowercase hex.
    pub id: String,
    /// Funding account.
    pub payer: Address,
    /// Receiving account.
    pub payee: Address,
    /// Escrowed token.
    pub token: TokenSymbol,
    /// Escrowed amount, decimal string.
    pub amount: String,
    /// Mediator fee in basis points.
    pub fee_bps: u32,
    /// Funding deadline, unix seconds.
    pub deadline: u64,
    /// Current lifecycle state.
    pub status: EscrowStatus,
    /// Mediator account, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mediator: Option<Address>,
    /// `0x`-prefixed metadata, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Frozen arbitration policy, when a realm was attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<RealmPolicy>,
    /// Milestone legs, empty for single-leg escrows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
}
