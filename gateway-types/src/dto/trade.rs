//! P2P trade payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Address, TokenSymbol};

/// Lifecycle state of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeStatus {
    /// Created, waiting for both deposits.
    Init,
    /// One leg funded.
    PartialFunded,
    /// Both legs funded.
    Funded,
    /// Atomically settled.
    Settled,
    /// Frozen pending arbitration.
    Disputed,
    /// Arbitrated to an outcome.
    Resolved,
}

/// Parameters of `p2p_createTrade`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeCreateParams {
    /// Buyer account, bech32.
    pub buyer: String,
    /// Seller account, bech32.
    pub seller: String,
    /// Token the seller deposits.
    pub base_token: String,
    /// Seller deposit amount, decimal string.
    pub base_amount: String,
    /// Token the buyer deposits.
    pub quote_token: String,
    /// Buyer deposit amount, decimal string.
    pub quote_amount: String,
    /// Funding deadline, unix seconds.
    pub deadline: u64,
    /// Accepted settlement slippage in basis points, at most 10_000.
    #[serde(default)]
    pub slippage_bps: Option<u32>,
}

/// One escrow deposit a party must perform to fund the trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayIntent {
    /// Depositing account.
    pub from: Address,
    /// Escrow vault to pay into.
    pub to: Address,
    /// Deposit token.
    pub token: TokenSymbol,
    /// Deposit amount, decimal string.
    pub amount: String,
    /// Memo the deposit transaction must carry, `ESCROW:<tradeId>`.
    pub memo: String,
}

/// Full trade state as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDetail {
    /// Trade identifier.
    pub trade_id: Uuid,
    /// Current lifecycle state.
    pub status: TradeStatus,
    /// Buyer account.
    pub buyer: Address,
    /// Seller account.
    pub seller: Address,
    /// Token the seller deposits.
    pub base_token: TokenSymbol,
    /// Seller deposit amount, decimal string.
    pub base_amount: String,
    /// Token the buyer deposits.
    pub quote_token: TokenSymbol,
    /// Buyer deposit amount, decimal string.
    pub quote_amount: String,
    /// Funding deadline, unix seconds.
    pub deadline: u64,
    /// Accepted settlement slippage in basis points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage_bps: Option<u32>,
    /// The two deposits funding the trade.
    pub pay_intents: Vec<PayIntent>,
}

/// Parameters of `p2p_dispute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeParams {
    /// Trade identifier.
    pub id: Uuid,
    /// Acting account, bech32.
    pub caller: String,
}

/// Parameters of `p2p_resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResolveParams {
    /// Trade identifier.
    pub id: Uuid,
    /// Arbitrator account, bech32.
    pub caller: String,
    /// `release` or `refund`.
    pub outcome: String,
}
