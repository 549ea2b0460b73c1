//! Lending pool payloads (`lending_*`).

use serde::{Deserialize, Serialize};

use crate::{Address, TokenSymbol};

/// One pool row of `lending_getPools`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    /// Pool identifier.
    pub pool_id: String,
    /// Pool token.
    pub token: TokenSymbol,
    /// Total supplied, decimal string.
    pub total_supplied: String,
    /// Total borrowed, decimal string.
    pub total_borrowed: String,
    /// Supply APY in basis points.
    pub supply_apy_bps: u32,
    /// Borrow APY in basis points.
    pub borrow_apy_bps: u32,
    /// Collateral factor in basis points.
    pub collateral_factor_bps: u32,
}

/// Parameters shared by `lending_supply`, `lending_withdraw`,
/// `lending_borrow` and `lending_repay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMutationParams {
    /// Acting account, bech32.
    pub account: String,
    /// Pool identifier.
    pub pool_id: String,
    /// Moved amount, decimal string.
    pub amount: String,
}

/// Parameters of `lending_liquidate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidateParams {
    /// Liquidating account, bech32.
    pub liquidator: String,
    /// Underwater account, bech32.
    pub borrower: String,
    /// Pool identifier.
    pub pool_id: String,
}

/// An account position in one pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Account.
    pub account: Address,
    /// Pool identifier.
    pub pool_id: String,
    /// Supplied amount, decimal string.
    pub supplied: String,
    /// Borrowed amount, decimal string.
    pub borrowed: String,
    /// Position health in basis points; below 10_000 is liquidatable.
    pub health_factor_bps: u32,
}
