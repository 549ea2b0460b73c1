//! Loyalty business and program payloads (`loyalty_*`).

use serde::{Deserialize, Serialize};

use crate::{Address, TokenSymbol};

/// Parameters of `loyalty_createBusiness`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessParams {
    /// Owning account, bech32.
    pub owner: String,
    /// Display name.
    pub name: String,
}

/// A business as recorded by the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    /// Business identifier, lowercase hex.
    pub id: String,
    /// Owning account.
    pub owner: Address,
    /// Display name.
    pub name: String,
    /// Registered merchant accounts.
    pub merchants: Vec<Address>,
}

/// Parameters of `loyalty_createProgram`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSpec {
    /// Business the program belongs to, lowercase hex.
    pub business_id: String,
    /// Display name.
    pub name: String,
    /// Reward token.
    pub token: String,
    /// Accrual rate in basis points of spend.
    pub accrual_bps: u32,
    /// Optional daily accrual cap, decimal string.
    #[serde(default)]
    pub cap_per_day: Option<String>,
}

/// A program as recorded by the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecord {
    /// Program identifier, lowercase hex.
    pub id: String,
    /// Business the program belongs to.
    pub business_id: String,
    /// Display name.
    pub name: String,
    /// Reward token.
    pub token: TokenSymbol,
    /// Accrual rate in basis points of spend.
    pub accrual_bps: u32,
    /// Daily accrual cap, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_per_day: Option<String>,
    /// Whether the program is accruing.
    pub active: bool,
}

/// Parameters of `loyalty_addMerchant`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantParams {
    /// Business identifier, lowercase hex.
    pub business_id: String,
    /// Merchant account, bech32.
    pub merchant: String,
}
