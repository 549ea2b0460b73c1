//! Alias and avatar payloads.

use serde::{Deserialize, Serialize};

use crate::Address;

/// Parameters of `identity_setAlias`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAliasParams {
    /// Account claiming the alias, bech32.
    pub address: String,
    /// Requested alias.
    pub alias: String,
}

/// Parameters of `identity_setAvatar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAvatarParams {
    /// Account, bech32.
    pub address: String,
    /// Avatar reference, e.g. an HTTPS or blob URL.
    pub avatar_ref: String,
}

/// An alias record as stored by the identity subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    /// Normalised alias.
    pub alias: String,
    /// 32-byte alias digest, lowercase hex.
    pub alias_id: String,
    /// Owning account.
    pub address: Address,
    /// Avatar reference, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
}
