//! Payloads pushed over the finality subscription.
//!
//! Each update is a JSON object with a fixed `type` discriminator. Hex
//! values are `0x`-prefixed. The `cursor` is opaque to clients; they
//! replay it on reconnect to resume where they left off.

use serde::{Deserialize, Serialize};

/// Discriminator carried in every streamed update.
pub const UPDATE_KIND: &str = "tx_update";

/// Client-visible finality state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalityStatus {
    /// Observed but not yet final.
    Pending,
    /// Irreversibly included.
    Finalized,
    /// The node reported a state this gateway does not know.
    Unspecified,
}

/// One streamed finality update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalityUpdate {
    /// Always [`UPDATE_KIND`].
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque resume position.
    pub cursor: String,
    /// `0x`-prefixed intent reference, when the transaction settles a
    /// payment intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_ref: Option<String>,
    /// `0x`-prefixed transaction hash.
    pub tx_hash: String,
    /// Finality state.
    pub status: FinalityStatus,
    /// `0x`-prefixed hash of the enclosing block, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    /// Height of the enclosing block.
    pub height: u64,
    /// Node-side timestamp, unix seconds.
    pub ts: u64,
}
