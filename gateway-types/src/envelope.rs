//! The JSON-RPC 2.0 request and response envelope.
//!
//! The gateway accepts a single request object per HTTP body. Batch
//! requests are not part of the wire contract. The caller-supplied `id`
//! is kept as a raw [`serde_json::Value`] so integers, strings and null
//! round-trip unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RpcErrorObject;

/// The only protocol version the gateway speaks.
pub const JSONRPC_VERSION: &str = "2.0";

/// An incoming JSON-RPC request envelope.
///
/// `jsonrpc` is optional on the wire; when present it must equal
/// [`JSONRPC_VERSION`]. `params` holds the ordered raw parameter slots,
/// decoded per-method by the gateway's codecs.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    /// Protocol version literal, if the caller sent one.
    pub jsonrpc: Option<String>,
    /// The method to invoke, e.g. `escrow_create`.
    pub method: String,
    /// Ordered positional parameters. Absent and `[]` are equivalent.
    #[serde(default)]
    pub params: Option<Vec<Value>>,
    /// Caller-supplied identifier, echoed in the response.
    #[serde(default)]
    pub id: Value,
}

/// An outgoing JSON-RPC response envelope.
///
/// Exactly one of `result` and `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// The echoed caller identifier.
    pub id: Value,
    /// Success payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// Builds a success response echoing `id`.
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Builds an error response echoing `id`.
    pub fn error(id: Value, error: RpcErrorObject) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id,
            result: None,
            error: Some(error),
        }
    }
}
