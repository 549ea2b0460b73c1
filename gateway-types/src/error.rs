//! The gateway error taxonomy.
//!
//! Every error leaving the gateway is one of the codes defined in
//! [`codes`], paired with the HTTP status that accompanies the JSON
//! envelope. Messages are short and stable per code; variable context
//! (the invalid value, the duplicate hash, the throttled source) travels
//! in the optional `data` field.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Numeric JSON-RPC error codes used by the gateway.
pub mod codes {
    /// Body is not JSON.
    pub const PARSE_ERROR: i64 = -32700;
    /// Wrong version, missing method, oversized body.
    pub const INVALID_REQUEST: i64 = -32600;
    /// Unknown method name.
    pub const METHOD_NOT_FOUND: i64 = -32601;
    /// Arity, decoding or semantic pre-check failure.
    pub const INVALID_PARAMS: i64 = -32602;
    /// Missing or invalid bearer token, or role denied.
    pub const UNAUTHORIZED: i64 = -32001;
    /// Transaction replay within the duplicate-detection TTL.
    pub const DUPLICATE_TX: i64 = -32010;
    /// Per-source rate limit exceeded.
    pub const RATE_LIMITED: i64 = -32020;
    /// Node mempool rejected the transaction for capacity.
    pub const MEMPOOL_FULL: i64 = -32030;
    /// Catch-all server error.
    pub const SERVER_ERROR: i64 = -32000;

    /// Escrow domain errors.
    pub const ESCROW: i64 = -32021;
    /// P2P trading domain errors.
    pub const TRADE: i64 = -32022;
    /// Claimable transfer domain errors.
    pub const CLAIMABLE: i64 = -32023;
    /// Peer management domain errors.
    pub const NET: i64 = -32024;
    /// Snapshot sync domain errors.
    pub const SYNC: i64 = -32025;
    /// Swap voucher domain errors.
    pub const SWAP: i64 = -32026;
    /// Lending domain errors.
    pub const LENDING: i64 = -32027;
    /// Governance domain errors.
    pub const GOV: i64 = -32028;
}

/// The error object carried in the response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorObject {
    /// Taxonomy code, see [`codes`].
    pub code: i64,
    /// Short, stable human-readable message.
    pub message: String,
    /// Variable context safe to echo to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A typed gateway error: taxonomy code, stable message, optional data,
/// plus the HTTP status the envelope is written with.
///
/// The status is transport metadata and is not serialized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct RpcError {
    /// Taxonomy code, see [`codes`].
    pub code: i64,
    /// Short, stable human-readable message.
    pub message: String,
    /// Variable context safe to echo to the caller.
    pub data: Option<Value>,
    /// HTTP status accompanying the envelope.
    pub http_status: StatusCode,
}

impl RpcError {
    /// Body is not JSON.
    pub fn parse_error() -> Self {
        Self {
            code: codes::PARSE_ERROR,
            message: "parse error".to_owned(),
            data: None,
            http_status: StatusCode::BAD_REQUEST,
        }
    }

    /// Malformed envelope (wrong version, missing method, empty body).
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self {
            code: codes::INVALID_REQUEST,
            message: "invalid request".to_owned(),
            data: Some(Value::String(detail.into())),
            http_status: StatusCode::BAD_REQUEST,
        }
    }

    /// Body exceeded the ingress size cap.
    pub fn oversized_request() -> Self {
        Self {
            code: codes::INVALID_REQUEST,
            message: "invalid request".to_owned(),
            data: Some(Value::String("request body too large".to_owned())),
            http_status: StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Unknown method.
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: codes::METHOD_NOT_FOUND,
            message: "method not found".to_owned(),
            data: Some(Value::String(method.to_owned())),
            http_status: StatusCode::NOT_FOUND,
        }
    }

    /// Parameter arity, decoding or semantic pre-check failure.
    ///
    /// The message is the codec's caller-safe description.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: codes::INVALID_PARAMS,
            message: message.into(),
            data: None,
            http_status: StatusCode::BAD_REQUEST,
        }
    }

    /// Missing or invalid bearer token.
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self {
            code: codes::UNAUTHORIZED,
            message: "unauthorized".to_owned(),
            data: Some(Value::String(detail.into())),
            http_status: StatusCode::UNAUTHORIZED,
        }
    }

    /// Authenticated but not allowed to act on the resource.
    pub fn forbidden() -> Self {
        Self {
            code: codes::UNAUTHORIZED,
            message: "forbidden".to_owned(),
            data: None,
            http_status: StatusCode::FORBIDDEN,
        }
    }

    /// Transaction replay within the duplicate-detection TTL. `hash` is
    /// the lowercase hex transaction hash without a `0x` prefix.
    pub fn duplicate_tx(hash: impl Into<String>) -> Self {
        Self {
            code: codes::DUPLICATE_TX,
            message: "duplicate transaction".to_owned(),
            data: Some(Value::String(hash.into())),
            http_status: StatusCode::CONFLICT,
        }
    }

    /// Per-source rate limit exceeded.
    pub fn rate_limited(source: impl Into<String>) -> Self {
        Self {
            code: codes::RATE_LIMITED,
            message: "rate limit exceeded".to_owned(),
            data: Some(Value::String(source.into())),
            http_status: StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Node mempool rejected the transaction for capacity.
    pub fn mempool_full() -> Self {
        Self {
            code: codes::MEMPOOL_FULL,
            message: "mempool full".to_owned(),
            data: None,
            http_status: StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Catch-all server error.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            code: codes::SERVER_ERROR,
            message: "internal error".to_owned(),
            data: Some(Value::String(detail.into())),
            http_status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// A domain-taxonomy error with an explicit code, message and status.
    pub fn domain(code: i64, message: impl Into<String>, status: StatusCode, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
            http_status: status,
        }
    }

    /// Converts into the wire error object, dropping the HTTP status.
    pub fn into_object(self) -> RpcErrorObject {
        RpcErrorObject {
            code: self.code,
            message: self.message,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(RpcError::parse_error().http_status, StatusCode::BAD_REQUEST);
        assert_eq!(
            RpcError::oversized_request().http_status,
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            RpcError::method_not_found("nope_call").http_status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RpcError::duplicate_tx("abc").http_status,
            StatusCode::CONFLICT
        );
        assert_eq!(
            RpcError::rate_limited("1.2.3.4").http_status,
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            RpcError::mempool_full().http_status,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn error_object_omits_empty_data() {
        let obj = RpcError::forbidden().into_object();
        let json = serde_json::to_string(&obj).unwrap();
        assert!(!json.contains("data"));
        assert!(json.contains("-32001"));
    }
}
