//! Domain handler shells.
//!
//! Every handler follows the same shape: check arity, decode parameters
//! through the codecs, apply the semantic pre-checks, call the node
//! service and map its sentinel errors into the wire taxonomy. Handlers
//! hold no state of their own.

use gateway_types::error::{RpcError, codes};
use http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::CodecError;
use crate::services::node::NodeError;

pub(crate) mod accounts;
pub(crate) mod claimable;
pub(crate) mod creator;
pub(crate) mod escrow;
pub(crate) mod gov;
pub(crate) mod identity;
pub(crate) mod lending;
pub(crate) mod loyalty;
pub(crate) mod net;
pub(crate) mod potso;
pub(crate) mod reputation;
pub(crate) mod stake;
pub(crate) mod swap;
pub(crate) mod sync;
pub(crate) mod trade;
pub(crate) mod tx;

/// What every handler returns to the dispatcher.
pub(crate) type RpcResult = Result<Value, RpcError>;

/// Requires an empty parameter list.
pub(crate) fn no_params(params: &[Value]) -> Result<(), RpcError> {
    if params.is_empty() {
        Ok(())
    } else {
        Err(RpcError::invalid_params(format!(
            "expected no parameters, got {}",
            params.len()
        )))
    }
}

/// Requires exactly one parameter and decodes it.
pub(crate) fn one<T: DeserializeOwned>(params: Vec<Value>) -> Result<T, RpcError> {
    let value = one_value(params)?;
    serde_json::from_value(value)
        .map_err(|err| RpcError::invalid_params(format!("invalid parameter object: {err}")))
}

/// Requires exactly one parameter and returns it raw.
pub(crate) fn one_value(mut params: Vec<Value>) -> Result<Value, RpcError> {
    if params.len() != 1 {
        return Err(RpcError::invalid_params(format!(
            "expected 1 parameter, got {}",
            params.len()
        )));
    }
    Ok(params.remove(0))
}

/// Accepts zero or one parameter.
pub(crate) fn opt_one<T: DeserializeOwned>(mut params: Vec<Value>) -> Result<Option<T>, RpcError> {
    match params.len() {
        0 => Ok(None),
        1 => serde_json::from_value(params.remove(0))
            .map(Some)
            .map_err(|err| RpcError::invalid_params(format!("invalid parameter object: {err}"))),
        n => Err(RpcError::invalid_params(format!(
            "expected at most 1 parameter, got {n}"
        ))),
    }
}

/// Serialises a success payload with stable field names.
pub(crate) fn ok<T: Serialize>(value: T) -> RpcResult {
    serde_json::to_value(value).map_err(|err| RpcError::internal(err.to_string()))
}

/// Maps a node-service error into the taxonomy.
///
/// `domain` selects the domain code; without one the generic codes
/// apply. Sentinels are matched by identity; [`NodeError::Other`] falls
/// back to substring matching for legacy services.
pub(crate) fn map_node_err(domain: Option<i64>, err: NodeError) -> RpcError {
    match err {
        NodeError::NotFound => RpcError::domain(
            domain.unwrap_or(codes::SERVER_ERROR),
            "not found",
            StatusCode::NOT_FOUND,
            None,
        ),
        NodeError::Forbidden => RpcError::domain(
            domain.unwrap_or(codes::UNAUTHORIZED),
            "forbidden",
            StatusCode::FORBIDDEN,
            None,
        ),
        NodeError::Conflict(detail) => RpcError::domain(
            domain.unwrap_or(codes::SERVER_ERROR),
            "conflict",
            StatusCode::CONFLICT,
            Some(Value::String(detail)),
        ),
        NodeError::InvalidParams(detail) => match domain {
            Some(code) => RpcError::domain(
                code,
                "invalid_params",
                StatusCode::BAD_REQUEST,
                Some(Value::String(detail)),
            ),
            None => RpcError::invalid_params(detail),
        },
        NodeError::MempoolFull => RpcError::mempool_full(),
        NodeError::Unavailable(detail) => RpcError::domain(
            codes::SERVER_ERROR,
            "node unavailable",
            StatusCode::SERVICE_UNAVAILABLE,
            Some(Value::String(detail)),
        ),
        NodeError::Other(raw) => map_legacy(domain, raw),
    }
}

fn map_legacy(domain: Option<i64>, raw: String) -> RpcError {
    let lowered = raw.to_lowercase();
    if lowered.contains("not found") {
        RpcError::domain(
            domain.unwrap_or(codes::SERVER_ERROR),
            "not found",
            StatusCode::NOT_FOUND,
            Some(Value::String(raw)),
        )
    } else if lowered.contains("forbidden") {
        RpcError::domain(
            domain.unwrap_or(codes::UNAUTHORIZED),
            "forbidden",
            StatusCode::FORBIDDEN,
            Some(Value::String(raw)),
        )
    } else if lowered.contains("unauthorized") {
        RpcError::unauthorized(raw)
    } else {
        RpcError::internal(raw)
    }
}

/// Wraps a codec error into a domain-coded `invalid_params`.
pub(crate) fn domain_invalid(code: i64, err: CodecError) -> RpcError {
    RpcError::domain(
        code,
        "invalid_params",
        StatusCode::BAD_REQUEST,
        Some(Value::String(err.to_string())),
    )
}
