//! The JSON-RPC ingress endpoint.
//!
//! A single `/` route accepts one JSON-RPC 2.0 request per HTTP body
//! and walks it through the shared lifecycle: size cap, parse, envelope
//! checks, route lookup, auth gate, client-source resolution, rate
//! limiting, handler dispatch and response shaping. After the response
//! is determined a latency sample tagged with (module, action, status)
//! is emitted; metrics never fail the request.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::body::Body;
use axum::extract::{ConnectInfo, Request, State};
use axum::response::{IntoResponse, Response};
use gateway_types::envelope::{JSONRPC_VERSION, RpcRequest, RpcResponse};
use gateway_types::error::{RpcError, codes};
use http::request::Parts;
use http::{StatusCode, header};
use serde_json::Value;
use tracing::instrument;

use crate::config::MAX_BODY_BYTES;
use crate::metrics::{METRICS_ID_RPC_DURATION, METRICS_ID_RPC_THROTTLED};
use crate::state::GatewayState;

/// Handles one JSON-RPC request.
#[instrument(level = "debug", skip_all)]
pub(crate) async fn rpc_endpoint(
    State(state): State<Arc<GatewayState>>,
    request: Request,
) -> Response {
    let started = Instant::now();
    let (parts, body) = request.into_parts();

    let remote = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string())
        .unwrap_or_default();
    let forwarded = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok());
    let source = state.sources.resolve(&remote, forwarded);

    let (module, action, response) = handle(state, parts, body, &source).await;

    let status = response.status();
    ::metrics::histogram!(
        METRICS_ID_RPC_DURATION,
        "module" => module.clone(),
        "action" => action,
        "status" => status.as_u16().to_string(),
    )
    .record(started.elapsed().as_millis() as f64);
    if status == StatusCode::TOO_MANY_REQUESTS {
        ::metrics::counter!(METRICS_ID_RPC_THROTTLED, "module" => module).increment(1);
    }

    response
}

async fn handle(
    state: Arc<GatewayState>,
    parts: Parts,
    body: Body,
    source: &str,
) -> (String, String, Response) {
    let fallback = |response: Response| ("unknown".to_owned(), "call".to_owned(), response);

    if !state.client_allowed(source) {
        tracing::debug!("rejecting client outside the allow-list: {source}");
        let err = RpcError::domain(
            codes::UNAUTHORIZED,
            "forbidden",
            StatusCode::FORBIDDEN,
            Some(Value::String("client address not allowed".to_owned())),
        );
        return fallback(error_response(Value::Null, err));
    }

    let declared_len = parts
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    if declared_len.is_some_and(|len| len > MAX_BODY_BYTES) {
        return fallback(error_response(Value::Null, RpcError::oversized_request()));
    }
    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => return fallback(error_response(Value::Null, RpcError::oversized_request())),
    };
    if bytes.iter().all(|byte| byte.is_ascii_whitespace()) {
        return fallback(error_response(
            Value::Null,
            RpcError::invalid_request("empty request body"),
        ));
    }

    let raw: Value = match serde_json::from_slice(&bytes) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!("request body is not JSON: {err}");
            return fallback(error_response(Value::Null, RpcError::parse_error()));
        }
    };
    let id = raw.get("id").cloned().unwrap_or(Value::Null);
    let request: RpcRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!("malformed envelope: {err}");
            return fallback(error_response(
                id,
                RpcError::invalid_request("malformed request envelope"),
            ));
        }
    };

    if let Some(version) = &request.jsonrpc
        && version != JSONRPC_VERSION
    {
        return fallback(error_response(
            id,
            RpcError::invalid_request("unsupported jsonrpc version"),
        ));
    }
    if request.method.is_empty() {
        return fallback(error_response(
            id,
            RpcError::invalid_request("method must not be empty"),
        ));
    }

    let (module, action) = split_method(&request.method);
    let labels = (module.to_owned(), action.to_owned());

    let Some(route) = state.methods.lookup(&request.method) else {
        let err = RpcError::method_not_found(&request.method);
        return (labels.0, labels.1, error_response(id, err));
    };

    if route.auth_required {
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        if let Err(err) = state.auth.check(authorization) {
            return (labels.0, labels.1, error_response(id, err));
        }
    }

    if route.submit && !state.limiter.allow(source, Instant::now()) {
        tracing::debug!("throttling {source} on {}", request.method);
        let err = RpcError::rate_limited(source);
        return (labels.0, labels.1, error_response(id, err));
    }

    let params = request.params.unwrap_or_default();
    let handler = route.handler;
    let response = match handler(Arc::clone(&state), params).await {
        Ok(result) => success_response(id, result),
        Err(err) => error_response(id, err),
    };
    (labels.0, labels.1, response)
}

/// Splits a method name into its (module, action) pair on the first
/// underscore. Feeds observability only; routing uses the full name.
fn split_method(method: &str) -> (&str, &str) {
    match method.split_once('_') {
        Some((module, action)) => (module, action),
        None => (method, "call"),
    }
}

fn success_response(id: Value, result: Value) -> Response {
    (StatusCode::OK, Json(RpcResponse::result(id, result))).into_response()
}

fn error_response(id: Value, err: RpcError) -> Response {
    let status = err.http_status;
    (status, Json(RpcResponse::error(id, err.into_object()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_split_on_the_first_underscore() {
        assert_eq!(split_method("escrow_create"), ("escrow", "create"));
        assert_eq!(
            split_method("escrow_milestone_update"),
            ("escrow", "milestone_update")
        );
        assert_eq!(split_method("healthz"), ("healthz", "call"));
    }
}
