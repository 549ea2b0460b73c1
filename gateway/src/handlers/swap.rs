//! Voucher lifecycle handlers (`swap_*`).

use std::sync::Arc;

use gateway_types::dto::swap::{SwapLimits, VoucherSubmission};
use gateway_types::error::{RpcError, codes};
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, domain_invalid, map_node_err, ok, one, one_value};
use crate::services::node::{NodeError, SwapCaps, VoucherRequest};
use crate::state::GatewayState;

fn invalid(err: CodecError) -> RpcError {
    domain_invalid(codes::SWAP, err)
}

fn node_err(err: NodeError) -> RpcError {
    map_node_err(Some(codes::SWAP), err)
}

fn fiat_currency(raw: &str) -> Result<String, CodecError> {
    let normalised = raw.trim().to_uppercase();
    if normalised.len() != 3 || !normalised.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CodecError::new("fiat currency must be a 3-letter code"));
    }
    Ok(normalised)
}

fn provider_tx_id(raw: &str) -> Result<String, CodecError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CodecError::new("provider tx id must not be empty"));
    }
    Ok(trimmed.to_owned())
}

pub(crate) async fn submit_voucher(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: VoucherSubmission = one(params)?;
    let provider = p.provider.trim().to_owned();
    if provider.is_empty() {
        return Err(invalid(CodecError::new("provider must not be empty")));
    }
    let request = VoucherRequest {
        provider,
        provider_tx_id: provider_tx_id(&p.provider_tx_id).map_err(invalid)?,
        recipient: codec::address(&p.recipient).map_err(invalid)?,
        token: codec::token(&p.token).map_err(invalid)?,
        amount: codec::amount(&p.amount).map_err(invalid)?,
        fiat_currency: fiat_currency(&p.fiat_currency).map_err(invalid)?,
        fiat_amount: p.fiat_amount.trim().to_owned(),
        signature: codec::signature(&p.signature).map_err(invalid)?,
    };
    ok(state
        .node
        .swap
        .submit_voucher(request)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn voucher_status(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let id = codec::string_or_object(raw, "providerTxId").map_err(invalid)?;
    let id = provider_tx_id(&id).map_err(invalid)?;
    ok(state.node.swap.voucher_status(id).await.map_err(node_err)?)
}

pub(crate) async fn set_limits(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: SwapLimits = one(params)?;
    let token = codec::token(&p.token).map_err(invalid)?;
    let caps = SwapCaps {
        daily_cap: codec::amount(&p.daily_cap).map_err(invalid)?,
        per_tx_cap: codec::amount(&p.per_tx_cap).map_err(invalid)?,
    };
    state
        .node
        .swap
        .set_limits(token, caps)
        .await
        .map_err(node_err)?;
    ok(true)
}

pub(crate) async fn provider_status(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let provider = codec::string_or_object(raw, "provider").map_err(invalid)?;
    let provider = provider.trim().to_owned();
    if provider.is_empty() {
        return Err(invalid(CodecError::new("provider must not be empty")));
    }
    ok(state
        .node
        .swap
        .provider_status(provider)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn reverse_voucher(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let id = codec::string_or_object(raw, "providerTxId").map_err(invalid)?;
    let id = provider_tx_id(&id).map_err(invalid)?;
    ok(state.node.swap.reverse_voucher(id).await.map_err(node_err)?)
}
