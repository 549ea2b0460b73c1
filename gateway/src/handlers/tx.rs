//! Transaction submission and sponsorship.
//!
//! `nhb_sendTransaction` is the only method behind the duplicate-tx
//! gate: the client-supplied hash is remembered for the configured TTL
//! and replays are rejected before the node sees them.

use std::sync::Arc;
use std::time::Instant;

use gateway_types::dto::tx::{SponsorParams, Transaction};
use gateway_types::error::RpcError;
use serde_json::Value;

use crate::codec;
use crate::handlers::{RpcResult, map_node_err, ok, one, one_value};
use crate::services::node::{NodeError, SponsorRequest, SubmitTxRequest};
use crate::state::{GatewayState, unix_now};

/// Stable success payload of `nhb_sendTransaction`.
pub(crate) const TX_RECEIVED: &str = "Transaction received by node.";

fn node_err(err: NodeError) -> RpcError {
    map_node_err(None, err)
}

fn decode_tx(state: &GatewayState, tx: Transaction) -> Result<SubmitTxRequest, RpcError> {
    let from = codec::address(&tx.from)?;
    let to = codec::address(&tx.to)?;
    let token = codec::token(&tx.token)?;
    let value = codec::amount(&tx.value)?;
    let data = tx.data.as_deref().map(codec::meta_hex).transpose()?;
    let signature = codec::signature(&tx.signature)?;
    let hash = codec::identifier(&tx.hash)?;
    let expiry = codec::resolve_expiry(tx.meta.as_ref(), unix_now(), state.caller_ttl_limit)?;
    Ok(SubmitTxRequest {
        chain_id: tx.chain_id,
        nonce: tx.nonce,
        from,
        to,
        token,
        value,
        data,
        signature,
        hash,
        expiry,
    })
}

pub(crate) async fn send(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let tx: Transaction = one(params)?;
    let request = decode_tx(&state, tx)?;
    let hash_hex = hex::encode(request.hash);
    if !state.tx_seen.remember(&hash_hex, Instant::now()) {
        return Err(RpcError::duplicate_tx(hash_hex));
    }
    state.node.tx.submit(request).await.map_err(node_err)?;
    ok(TX_RECEIVED)
}

pub(crate) async fn sponsor(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: SponsorParams = one(params)?;
    let tx = decode_tx(&state, p.tx)?;
    let sponsor = codec::address(&p.sponsor)?;
    let sponsor_signature = codec::signature(&p.sponsor_signature)?;
    let status = state
        .node
        .tx
        .sponsor(SponsorRequest {
            tx,
            sponsor,
            sponsor_signature,
        })
        .await
        .map_err(node_err)?;
    ok(status)
}

pub(crate) async fn sponsorship_status(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let hash = codec::string_or_object(raw, "hash")?;
    let hash = codec::identifier(&hash)?;
    let status = state
        .node
        .tx
        .sponsorship_status(hash)
        .await
        .map_err(node_err)?;
    ok(status)
}
