//! Hash-locked claimable transfer handlers.

use std::sync::Arc;

use gateway_types::dto::claimable::{CancelParams, ClaimParams, ClaimableCreateParams};
use gateway_types::error::{RpcError, codes};
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, domain_invalid, map_node_err, ok, one, one_value};
use crate::services::node::{ClaimableCreateRequest, NodeError};
use crate::state::{GatewayState, unix_now};

fn invalid(err: CodecError) -> RpcError {
    domain_invalid(codes::CLAIMABLE, err)
}

fn node_err(err: NodeError) -> RpcError {
    map_node_err(Some(codes::CLAIMABLE), err)
}

pub(crate) async fn create(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: ClaimableCreateParams = one(params)?;
    let payer = codec::address(&p.payer).map_err(invalid)?;
    let token = codec::token(&p.token).map_err(invalid)?;
    let amount = codec::amount(&p.amount).map_err(invalid)?;
    codec::ensure_future_deadline(p.deadline, unix_now()).map_err(invalid)?;
    let recipient_hint = codec::recipient_hint(&p.recipient).map_err(invalid)?;
    let record = state
        .node
        .claimable
        .create(ClaimableCreateRequest {
            payer,
            token,
            amount,
            deadline: p.deadline,
            recipient_hint,
        })
        .await
        .map_err(node_err)?;
    ok(record)
}

pub(crate) async fn claim(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: ClaimParams = one(params)?;
    let id = codec::identifier(&p.id).map_err(invalid)?;
    let payee = codec::address(&p.payee).map_err(invalid)?;
    let preimage = p
        .preimage
        .as_deref()
        .map(codec::signature)
        .transpose()
        .map_err(invalid)?;
    let record = state
        .node
        .claimable
        .claim(id, payee, preimage)
        .await
        .map_err(node_err)?;
    ok(record)
}

pub(crate) async fn cancel(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: CancelParams = one(params)?;
    let id = codec::identifier(&p.id).map_err(invalid)?;
    let caller = codec::address(&p.caller).map_err(invalid)?;
    let record = state
        .node
        .claimable
        .cancel(id, caller)
        .await
        .map_err(node_err)?;
    ok(record)
}

pub(crate) async fn get(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let id = codec::string_or_object(raw, "id").map_err(invalid)?;
    let id = codec::identifier(&id).map_err(invalid)?;
    ok(state.node.claimable.get(id).await.map_err(node_err)?)
}
