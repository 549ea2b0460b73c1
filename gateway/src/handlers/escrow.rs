//! Escrow lifecycle handlers.
//!
//! All escrow failures, decoding included, surface under the escrow
//! domain code so clients can branch on one code per domain.

use std::sync::Arc;

use gateway_types::dto::escrow::{
    EscrowCreateParams, EscrowMutationParams, EscrowResolveParams, MilestoneUpdateParams,
};
use gateway_types::error::{RpcError, codes};
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, domain_invalid, map_node_err, ok, one, one_value};
use crate::services::node::{EscrowCreateRequest, NodeError, ResolutionOutcome};
use crate::state::{GatewayState, unix_now};

fn invalid(err: CodecError) -> RpcError {
    domain_invalid(codes::ESCROW, err)
}

fn node_err(err: NodeError) -> RpcError {
    map_node_err(Some(codes::ESCROW), err)
}

pub(crate) async fn create(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: EscrowCreateParams = one(params)?;
    let payer = codec::address(&p.payer).map_err(invalid)?;
    let payee = codec::address(&p.payee).map_err(invalid)?;
    let token = codec::token(&p.token).map_err(invalid)?;
    let amount = codec::amount(&p.amount).map_err(invalid)?;
    let fee_bps = p.fee_bps.unwrap_or(0);
    codec::ensure_bps(fee_bps, "fee").map_err(invalid)?;
    codec::ensure_future_deadline(p.deadline, unix_now()).map_err(invalid)?;
    let mediator = p
        .mediator
        .as_deref()
        .map(codec::address)
        .transpose()
        .map_err(invalid)?;
    let meta = p
        .meta
        .as_deref()
        .map(codec::meta_hex)
        .transpose()
        .map_err(invalid)?;
    let snapshot = state
        .node
        .escrow
        .create(EscrowCreateRequest {
            payer,
            payee,
            token,
            amount,
            fee_bps,
            deadline: p.deadline,
            mediator,
            meta,
            realm: p.realm,
        })
        .await
        .map_err(node_err)?;
    ok(snapshot)
}

pub(crate) async fn get(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let id = codec::string_or_object(raw, "id").map_err(invalid)?;
    let id = codec::identifier(&id).map_err(invalid)?;
    let snapshot = state.node.escrow.get(id).await.map_err(node_err)?;
    ok(snapshot)
}

fn decode_mutation(p: EscrowMutationParams) -> Result<([u8; 32], gateway_types::Address), RpcError> {
    let id = codec::identifier(&p.id).map_err(invalid)?;
    let caller = codec::address(&p.caller).map_err(invalid)?;
    Ok((id, caller))
}

pub(crate) async fn fund(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let (id, caller) = decode_mutation(one(params)?)?;
    ok(state.node.escrow.fund(id, caller).await.map_err(node_err)?)
}

pub(crate) async fn release(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let (id, caller) = decode_mutation(one(params)?)?;
    ok(state.node.escrow.release(id, caller).await.map_err(node_err)?)
}

pub(crate) async fn refund(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let (id, caller) = decode_mutation(one(params)?)?;
    ok(state.node.escrow.refund(id, caller).await.map_err(node_err)?)
}

pub(crate) async fn dispute(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let (id, caller) = decode_mutation(one(params)?)?;
    ok(state.node.escrow.dispute(id, caller).await.map_err(node_err)?)
}

pub(crate) async fn resolve(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: EscrowResolveParams = one(params)?;
    let id = codec::identifier(&p.id).map_err(invalid)?;
    let caller = codec::address(&p.caller).map_err(invalid)?;
    let outcome = match codec::closed_enum(&p.outcome, &["release", "refund"])
        .map_err(invalid)?
        .as_str()
    {
        "release" => ResolutionOutcome::Release,
        _ => ResolutionOutcome::Refund,
    };
    let snapshot = state
        .node
        .escrow
        .resolve(id, caller, outcome)
        .await
        .map_err(node_err)?;
    ok(snapshot)
}

pub(crate) async fn milestone_update(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: MilestoneUpdateParams = one(params)?;
    let id = codec::identifier(&p.id).map_err(invalid)?;
    let caller = codec::address(&p.caller).map_err(invalid)?;
    let status = codec::closed_enum(&p.status, &["pending", "released", "cancelled"])
        .map_err(invalid)?;
    let snapshot = state
        .node
        .escrow
        .milestone_update(id, caller, p.leg, status)
        .await
        .map_err(node_err)?;
    ok(snapshot)
}
