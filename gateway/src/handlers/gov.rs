//! Governance handlers.

use std::sync::Arc;

use gateway_types::dto::gov::{ListParams, ProposeParams, VoteParams};
use gateway_types::error::{RpcError, codes};
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, domain_invalid, map_node_err, ok, one, opt_one};
use crate::services::node::{NodeError, VoteChoice};
use crate::state::GatewayState;

const DEFAULT_LIST_LIMIT: u32 = 20;
const MAX_LIST_LIMIT: u32 = 100;
const PROPOSAL_KINDS: &[&str] = &["param_change", "treasury_spend", "upgrade", "text"];

fn invalid(err: CodecError) -> RpcError {
    domain_invalid(codes::GOV, err)
}

fn node_err(err: NodeError) -> RpcError {
    map_node_err(Some(codes::GOV), err)
}

pub(crate) async fn propose(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: ProposeParams = one(params)?;
    let proposer = codec::address(&p.proposer).map_err(invalid)?;
    let kind = codec::closed_enum(&p.kind, PROPOSAL_KINDS).map_err(invalid)?;
    ok(state
        .node
        .gov
        .propose(proposer, kind, p.payload)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn vote(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: VoteParams = one(params)?;
    let voter = codec::address(&p.voter).map_err(invalid)?;
    let choice = match codec::closed_enum(&p.choice, &["yes", "no", "abstain"])
        .map_err(invalid)?
        .as_str()
    {
        "yes" => VoteChoice::Yes,
        "no" => VoteChoice::No,
        _ => VoteChoice::Abstain,
    };
    ok(state
        .node
        .gov
        .vote(voter, p.proposal_id, choice)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn proposal(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let id: u64 = one(params)?;
    ok(state.node.gov.proposal(id).await.map_err(node_err)?)
}

pub(crate) async fn list(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p = opt_one::<ListParams>(params)?.unwrap_or_default();
    let limit = p.limit.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT);
    ok(state
        .node
        .gov
        .list(p.after_id, limit)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn finalize(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let id: u64 = one(params)?;
    ok(state.node.gov.finalize(id).await.map_err(node_err)?)
}

pub(crate) async fn queue(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let id: u64 = one(params)?;
    ok(state.node.gov.queue(id).await.map_err(node_err)?)
}

pub(crate) async fn execute(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let id: u64 = one(params)?;
    ok(state.node.gov.execute(id).await.map_err(node_err)?)
}
