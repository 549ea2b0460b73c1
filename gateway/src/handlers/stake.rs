//! Delegated staking handlers.

use std::sync::Arc;

use gateway_types::dto::stake::DelegationParams;
use gateway_types::error::RpcError;
use serde_json::Value;

use crate::codec;
use crate::handlers::{RpcResult, map_node_err, ok, one, one_value};
use crate::services::node::NodeError;
use crate::state::GatewayState;

fn node_err(err: NodeError) -> RpcError {
    map_node_err(None, err)
}

pub(crate) async fn delegate(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: DelegationParams = one(params)?;
    let delegator = codec::address(&p.delegator)?;
    let validator = codec::address(&p.validator)?;
    let amount = codec::amount(&p.amount)?;
    ok(state
        .node
        .stake
        .delegate(delegator, validator, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn undelegate(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: DelegationParams = one(params)?;
    let delegator = codec::address(&p.delegator)?;
    let validator = codec::address(&p.validator)?;
    let amount = codec::amount(&p.amount)?;
    ok(state
        .node
        .stake
        .undelegate(delegator, validator, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn claim_rewards(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let delegator = codec::string_or_object(raw, "delegator")?;
    let delegator = codec::address(&delegator)?;
    ok(state
        .node
        .stake
        .claim_rewards(delegator)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn preview_claim(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let delegator = codec::string_or_object(raw, "delegator")?;
    let delegator = codec::address(&delegator)?;
    ok(state
        .node
        .stake
        .preview_claim(delegator)
        .await
        .map_err(node_err)?)
}
