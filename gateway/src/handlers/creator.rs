//! Creator economy handlers.

use std::sync::Arc;

use gateway_types::dto::creator::{CreatorStakeParams, PublishParams, TipParams};
use gateway_types::error::RpcError;
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, map_node_err, ok, one, one_value};
use crate::services::node::NodeError;
use crate::state::GatewayState;

const MAX_CONTENT_REF_LEN: usize = 256;

fn node_err(err: NodeError) -> RpcError {
    map_node_err(None, err)
}

pub(crate) async fn publish(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: PublishParams = one(params)?;
    let creator = codec::address(&p.creator)?;
    let content_ref = p.content_ref.trim().to_owned();
    if content_ref.is_empty() {
        return Err(CodecError::new("content ref must not be empty").into());
    }
    if content_ref.len() > MAX_CONTENT_REF_LEN {
        return Err(CodecError::new("content ref is too long").into());
    }
    ok(state
        .node
        .creator
        .publish(creator, content_ref)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn tip(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: TipParams = one(params)?;
    let fan = codec::address(&p.fan)?;
    let content_id = codec::identifier(&p.content_id)?;
    let amount = codec::amount(&p.amount)?;
    ok(state
        .node
        .creator
        .tip(fan, content_id, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn stake(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: CreatorStakeParams = one(params)?;
    let fan = codec::address(&p.fan)?;
    let creator = codec::address(&p.creator)?;
    let amount = codec::amount(&p.amount)?;
    ok(state
        .node
        .creator
        .stake(fan, creator, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn unstake(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: CreatorStakeParams = one(params)?;
    let fan = codec::address(&p.fan)?;
    let creator = codec::address(&p.creator)?;
    let amount = codec::amount(&p.amount)?;
    ok(state
        .node
        .creator
        .unstake(fan, creator, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn payouts(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let creator = codec::string_or_object(raw, "creator")?;
    let creator = codec::address(&creator)?;
    ok(state.node.creator.payouts(creator).await.map_err(node_err)?)
}
