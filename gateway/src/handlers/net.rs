//! Peer management handlers.

use std::sync::Arc;

use gateway_types::dto::net::BanParams;
use gateway_types::error::{RpcError, codes};
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, domain_invalid, map_node_err, no_params, ok, one, one_value};
use crate::services::node::NodeError;
use crate::state::GatewayState;

fn invalid(err: CodecError) -> RpcError {
    domain_invalid(codes::NET, err)
}

fn node_err(err: NodeError) -> RpcError {
    map_node_err(Some(codes::NET), err)
}

fn node_id(raw: &str) -> Result<String, CodecError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CodecError::new("node id must not be empty"));
    }
    Ok(trimmed.to_owned())
}

pub(crate) async fn info(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    no_params(&params)?;
    ok(state.node.net.info().await.map_err(node_err)?)
}

pub(crate) async fn peers(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    no_params(&params)?;
    ok(state.node.net.peers().await.map_err(node_err)?)
}

pub(crate) async fn ban(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: BanParams = one(params)?;
    let node_id = node_id(&p.node_id).map_err(invalid)?;
    ok(state
        .node
        .net
        .ban(node_id, p.seconds)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn unban(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let id = codec::string_or_object(raw, "nodeId").map_err(invalid)?;
    let id = node_id(&id).map_err(invalid)?;
    ok(state.node.net.unban(id).await.map_err(node_err)?)
}
