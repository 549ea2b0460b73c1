//! Alias and avatar handlers.

use std::sync::Arc;

use gateway_types::dto::identity::{SetAliasParams, SetAvatarParams};
use gateway_types::error::RpcError;
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, map_node_err, ok, one, one_value};
use crate::services::node::NodeError;
use crate::state::GatewayState;

const MAX_AVATAR_REF_LEN: usize = 256;

fn node_err(err: NodeError) -> RpcError {
    map_node_err(None, err)
}

pub(crate) async fn set_alias(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: SetAliasParams = one(params)?;
    let address = codec::address(&p.address)?;
    let alias = codec::alias(&p.alias)?;
    let record = state
        .node
        .identity
        .set_alias(address, alias)
        .await
        .map_err(node_err)?;
    ok(record)
}

pub(crate) async fn set_avatar(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: SetAvatarParams = one(params)?;
    let address = codec::address(&p.address)?;
    let avatar_ref = p.avatar_ref.trim().to_owned();
    if avatar_ref.is_empty() {
        return Err(CodecError::new("avatar ref must not be empty").into());
    }
    if avatar_ref.len() > MAX_AVATAR_REF_LEN {
        return Err(CodecError::new("avatar ref is too long").into());
    }
    if !avatar_ref.starts_with("https://") && !avatar_ref.starts_with("ipfs://") {
        return Err(CodecError::new("avatar ref must use https or ipfs").into());
    }
    let record = state
        .node
        .identity
        .set_avatar(address, avatar_ref)
        .await
        .map_err(node_err)?;
    ok(record)
}

pub(crate) async fn resolve(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let alias = codec::string_or_object(raw, "alias")?;
    let alias = codec::alias(&alias)?;
    ok(state.node.identity.resolve(alias).await.map_err(node_err)?)
}

pub(crate) async fn reverse(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let address = codec::string_or_object(raw, "address")?;
    let address = codec::address(&address)?;
    ok(state
        .node
        .identity
        .reverse(address)
        .await
        .map_err(node_err)?)
}
