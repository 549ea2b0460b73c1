//! Snapshot sync handlers.

use std::sync::Arc;

use gateway_types::dto::sync::SnapshotImportParams;
use gateway_types::error::{RpcError, codes};
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, domain_invalid, map_node_err, no_params, ok, one, opt_one};
use crate::services::node::NodeError;
use crate::state::GatewayState;

fn invalid(err: CodecError) -> RpcError {
    domain_invalid(codes::SYNC, err)
}

fn node_err(err: NodeError) -> RpcError {
    map_node_err(Some(codes::SYNC), err)
}

pub(crate) async fn status(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    no_params(&params)?;
    ok(state.node.sync.status().await.map_err(node_err)?)
}

pub(crate) async fn export_snapshot(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let height = opt_one::<u64>(params)?;
    ok(state
        .node
        .sync
        .export_snapshot(height)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn import_snapshot(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: SnapshotImportParams = one(params)?;
    let source = p.source.trim().to_owned();
    if source.is_empty() {
        return Err(invalid(CodecError::new("source must not be empty")));
    }
    let checksum = codec::identifier(&p.checksum).map_err(invalid)?;
    ok(state
        .node
        .sync
        .import_snapshot(source, checksum)
        .await
        .map_err(node_err)?)
}
