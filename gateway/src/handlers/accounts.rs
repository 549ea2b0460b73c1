//! `nhb_*` account, block and epoch reads.

use std::sync::Arc;

use serde_json::Value;

use crate::codec;
use crate::handlers::{RpcResult, map_node_err, ok, one_value, opt_one};
use crate::services::node::NodeError;
use crate::state::GatewayState;

const DEFAULT_BLOCK_COUNT: u32 = 10;
const MAX_BLOCK_COUNT: u32 = 100;

fn node_err(err: NodeError) -> gateway_types::error::RpcError {
    map_node_err(None, err)
}

pub(crate) async fn get_balance(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let address = codec::string_or_object(raw, "address")?;
    let address = codec::address(&address)?;
    let balance = state.node.accounts.balance(address).await.map_err(node_err)?;
    ok(balance)
}

pub(crate) async fn get_latest_blocks(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let count = match opt_one::<u32>(params)? {
        Some(0) => {
            return Err(gateway_types::error::RpcError::invalid_params(
                "count must be positive",
            ));
        }
        Some(count) => count.min(MAX_BLOCK_COUNT),
        None => DEFAULT_BLOCK_COUNT,
    };
    let blocks = state
        .node
        .accounts
        .latest_blocks(count)
        .await
        .map_err(node_err)?;
    ok(blocks)
}

pub(crate) async fn get_epoch_summary(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let epoch = opt_one::<u64>(params)?;
    let summary = state
        .node
        .accounts
        .epoch_summary(epoch)
        .await
        .map_err(node_err)?;
    ok(summary)
}
