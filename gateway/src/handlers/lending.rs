//! Lending pool handlers.

use std::sync::Arc;

use gateway_types::Address;
use gateway_types::dto::lending::{LiquidateParams, PositionMutationParams};
use gateway_types::error::{RpcError, codes};
use num_bigint::BigUint;
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, domain_invalid, map_node_err, no_params, ok, one};
use crate::services::node::NodeError;
use crate::state::GatewayState;

fn invalid(err: CodecError) -> RpcError {
    domain_invalid(codes::LENDING, err)
}

fn node_err(err: NodeError) -> RpcError {
    map_node_err(Some(codes::LENDING), err)
}

fn decode_mutation(p: PositionMutationParams) -> Result<(Address, String, BigUint), RpcError> {
    let account = codec::address(&p.account).map_err(invalid)?;
    let pool_id = p.pool_id.trim().to_owned();
    if pool_id.is_empty() {
        return Err(invalid(CodecError::new("pool id must not be empty")));
    }
    let amount = codec::amount(&p.amount).map_err(invalid)?;
    Ok((account, pool_id, amount))
}

pub(crate) async fn get_pools(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    no_params(&params)?;
    ok(state.node.lending.pools().await.map_err(node_err)?)
}

pub(crate) async fn supply(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let (account, pool_id, amount) = decode_mutation(one(params)?)?;
    ok(state
        .node
        .lending
        .supply(account, pool_id, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn withdraw(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let (account, pool_id, amount) = decode_mutation(one(params)?)?;
    ok(state
        .node
        .lending
        .withdraw(account, pool_id, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn borrow(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let (account, pool_id, amount) = decode_mutation(one(params)?)?;
    ok(state
        .node
        .lending
        .borrow(account, pool_id, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn repay(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let (account, pool_id, amount) = decode_mutation(one(params)?)?;
    ok(state
        .node
        .lending
        .repay(account, pool_id, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn liquidate(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: LiquidateParams = one(params)?;
    let liquidator = codec::address(&p.liquidator).map_err(invalid)?;
    let borrower = codec::address(&p.borrower).map_err(invalid)?;
    if liquidator == borrower {
        return Err(invalid(CodecError::new("cannot liquidate own position")));
    }
    let pool_id = p.pool_id.trim().to_owned();
    if pool_id.is_empty() {
        return Err(invalid(CodecError::new("pool id must not be empty")));
    }
    ok(state
        .node
        .lending
        .liquidate(liquidator, borrower, pool_id)
        .await
        .map_err(node_err)?)
}
