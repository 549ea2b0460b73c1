//! Loyalty business and program handlers.

use std::sync::Arc;

use gateway_types::dto::loyalty::{BusinessParams, MerchantParams, ProgramSpec};
use gateway_types::error::RpcError;
use serde_json::Value;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, map_node_err, ok, one, one_value};
use crate::services::node::{NodeError, ProgramRequest};
use crate::state::GatewayState;

const MAX_NAME_LEN: usize = 64;

fn node_err(err: NodeError) -> RpcError {
    map_node_err(None, err)
}

fn display_name(raw: &str) -> Result<String, CodecError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CodecError::new("name must not be empty"));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(CodecError::new("name is too long"));
    }
    Ok(trimmed.to_owned())
}

pub(crate) async fn create_business(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: BusinessParams = one(params)?;
    let owner = codec::address(&p.owner)?;
    let name = display_name(&p.name)?;
    ok(state
        .node
        .loyalty
        .create_business(owner, name)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn create_program(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: ProgramSpec = one(params)?;
    let business_id = codec::identifier(&p.business_id)?;
    let name = display_name(&p.name)?;
    let token = codec::token(&p.token)?;
    codec::ensure_bps(p.accrual_bps, "accrual")?;
    let cap_per_day = p
        .cap_per_day
        .as_deref()
        .map(codec::amount)
        .transpose()?;
    ok(state
        .node
        .loyalty
        .create_program(ProgramRequest {
            business_id,
            name,
            token,
            accrual_bps: p.accrual_bps,
            cap_per_day,
        })
        .await
        .map_err(node_err)?)
}

pub(crate) async fn add_merchant(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: MerchantParams = one(params)?;
    let business_id = codec::identifier(&p.business_id)?;
    let merchant = codec::address(&p.merchant)?;
    ok(state
        .node
        .loyalty
        .add_merchant(business_id, merchant)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn program_info(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let raw = one_value(params)?;
    let id = codec::string_or_object(raw, "id")?;
    let id = codec::identifier(&id)?;
    ok(state.node.loyalty.program_info(id).await.map_err(node_err)?)
}
