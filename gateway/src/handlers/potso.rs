//! Participation meter handlers (`potso_*`).

use std::sync::Arc;

use gateway_types::dto::potso::{EvidenceParams, HeartbeatParams, LeaderboardParams, MetersParams, StakeLockParams};
use gateway_types::error::RpcError;
use serde_json::Value;

use crate::codec::{self, CodecError, DEADLINE_SKEW_SECS};
use crate::handlers::{RpcResult, map_node_err, ok, one, one_value, opt_one};
use crate::services::node::NodeError;
use crate::state::{GatewayState, unix_now};

const DEFAULT_LEADERBOARD_LIMIT: u32 = 25;
const MAX_LEADERBOARD_LIMIT: u32 = 100;

fn node_err(err: NodeError) -> RpcError {
    map_node_err(None, err)
}

/// Light shape check for meter days, `YYYY-MM-DD`.
fn day(raw: &str) -> Result<String, CodecError> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    if !well_formed {
        return Err(CodecError::new("day must be YYYY-MM-DD"));
    }
    Ok(trimmed.to_owned())
}

pub(crate) async fn heartbeat(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: HeartbeatParams = one(params)?;
    let address = codec::address(&p.address)?;
    let now = unix_now();
    let timestamp = p.timestamp.unwrap_or(now);
    if timestamp > now + DEADLINE_SKEW_SECS {
        return Err(CodecError::new("timestamp must not be in the future").into());
    }
    ok(state
        .node
        .potso
        .heartbeat(address, timestamp)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn meters(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: MetersParams = codec::dual_decode(one_value(params)?, "address")?;
    let address = codec::address(&p.address)?;
    let day = p.day.as_deref().map(day).transpose()?;
    ok(state.node.potso.meters(address, day).await.map_err(node_err)?)
}

pub(crate) async fn leaderboard(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p = opt_one::<LeaderboardParams>(params)?.unwrap_or_default();
    let day = p.day.as_deref().map(day).transpose()?;
    let limit = p
        .limit
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
        .min(MAX_LEADERBOARD_LIMIT);
    ok(state
        .node
        .potso
        .leaderboard(day, limit)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn stake_lock(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: StakeLockParams = one(params)?;
    let address = codec::address(&p.address)?;
    let amount = codec::amount(&p.amount)?;
    ok(state
        .node
        .potso
        .stake_lock(address, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn stake_unlock(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: StakeLockParams = one(params)?;
    let address = codec::address(&p.address)?;
    let amount = codec::amount(&p.amount)?;
    ok(state
        .node
        .potso
        .stake_unlock(address, amount)
        .await
        .map_err(node_err)?)
}

pub(crate) async fn submit_evidence(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: EvidenceParams = one(params)?;
    let kind = codec::closed_enum(&p.kind, &["equivocation", "downtime"])?;
    let offender = codec::address(&p.offender)?;
    ok(state
        .node
        .potso
        .submit_evidence(kind, offender, p.height, p.details)
        .await
        .map_err(node_err)?)
}
