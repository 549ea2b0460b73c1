//! P2P trading handlers (`p2p_*`).

use std::sync::Arc;

use gateway_types::dto::trade::{
    DisputeParams, PayIntent, TradeCreateParams, TradeDetail, TradeResolveParams,
};
use gateway_types::error::{RpcError, codes};
use serde_json::Value;
use uuid::Uuid;

use crate::codec::{self, CodecError};
use crate::handlers::{RpcResult, domain_invalid, map_node_err, ok, one, one_value};
use crate::services::node::{NodeError, ResolutionOutcome, TradeCreateRequest, TradeState};
use crate::state::{GatewayState, unix_now};

fn invalid(err: CodecError) -> RpcError {
    domain_invalid(codes::TRADE, err)
}

fn node_err(err: NodeError) -> RpcError {
    map_node_err(Some(codes::TRADE), err)
}

/// Shapes the wire detail from the node's trade state.
///
/// The deposit memo is the settlement contract: the node credits a
/// vault deposit to the trade only when the memo matches.
fn detail(state: TradeState) -> TradeDetail {
    let memo = format!("ESCROW:{}", state.trade_id);
    let base_amount = state.base_amount.to_string();
    let quote_amount = state.quote_amount.to_string();
    let pay_intents = vec![
        PayIntent {
            from: state.seller,
            to: state.base_vault,
            token: state.base_token,
            amount: base_amount.clone(),
            memo: memo.clone(),
        },
        PayIntent {
            from: state.buyer,
            to: state.quote_vault,
            token: state.quote_token,
            amount: quote_amount.clone(),
            memo,
        },
    ];
    TradeDetail {
        trade_id: state.trade_id,
        status: state.status,
        buyer: state.buyer,
        seller: state.seller,
        base_token: state.base_token,
        base_amount,
        quote_token: state.quote_token,
        quote_amount,
        deadline: state.deadline,
        slippage_bps: state.slippage_bps,
        pay_intents,
    }
}

pub(crate) async fn create(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: TradeCreateParams = one(params)?;
    let buyer = codec::address(&p.buyer).map_err(invalid)?;
    let seller = codec::address(&p.seller).map_err(invalid)?;
    if buyer == seller {
        return Err(invalid(CodecError::new("buyer and seller must differ")));
    }
    let base_token = codec::token(&p.base_token).map_err(invalid)?;
    let base_amount = codec::amount(&p.base_amount).map_err(invalid)?;
    let quote_token = codec::token(&p.quote_token).map_err(invalid)?;
    let quote_amount = codec::amount(&p.quote_amount).map_err(invalid)?;
    codec::ensure_future_deadline(p.deadline, unix_now()).map_err(invalid)?;
    if let Some(slippage) = p.slippage_bps {
        codec::ensure_bps(slippage, "slippage").map_err(invalid)?;
    }
    let created = state
        .node
        .trade
        .create(TradeCreateRequest {
            buyer,
            seller,
            base_token,
            base_amount,
            quote_token,
            quote_amount,
            deadline: p.deadline,
            slippage_bps: p.slippage_bps,
        })
        .await
        .map_err(node_err)?;
    ok(detail(created))
}

fn trade_id(raw: Value) -> Result<Uuid, RpcError> {
    let id = codec::string_or_object(raw, "id").map_err(invalid)?;
    id.trim()
        .parse()
        .map_err(|_| invalid(CodecError::new("invalid trade id")))
}

pub(crate) async fn get(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let id = trade_id(one_value(params)?)?;
    ok(detail(state.node.trade.get(id).await.map_err(node_err)?))
}

pub(crate) async fn settle(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let id = trade_id(one_value(params)?)?;
    ok(detail(state.node.trade.settle(id).await.map_err(node_err)?))
}

pub(crate) async fn dispute(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: DisputeParams = one(params)?;
    let caller = codec::address(&p.caller).map_err(invalid)?;
    ok(detail(
        state
            .node
            .trade
            .dispute(p.id, caller)
            .await
            .map_err(node_err)?,
    ))
}

pub(crate) async fn resolve(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: TradeResolveParams = one(params)?;
    let caller = codec::address(&p.caller).map_err(invalid)?;
    let outcome = match codec::closed_enum(&p.outcome, &["release", "refund"])
        .map_err(invalid)?
        .as_str()
    {
        "release" => ResolutionOutcome::Release,
        _ => ResolutionOutcome::Refund,
    };
    ok(detail(
        state
            .node
            .trade
            .resolve(p.id, caller, outcome)
            .await
            .map_err(node_err)?,
    ))
}
