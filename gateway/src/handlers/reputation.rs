//! Skill attestation handlers.

use std::sync::Arc;

use gateway_types::dto::reputation::SkillAttestation;
use gateway_types::error::RpcError;
use serde_json::Value;

use crate::codec::{self, CodecError, DEADLINE_SKEW_SECS};
use crate::handlers::{RpcResult, map_node_err, ok, one};
use crate::services::node::{AttestationRequest, NodeError};
use crate::state::{GatewayState, unix_now};

const MAX_SKILL_LEN: usize = 64;

fn node_err(err: NodeError) -> RpcError {
    map_node_err(None, err)
}

pub(crate) async fn verify_skill(state: Arc<GatewayState>, params: Vec<Value>) -> RpcResult {
    let p: SkillAttestation = one(params)?;
    let subject = codec::address(&p.subject)?;
    let issuer = codec::address(&p.issuer)?;
    let skill = p.skill.trim().to_lowercase();
    if skill.is_empty() {
        return Err(CodecError::new("skill must not be empty").into());
    }
    if skill.len() > MAX_SKILL_LEN {
        return Err(CodecError::new("skill is too long").into());
    }
    if p.issued_at > unix_now() + DEADLINE_SKEW_SECS {
        return Err(CodecError::new("issuedAt must not be in the future").into());
    }
    let signature = codec::signature(&p.signature)?;
    ok(state
        .node
        .reputation
        .verify_skill(AttestationRequest {
            subject,
            skill,
            issuer,
            issued_at: p.issued_at,
            signature,
        })
        .await
        .map_err(node_err)?)
}
