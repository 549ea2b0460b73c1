//! Skill attestation payloads.

use serde::{Deserialize, Serialize};

use crate::Address;

/// Parameters of `reputation_verifySkill`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAttestation {
    /// Attested account, bech32.
    pub subject: String,
    /// Skill tag, e.g. `rust` or `escrow-arbiter`.
    pub skill: String,
    /// Issuing account, bech32.
    pub issuer: String,
    /// Issue time, unix seconds.
    pub issued_at: u64,
    /// Issuer signature over the attestation body, hex.
    pub signature: String,
}

/// Result of `reputation_verifySkill`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySkillResult {
    /// Attested account.
    pub subject: Address,
    /// Skill tag.
    pub skill: String,
    /// Issuing account.
    pub issuer: Address,
    /// Whether the node accepted the attestation.
    pub verified: bool,
}
