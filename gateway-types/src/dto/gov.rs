//! Governance payloads (`gov_*`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Address;

/// Lifecycle state of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    /// Open for votes.
    Voting,
    /// Vote passed, awaiting queueing.
    Passed,
    /// Vote failed.
    Rejected,
    /// Queued in the timelock.
    Queued,
    /// Executed on chain.
    Executed,
}

/// Parameters of `gov_propose`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeParams {
    /// Proposing account, bech32.
    pub proposer: String,
    /// Proposal kind, e.g. `param_change` or `treasury_spend`.
    pub kind: String,
    /// Kind-specific payload, passed to the node unchanged.
    pub payload: Value,
}

/// Parameters of `gov_vote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteParams {
    /// Voting account, bech32.
    pub voter: String,
    /// Voted proposal.
    pub proposal_id: u64,
    /// `yes`, `no` or `abstain`.
    pub choice: String,
}

/// Parameters of `gov_list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Return proposals with ids greater than this.
    #[serde(default)]
    pub after_id: Option<u64>,
    /// Max rows returned.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// A proposal as recorded by the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRecord {
    /// Proposal identifier.
    pub id: u64,
    /// Proposing account.
    pub proposer: Address,
    /// Proposal kind.
    pub kind: String,
    /// Current lifecycle state.
    pub status: ProposalStatus,
    /// Submission time, unix seconds.
    pub submitted_at: u64,
    /// End of the voting window, unix seconds.
    pub voting_ends_at: u64,
    /// Accumulated yes power, decimal string.
    pub yes_power: String,
    /// Accumulated no power, decimal string.
    pub no_power: String,
    /// Accumulated abstain power, decimal string.
    pub abstain_power: String,
}
