//! The node-service interfaces consumed by the gateway.
//!
//! Every domain the gateway fronts is expressed as an `async` trait the
//! hosting application implements against its node. Handlers call these
//! traits with fully decoded values and map the sentinel variants of
//! [`NodeError`] into the wire taxonomy; they never interpret node
//! internals beyond that.
//!
//! Must be `Send + Sync` to work with async contexts (e.g., Axum), so
//! every service alias is an `Arc<dyn … + Send + Sync>`.

use std::sync::Arc;

use async_trait::async_trait;
use gateway_types::dto::accounts::{AccountBalance, BlockSummary, EpochSummary};
use gateway_types::dto::claimable::ClaimableRecord;
use gateway_types::dto::creator::{ContentRecord, PayoutRow, StakeTotal};
use gateway_types::dto::escrow::EscrowSnapshot;
use gateway_types::dto::gov::ProposalRecord;
use gateway_types::dto::identity::IdentityRecord;
use gateway_types::dto::lending::{PoolInfo, Position};
use gateway_types::dto::loyalty::{BusinessRecord, ProgramRecord};
use gateway_types::dto::net::{NetInfo, PeerInfo};
use gateway_types::dto::potso::{
    EvidenceReceipt, HeartbeatReceipt, LeaderboardEntry, LockReceipt, Meters,
};
use gateway_types::dto::reputation::VerifySkillResult;
use gateway_types::dto::stake::{RewardClaim, StakeReceipt};
use gateway_types::dto::swap::{ProviderStatus, VoucherRecord};
use gateway_types::dto::sync::{SnapshotExport, SyncStatus};
use gateway_types::dto::trade::TradeStatus;
use gateway_types::dto::tx::SponsorshipStatus;
use gateway_types::{Address, TokenSymbol};
use num_bigint::BigUint;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Sentinel errors node services surface to the gateway.
///
/// Handlers match these by identity; [`NodeError::Other`] exists only
/// for legacy services that still report plain strings and is mapped by
/// substring as a fallback.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The referenced entity does not exist.
    #[error("not found")]
    NotFound,
    /// The caller is not allowed to act on the entity.
    #[error("forbidden")]
    Forbidden,
    /// The entity is not in a state that permits the operation.
    #[error("conflict: {0}")]
    Conflict(String),
    /// The node rejected a value the gateway could not pre-validate.
    #[error("invalid params: {0}")]
    InvalidParams(String),
    /// The mempool has no capacity left.
    #[error("mempool full")]
    MempoolFull,
    /// The node is up but cannot serve the request right now.
    #[error("unavailable: {0}")]
    Unavailable(String),
    /// Untyped legacy error.
    #[error("{0}")]
    Other(String),
}

/// Shorthand for node-service results.
pub type NodeResult<T> = Result<T, NodeError>;

/// A fully decoded transaction ready for submission.
#[derive(Debug, Clone)]
pub struct SubmitTxRequest {
    /// Chain the transaction is bound to.
    pub chain_id: u64,
    /// Sender nonce.
    pub nonce: u64,
    /// Sender account.
    pub from: Address,
    /// Recipient account.
    pub to: Address,
    /// Token the value moves in.
    pub token: TokenSymbol,
    /// Transferred amount.
    pub value: BigUint,
    /// Optional 32-byte payload.
    pub data: Option<[u8; 32]>,
    /// Sender signature.
    pub signature: Vec<u8>,
    /// Transaction hash.
    pub hash: [u8; 32],
    /// Resolved caller expiry, unix seconds.
    pub expiry: Option<u64>,
}

/// A sponsorship request wrapping a decoded transaction.
#[derive(Debug, Clone)]
pub struct SponsorRequest {
    /// The sponsored transaction.
    pub tx: SubmitTxRequest,
    /// Sponsoring account.
    pub sponsor: Address,
    /// Sponsor signature over the transaction hash.
    pub sponsor_signature: Vec<u8>,
}

/// A decoded voucher submission.
#[derive(Debug, Clone)]
pub struct VoucherRequest {
    /// Provider identifier.
    pub provider: String,
    /// Provider-side transaction id.
    pub provider_tx_id: String,
    /// Recipient account.
    pub recipient: Address,
    /// Minted token.
    pub token: TokenSymbol,
    /// Minted amount.
    pub amount: BigUint,
    /// ISO-4217 fiat currency.
    pub fiat_currency: String,
    /// Fiat amount, decimal string as submitted.
    pub fiat_amount: String,
    /// Provider signature.
    pub signature: Vec<u8>,
}

/// Mint caps applied to one token.
#[derive(Debug, Clone)]
pub struct SwapCaps {
    /// Maximum minted per rolling day.
    pub daily_cap: BigUint,
    /// Maximum minted per voucher.
    pub per_tx_cap: BigUint,
}

/// A decoded escrow creation.
#[derive(Debug, Clone)]
pub struct EscrowCreateRequest {
    /// Funding account.
    pub payer: Address,
    /// Receiving account.
    pub payee: Address,
    /// Escrowed token.
    pub token: TokenSymbol,
    /// Escrowed amount.
    pub amount: BigUint,
    /// Mediator fee in basis points.
    pub fee_bps: u32,
    /// Funding deadline, unix seconds.
    pub deadline: u64,
    /// Optional mediator account.
    pub mediator: Option<Address>,
    /// Optional 32-byte metadata.
    pub meta: Option<[u8; 32]>,
    /// Optional arbitration realm.
    pub realm: Option<String>,
}

/// Arbitration outcome for escrow and trade resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Funds go to the payee side.
    Release,
    /// Funds return to the payer side.
    Refund,
}

/// A decoded claimable creation. The recipient hint is already the
/// 32-byte identifier, alias hashing included.
#[derive(Debug, Clone)]
pub struct ClaimableCreateRequest {
    /// Funding account.
    pub payer: Address,
    /// Locked token.
    pub token: TokenSymbol,
    /// Locked amount.
    pub amount: BigUint,
    /// Claim deadline, unix seconds.
    pub deadline: u64,
    /// Recipient hint the funds are locked to.
    pub recipient_hint: [u8; 32],
}

/// A decoded program creation.
#[derive(Debug, Clone)]
pub struct ProgramRequest {
    /// Owning business.
    pub business_id: [u8; 32],
    /// Display name.
    pub name: String,
    /// Reward token.
    pub token: TokenSymbol,
    /// Accrual rate in basis points of spend.
    pub accrual_bps: u32,
    /// Optional daily accrual cap.
    pub cap_per_day: Option<BigUint>,
}

/// A decoded trade creation.
#[derive(Debug, Clone)]
pub struct TradeCreateRequest {
    /// Buyer account.
    pub buyer: Address,
    /// Seller account.
    pub seller: Address,
    /// Token the seller deposits.
    pub base_token: TokenSymbol,
    /// Seller deposit amount.
    pub base_amount: BigUint,
    /// Token the buyer deposits.
    pub quote_token: TokenSymbol,
    /// Buyer deposit amount.
    pub quote_amount: BigUint,
    /// Funding deadline, unix seconds.
    pub deadline: u64,
    /// Accepted settlement slippage in basis points.
    pub slippage_bps: Option<u32>,
}

/// Trade state as held by the node. The gateway shapes the wire detail
/// (pay intents included) from this.
#[derive(Debug, Clone)]
pub struct TradeState {
    /// Trade identifier.
    pub trade_id: Uuid,
    /// Lifecycle state.
    pub status: TradeStatus,
    /// Buyer account.
    pub buyer: Address,
    /// Seller account.
    pub seller: Address,
    /// Token the seller deposits.
    pub base_token: TokenSymbol,
    /// Seller deposit amount.
    pub base_amount: BigUint,
    /// Token the buyer deposits.
    pub quote_token: TokenSymbol,
    /// Buyer deposit amount.
    pub quote_amount: BigUint,
    /// Funding deadline, unix seconds.
    pub deadline: u64,
    /// Accepted settlement slippage in basis points.
    pub slippage_bps: Option<u32>,
    /// Vault the seller deposit pays into.
    pub base_vault: Address,
    /// Vault the buyer deposit pays into.
    pub quote_vault: Address,
}

/// A decoded skill attestation.
#[derive(Debug, Clone)]
pub struct AttestationRequest {
    /// Attested account.
    pub subject: Address,
    /// Skill tag.
    pub skill: String,
    /// Issuing account.
    pub issuer: Address,
    /// Issue time, unix seconds.
    pub issued_at: u64,
    /// Issuer signature.
    pub signature: Vec<u8>,
}

/// Finality state as reported by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeFinality {
    /// Observed but not final.
    Pending,
    /// Irreversibly included.
    Finalized,
    /// Anything the node added after this gateway was built.
    Unknown,
}

/// One finality event from the node's retained history or live feed.
#[derive(Debug, Clone)]
pub struct FinalityEvent {
    /// Opaque resume position.
    pub cursor: String,
    /// Settled payment intent, when any.
    pub intent_ref: Option<[u8; 32]>,
    /// Transaction hash.
    pub tx_hash: [u8; 32],
    /// Finality state.
    pub status: NodeFinality,
    /// Enclosing block hash, when known.
    pub block: Option<[u8; 32]>,
    /// Enclosing block height.
    pub height: u64,
    /// Node-side timestamp, unix seconds.
    pub ts: u64,
}

/// An open finality subscription.
///
/// The backlog is built atomically with the live channel: replaying the
/// backlog first and then draining the channel never drops or reorders
/// an update.
pub struct FinalitySubscription {
    /// Retained history at or after the requested cursor.
    pub backlog: Vec<FinalityEvent>,
    /// Live updates.
    pub updates: mpsc::Receiver<FinalityEvent>,
    /// Cancel handle; dropped or cancelled when the stream ends.
    pub cancel: CancellationToken,
}

/// Account, block and epoch reads.
#[async_trait]
pub trait AccountsNode {
    /// Returns the account summary for `address`.
    async fn balance(&self, address: Address) -> NodeResult<AccountBalance>;
    /// Returns the `count` most recent blocks, newest first.
    async fn latest_blocks(&self, count: u32) -> NodeResult<Vec<BlockSummary>>;
    /// Returns a sealed epoch, or the running epoch when `None`.
    async fn epoch_summary(&self, epoch: Option<u64>) -> NodeResult<EpochSummary>;
}

/// Transaction submission and sponsorship.
#[async_trait]
pub trait TxNode {
    /// Hands a transaction to the mempool.
    async fn submit(&self, tx: SubmitTxRequest) -> NodeResult<()>;
    /// Registers a sponsorship for a transaction.
    async fn sponsor(&self, request: SponsorRequest) -> NodeResult<SponsorshipStatus>;
    /// Returns the sponsorship state of a transaction.
    async fn sponsorship_status(&self, hash: [u8; 32]) -> NodeResult<SponsorshipStatus>;
}

/// Fiat on-ramp voucher lifecycle.
#[async_trait]
pub trait SwapNode {
    /// Submits a provider voucher for minting.
    async fn submit_voucher(&self, voucher: VoucherRequest) -> NodeResult<VoucherRecord>;
    /// Returns a voucher by provider transaction id.
    async fn voucher_status(&self, provider_tx_id: String) -> NodeResult<VoucherRecord>;
    /// Replaces the mint caps for one token.
    async fn set_limits(&self, token: TokenSymbol, caps: SwapCaps) -> NodeResult<()>;
    /// Returns the health of one provider.
    async fn provider_status(&self, provider: String) -> NodeResult<ProviderStatus>;
    /// Reverses a previously minted voucher.
    async fn reverse_voucher(&self, provider_tx_id: String) -> NodeResult<VoucherRecord>;
}

/// Delegated staking.
#[async_trait]
pub trait StakeNode {
    /// Delegates `amount` from `delegator` to `validator`.
    async fn delegate(
        &self,
        delegator: Address,
        validator: Address,
        amount: BigUint,
    ) -> NodeResult<StakeReceipt>;
    /// Starts unbonding `amount`.
    async fn undelegate(
        &self,
        delegator: Address,
        validator: Address,
        amount: BigUint,
    ) -> NodeResult<StakeReceipt>;
    /// Pays out accrued rewards.
    async fn claim_rewards(&self, delegator: Address) -> NodeResult<RewardClaim>;
    /// Previews the next reward claim without mutating state.
    async fn preview_claim(&self, delegator: Address) -> NodeResult<RewardClaim>;
}

/// Proof-of-time-spent-online meters, locks and evidence.
#[async_trait]
pub trait PotsoNode {
    /// Credits a heartbeat at `timestamp`.
    async fn heartbeat(&self, address: Address, timestamp: u64) -> NodeResult<HeartbeatReceipt>;
    /// Returns the meters of one day, default today.
    async fn meters(&self, address: Address, day: Option<String>) -> NodeResult<Meters>;
    /// Returns the leaderboard of one day, default today.
    async fn leaderboard(
        &self,
        day: Option<String>,
        limit: u32,
    ) -> NodeResult<Vec<LeaderboardEntry>>;
    /// Locks `amount` into the participation bond.
    async fn stake_lock(&self, address: Address, amount: BigUint) -> NodeResult<LockReceipt>;
    /// Starts unbonding `amount` of the participation bond.
    async fn stake_unlock(&self, address: Address, amount: BigUint) -> NodeResult<LockReceipt>;
    /// Submits offence evidence.
    async fn submit_evidence(
        &self,
        kind: String,
        offender: Address,
        height: u64,
        details: Option<String>,
    ) -> NodeResult<EvidenceReceipt>;
}

/// Escrow lifecycle.
#[async_trait]
pub trait EscrowNode {
    /// Creates an escrow.
    async fn create(&self, request: EscrowCreateRequest) -> NodeResult<EscrowSnapshot>;
    /// Returns an escrow by id.
    async fn get(&self, id: [u8; 32]) -> NodeResult<EscrowSnapshot>;
    /// Marks the payer deposit received.
    async fn fund(&self, id: [u8; 32], caller: Address) -> NodeResult<EscrowSnapshot>;
    /// Releases the funds to the payee.
    async fn release(&self, id: [u8; 32], caller: Address) -> NodeResult<EscrowSnapshot>;
    /// Returns the funds to the payer.
    async fn refund(&self, id: [u8; 32], caller: Address) -> NodeResult<EscrowSnapshot>;
    /// Freezes the escrow pending arbitration.
    async fn dispute(&self, id: [u8; 32], caller: Address) -> NodeResult<EscrowSnapshot>;
    /// Arbitrates a disputed escrow.
    async fn resolve(
        &self,
        id: [u8; 32],
        caller: Address,
        outcome: ResolutionOutcome,
    ) -> NodeResult<EscrowSnapshot>;
    /// Updates one milestone leg.
    async fn milestone_update(
        &self,
        id: [u8; 32],
        caller: Address,
        leg: u32,
        status: String,
    ) -> NodeResult<EscrowSnapshot>;
}

/// Hash-locked claimable transfers.
#[async_trait]
pub trait ClaimableNode {
    /// Locks funds to a recipient hint.
    async fn create(&self, request: ClaimableCreateRequest) -> NodeResult<ClaimableRecord>;
    /// Claims locked funds. The node authorises `payee` against the
    /// recipient hint.
    async fn claim(
        &self,
        id: [u8; 32],
        payee: Address,
        preimage: Option<Vec<u8>>,
    ) -> NodeResult<ClaimableRecord>;
    /// Cancels an unclaimed transfer; only the payer may cancel.
    async fn cancel(&self, id: [u8; 32], caller: Address) -> NodeResult<ClaimableRecord>;
    /// Returns a claimable by id.
    async fn get(&self, id: [u8; 32]) -> NodeResult<ClaimableRecord>;
}

/// Aliases and avatars.
#[async_trait]
pub trait IdentityNode {
    /// Claims `alias` (already normalised) for `address`.
    async fn set_alias(&self, address: Address, alias: String) -> NodeResult<IdentityRecord>;
    /// Sets the avatar reference of `address`.
    async fn set_avatar(&self, address: Address, avatar_ref: String)
    -> NodeResult<IdentityRecord>;
    /// Resolves a normalised alias to its record.
    async fn resolve(&self, alias: String) -> NodeResult<IdentityRecord>;
    /// Returns the alias record owned by `address`.
    async fn reverse(&self, address: Address) -> NodeResult<IdentityRecord>;
}

/// Lending pools.
#[async_trait]
pub trait LendingNode {
    /// Lists all pools.
    async fn pools(&self) -> NodeResult<Vec<PoolInfo>>;
    /// Supplies `amount` into a pool.
    async fn supply(&self, account: Address, pool_id: String, amount: BigUint)
    -> NodeResult<Position>;
    /// Withdraws supplied funds.
    async fn withdraw(
        &self,
        account: Address,
        pool_id: String,
        amount: BigUint,
    ) -> NodeResult<Position>;
    /// Borrows against collateral.
    async fn borrow(&self, account: Address, pool_id: String, amount: BigUint)
    -> NodeResult<Position>;
    /// Repays borrowed funds.
    async fn repay(&self, account: Address, pool_id: String, amount: BigUint)
    -> NodeResult<Position>;
    /// Liquidates an underwater position.
    async fn liquidate(
        &self,
        liquidator: Address,
        borrower: Address,
        pool_id: String,
    ) -> NodeResult<Position>;
}

/// Loyalty businesses and programs.
#[async_trait]
pub trait LoyaltyNode {
    /// Registers a business.
    async fn create_business(&self, owner: Address, name: String) -> NodeResult<BusinessRecord>;
    /// Creates a program under a business.
    async fn create_program(&self, request: ProgramRequest) -> NodeResult<ProgramRecord>;
    /// Adds a merchant to a business.
    async fn add_merchant(&self, business_id: [u8; 32], merchant: Address)
    -> NodeResult<BusinessRecord>;
    /// Returns a program by id.
    async fn program_info(&self, program_id: [u8; 32]) -> NodeResult<ProgramRecord>;
}

/// Creator economy.
#[async_trait]
pub trait CreatorNode {
    /// Publishes content.
    async fn publish(&self, creator: Address, content_ref: String) -> NodeResult<ContentRecord>;
    /// Tips published content.
    async fn tip(&self, fan: Address, content_id: [u8; 32], amount: BigUint)
    -> NodeResult<ContentRecord>;
    /// Stakes on a creator.
    async fn stake(&self, fan: Address, creator: Address, amount: BigUint)
    -> NodeResult<StakeTotal>;
    /// Withdraws stake from a creator.
    async fn unstake(&self, fan: Address, creator: Address, amount: BigUint)
    -> NodeResult<StakeTotal>;
    /// Returns the payout history of a creator.
    async fn payouts(&self, creator: Address) -> NodeResult<Vec<PayoutRow>>;
}

/// Ballot choice for governance votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChoice {
    /// In favour.
    Yes,
    /// Against.
    No,
    /// Present, no preference.
    Abstain,
}

/// Governance proposals.
#[async_trait]
pub trait GovNode {
    /// Submits a proposal.
    async fn propose(&self, proposer: Address, kind: String, payload: Value)
    -> NodeResult<ProposalRecord>;
    /// Casts a vote.
    async fn vote(
        &self,
        voter: Address,
        proposal_id: u64,
        choice: VoteChoice,
    ) -> NodeResult<ProposalRecord>;
    /// Returns a proposal by id.
    async fn proposal(&self, proposal_id: u64) -> NodeResult<ProposalRecord>;
    /// Lists proposals after `after_id`, up to `limit`.
    async fn list(&self, after_id: Option<u64>, limit: u32) -> NodeResult<Vec<ProposalRecord>>;
    /// Tallies a proposal whose voting window has closed.
    async fn finalize(&self, proposal_id: u64) -> NodeResult<ProposalRecord>;
    /// Queues a passed proposal into the timelock.
    async fn queue(&self, proposal_id: u64) -> NodeResult<ProposalRecord>;
    /// Executes a queued proposal.
    async fn execute(&self, proposal_id: u64) -> NodeResult<ProposalRecord>;
}

/// P2P trading.
#[async_trait]
pub trait TradeNode {
    /// Creates a trade and allocates its escrow vaults.
    async fn create(&self, request: TradeCreateRequest) -> NodeResult<TradeState>;
    /// Returns a trade by id.
    async fn get(&self, trade_id: Uuid) -> NodeResult<TradeState>;
    /// Settles a fully funded trade.
    async fn settle(&self, trade_id: Uuid) -> NodeResult<TradeState>;
    /// Freezes a trade pending arbitration.
    async fn dispute(&self, trade_id: Uuid, caller: Address) -> NodeResult<TradeState>;
    /// Arbitrates a disputed trade.
    async fn resolve(
        &self,
        trade_id: Uuid,
        caller: Address,
        outcome: ResolutionOutcome,
    ) -> NodeResult<TradeState>;
}

/// Peer management.
#[async_trait]
pub trait NetNode {
    /// Returns the local node's network identity.
    async fn info(&self) -> NodeResult<NetInfo>;
    /// Lists connected peers.
    async fn peers(&self) -> NodeResult<Vec<PeerInfo>>;
    /// Bans a peer, for `seconds` or the node default.
    async fn ban(&self, node_id: String, seconds: Option<u64>) -> NodeResult<PeerInfo>;
    /// Lifts a ban.
    async fn unban(&self, node_id: String) -> NodeResult<PeerInfo>;
}

/// Snapshot import/export.
#[async_trait]
pub trait SyncNode {
    /// Returns the sync state.
    async fn status(&self) -> NodeResult<SyncStatus>;
    /// Exports a snapshot at `height`, default the latest sealed one.
    async fn export_snapshot(&self, height: Option<u64>) -> NodeResult<SnapshotExport>;
    /// Imports a snapshot after verifying its checksum.
    async fn import_snapshot(&self, source: String, checksum: [u8; 32]) -> NodeResult<SyncStatus>;
}

/// Skill attestations.
#[async_trait]
pub trait ReputationNode {
    /// Verifies and records a skill attestation.
    async fn verify_skill(&self, attestation: AttestationRequest) -> NodeResult<VerifySkillResult>;
}

/// Finality subscriptions.
#[async_trait]
pub trait FinalityNode {
    /// Opens a subscription, optionally resuming at `cursor`.
    async fn subscribe(&self, cursor: Option<String>) -> NodeResult<FinalitySubscription>;
}

/// Dynamic trait object aliases for the node services.
pub type AccountsService = Arc<dyn AccountsNode + Send + Sync>;
/// See [`TxNode`].
pub type TxService = Arc<dyn TxNode + Send + Sync>;
/// See [`SwapNode`].
pub type SwapService = Arc<dyn SwapNode + Send + Sync>;
/// See [`StakeNode`].
pub type StakeService = Arc<dyn StakeNode + Send + Sync>;
/// See [`PotsoNode`].
pub type PotsoService = Arc<dyn PotsoNode + Send + Sync>;
/// See [`EscrowNode`].
pub type EscrowService = Arc<dyn EscrowNode + Send + Sync>;
/// See [`ClaimableNode`].
pub type ClaimableService = Arc<dyn ClaimableNode + Send + Sync>;
/// See [`IdentityNode`].
pub type IdentityService = Arc<dyn IdentityNode + Send + Sync>;
/// See [`LendingNode`].
pub type LendingService = Arc<dyn LendingNode + Send + Sync>;
/// See [`LoyaltyNode`].
pub type LoyaltyService = Arc<dyn LoyaltyNode + Send + Sync>;
/// See [`CreatorNode`].
pub type CreatorService = Arc<dyn CreatorNode + Send + Sync>;
/// See [`GovNode`].
pub type GovService = Arc<dyn GovNode + Send + Sync>;
/// See [`TradeNode`].
pub type TradeService = Arc<dyn TradeNode + Send + Sync>;
/// See [`NetNode`].
pub type NetService = Arc<dyn NetNode + Send + Sync>;
/// See [`SyncNode`].
pub type SyncService = Arc<dyn SyncNode + Send + Sync>;
/// See [`ReputationNode`].
pub type ReputationService = Arc<dyn ReputationNode + Send + Sync>;
/// See [`FinalityNode`].
pub type FinalityService = Arc<dyn FinalityNode + Send + Sync>;

/// The full set of node services the gateway dispatches into.
#[derive(Clone)]
pub struct NodeServices {
    /// Account, block and epoch reads.
    pub accounts: AccountsService,
    /// Transaction submission and sponsorship.
    pub tx: TxService,
    /// Voucher lifecycle.
    pub swap: SwapService,
    /// Delegated staking.
    pub stake: StakeService,
    /// Participation meters and locks.
    pub potso: PotsoService,
    /// Escrow lifecycle.
    pub escrow: EscrowService,
    /// Claimable transfers.
    pub claimable: ClaimableService,
    /// Aliases and avatars.
    pub identity: IdentityService,
    /// Lending pools.
    pub lending: LendingService,
    /// Loyalty businesses and programs.
    pub loyalty: LoyaltyService,
    /// Creator economy.
    pub creator: CreatorService,
    /// Governance.
    pub gov: GovService,
    /// P2P trading.
    pub trade: TradeService,
    /// Peer management.
    pub net: NetService,
    /// Snapshot sync.
    pub sync: SyncService,
    /// Skill attestations.
    pub reputation: ReputationService,
    /// Finality subscriptions.
    pub finality: FinalityService,
}
