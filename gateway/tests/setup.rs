use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use axum_test::TestServer;
use gateway_types::dto::accounts::{AccountBalance, BlockSummary, EpochSummary};
use gateway_types::dto::claimable::{ClaimableRecord, ClaimableStatus};
use gateway_types::dto::creator::{ContentRecord, PayoutRow, StakeTotal};
use gateway_types::dto::escrow::{EscrowSnapshot, EscrowStatus, RealmPolicy};
use gateway_types::dto::gov::{ProposalRecord, ProposalStatus};
use gateway_types::dto::identity::IdentityRecord;
use gateway_types::dto::lending::{PoolInfo, Position};
use gateway_types::dto::loyalty::{BusinessRecord, ProgramRecord};
use gateway_types::dto::net::{NetInfo, PeerInfo};
use gateway_types::dto::potso::{
    EvidenceReceipt, HeartbeatReceipt, LeaderboardEntry, LockReceipt, Meters,
};
use gateway_types::dto::reputation::VerifySkillResult;
use gateway_types::dto::stake::{RewardClaim, StakeReceipt};
use gateway_types::dto::swap::{ProviderStatus, VoucherRecord, VoucherStatus};
use gateway_types::dto::sync::{SnapshotExport, SyncStatus};
use gateway_types::dto::trade::TradeStatus;
use gateway_types::dto::tx::SponsorshipStatus;
use gateway_types::{Address, TokenSymbol};
use nhb_gateway::services::node::{
    AccountsNode, AttestationRequest, ClaimableCreateRequest, ClaimableNode, CreatorNode,
    EscrowCreateRequest, EscrowNode, FinalityEvent, FinalityNode, FinalitySubscription, GovNode,
    IdentityNode, LendingNode, LoyaltyNode, NetNode, NodeError, NodeResult, NodeServices,
    PotsoNode, ProgramRequest, ReputationNode, ResolutionOutcome, SponsorRequest, StakeNode,
    SubmitTxRequest, SwapCaps, SwapNode, SyncNode, TradeCreateRequest, TradeNode, TradeState,
    TxNode, VoteChoice, VoucherRequest,
};
use nhb_gateway::{GatewayBuilder, GatewayConfig};
use num_bigint::BigUint;
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub fn addr(seed: u8) -> Address {
    Address::from_bytes([seed; 20])
}

pub fn addr_str(seed: u8) -> String {
    addr(seed).to_string()
}

pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        trust_proxy_headers: false,
        trusted_proxies: Vec::new(),
        allowed_client_cidrs: Vec::new(),
        read_header_timeout: std::time::Duration::from_secs(5),
        read_timeout: std::time::Duration::from_secs(15),
        write_timeout: std::time::Duration::from_secs(15),
        idle_timeout: std::time::Duration::from_secs(60),
        tls_cert_file: None,
        tls_key_file: None,
        rate_limit_window: std::time::Duration::from_secs(60),
        rate_limit_max: 100,
        tx_seen_ttl: std::time::Duration::from_secs(900),
        caller_ttl_limit: None,
        auth_token: None,
    }
}

/// In-memory stand-in for the node services, just deep enough for the
/// gateway behaviours under test.
#[derive(Default)]
pub struct StubNode {
    pub mempool_full: AtomicBool,
    counter: AtomicU64,
    pub escrows: Mutex<HashMap<String, EscrowSnapshot>>,
    pub claimables: Mutex<HashMap<String, ClaimableRecord>>,
    /// alias-id hex → (alias, owner)
    pub aliases: Mutex<HashMap<String, (String, Address)>>,
    pub trades: Mutex<HashMap<Uuid, TradeState>>,
    pub vouchers: Mutex<HashMap<String, VoucherRecord>>,
    pub finality_backlog: Mutex<Vec<FinalityEvent>>,
    pub finality_sender: Mutex<Option<mpsc::Sender<FinalityEvent>>>,
    pub finality_cancel: Mutex<Option<CancellationToken>>,
}

impl StubNode {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{n:064x}")
    }
}

pub async fn spawn_gateway(config: GatewayConfig, stub: Arc<StubNode>) -> TestServer {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let node = NodeServices {
        accounts: stub.clone(),
        tx: stub.clone(),
        swap: stub.clone(),
        stake: stub.clone(),
        potso: stub.clone(),
        escrow: stub.clone(),
        claimable: stub.clone(),
        identity: stub.clone(),
        lending: stub.clone(),
        loyalty: stub.clone(),
        creator: stub.clone(),
        gov: stub.clone(),
        trade: stub.clone(),
        net: stub.clone(),
        sync: stub.clone(),
        reputation: stub.clone(),
        finality: stub,
    };
    let gateway = GatewayBuilder::new(config, node)
        .build()
        .expect("Can build gateway");
    TestServer::builder()
        .http_transport()
        .build(gateway.router())
        .expect("Can build test-server")
}

pub fn rpc(method: &str, params: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": 1, "method": method, "params": params })
}

#[async_trait]
impl AccountsNode for StubNode {
    async fn balance(&self, address: Address) -> NodeResult<AccountBalance> {
        Ok(AccountBalance {
            address,
            balance_nhb: "1000".to_owned(),
            balance_znhb: "250".to_owned(),
            stake: "100".to_owned(),
            nonce: 7,
            engagement_score: 42,
        })
    }

    async fn latest_blocks(&self, count: u32) -> NodeResult<Vec<BlockSummary>> {
        Ok((0..count.min(3))
            .map(|i| BlockSummary {
                height: 100 - u64::from(i),
                hash: format!("0x{:064x}", 100 - i),
                tx_count: 2,
                timestamp: 1_700_000_000,
            })
            .collect())
    }

    async fn epoch_summary(&self, epoch: Option<u64>) -> NodeResult<EpochSummary> {
        Ok(EpochSummary {
            epoch: epoch.unwrap_or(9),
            height: 900,
            total_weight: "123456".to_owned(),
            active_validators: 21,
            finalized: epoch.is_some(),
        })
    }
}

#[async_trait]
impl TxNode for StubNode {
    async fn submit(&self, _tx: SubmitTxRequest) -> NodeResult<()> {
        if self.mempool_full.load(Ordering::SeqCst) {
            return Err(NodeError::MempoolFull);
        }
        Ok(())
    }

    async fn sponsor(&self, request: SponsorRequest) -> NodeResult<SponsorshipStatus> {
        Ok(SponsorshipStatus {
            hash: hex::encode(request.tx.hash),
            status: "pending".to_owned(),
            sponsor: Some(request.sponsor),
        })
    }

    async fn sponsorship_status(&self, hash: [u8; 32]) -> NodeResult<SponsorshipStatus> {
        Ok(SponsorshipStatus {
            hash: hex::encode(hash),
            status: "none".to_owned(),
            sponsor: None,
        })
    }
}

#[async_trait]
impl SwapNode for StubNode {
    async fn submit_voucher(&self, voucher: VoucherRequest) -> NodeResult<VoucherRecord> {
        let record = VoucherRecord {
            provider_tx_id: voucher.provider_tx_id.clone(),
            recipient: voucher.recipient,
            token: voucher.token,
            amount: voucher.amount.to_string(),
            status: VoucherStatus::Pending,
            submitted_at: 1_700_000_000,
        };
        self.vouchers
            .lock()
            .insert(voucher.provider_tx_id, record.clone());
        Ok(record)
    }

    async fn voucher_status(&self, provider_tx_id: String) -> NodeResult<VoucherRecord> {
        // legacy path on purpose: reports a plain string
        self.vouchers
            .lock()
            .get(&provider_tx_id)
            .cloned()
            .ok_or_else(|| NodeError::Other("voucher not found".to_owned()))
    }

    async fn set_limits(&self, _token: TokenSymbol, _caps: SwapCaps) -> NodeResult<()> {
        Ok(())
    }

    async fn provider_status(&self, provider: String) -> NodeResult<ProviderStatus> {
        Ok(ProviderStatus {
            provider,
            healthy: true,
            last_oracle_ts: 1_700_000_000,
        })
    }

    async fn reverse_voucher(&self, provider_tx_id: String) -> NodeResult<VoucherRecord> {
        let mut vouchers = self.vouchers.lock();
        let record = vouchers
            .get_mut(&provider_tx_id)
            .ok_or(NodeError::NotFound)?;
        record.status = VoucherStatus::Reversed;
        Ok(record.clone())
    }
}

#[async_trait]
impl StakeNode for StubNode {
    async fn delegate(
        &self,
        delegator: Address,
        validator: Address,
        amount: BigUint,
    ) -> NodeResult<StakeReceipt> {
        Ok(StakeReceipt {
            delegator,
            validator,
            amount: amount.to_string(),
            shares: amount.to_string(),
        })
    }

    async fn undelegate(
        &self,
        delegator: Address,
        validator: Address,
        amount: BigUint,
    ) -> NodeResult<StakeReceipt> {
        Ok(StakeReceipt {
            delegator,
            validator,
            amount: amount.to_string(),
            shares: "0".to_owned(),
        })
    }

    async fn claim_rewards(&self, delegator: Address) -> NodeResult<RewardClaim> {
        Ok(RewardClaim {
            delegator,
            amount: "5".to_owned(),
            payout_at: 0,
        })
    }

    async fn preview_claim(&self, delegator: Address) -> NodeResult<RewardClaim> {
        Ok(RewardClaim {
            delegator,
            amount: "5".to_owned(),
            payout_at: 1_700_000_500,
        })
    }
}

#[async_trait]
impl PotsoNode for StubNode {
    async fn heartbeat(&self, address: Address, _timestamp: u64) -> NodeResult<HeartbeatReceipt> {
        Ok(HeartbeatReceipt {
            address,
            day: "2026-08-01".to_owned(),
            uptime_seconds: 60,
        })
    }

    async fn meters(&self, address: Address, day: Option<String>) -> NodeResult<Meters> {
        Ok(Meters {
            address,
            day: day.unwrap_or_else(|| "2026-08-01".to_owned()),
            uptime_seconds: 3600,
            engagement: 12,
            tx_count: 4,
        })
    }

    async fn leaderboard(
        &self,
        _day: Option<String>,
        limit: u32,
    ) -> NodeResult<Vec<LeaderboardEntry>> {
        Ok((0..limit.min(2))
            .map(|i| LeaderboardEntry {
                address: addr(i as u8 + 1),
                weight: "100".to_owned(),
                rank: i + 1,
            })
            .collect())
    }

    async fn stake_lock(&self, address: Address, amount: BigUint) -> NodeResult<LockReceipt> {
        Ok(LockReceipt {
            address,
            locked: amount.to_string(),
            unlock_at: 0,
        })
    }

    async fn stake_unlock(&self, address: Address, _amount: BigUint) -> NodeResult<LockReceipt> {
        Ok(LockReceipt {
            address,
            locked: "0".to_owned(),
            unlock_at: 1_700_700_000,
        })
    }

    async fn submit_evidence(
        &self,
        _kind: String,
        _offender: Address,
        _height: u64,
        _details: Option<String>,
    ) -> NodeResult<EvidenceReceipt> {
        Ok(EvidenceReceipt {
            id: self.next_id(),
            accepted: true,
        })
    }
}

#[async_trait]
impl EscrowNode for StubNode {
    async fn create(&self, request: EscrowCreateRequest) -> NodeResult<EscrowSnapshot> {
        let id = self.next_id();
        let snapshot = EscrowSnapshot {
            id: id.clone(),
            payer: request.payer,
            payee: request.payee,
            token: request.token,
            amount: request.amount.to_string(),
            fee_bps: request.fee_bps,
            deadline: request.deadline,
            status: EscrowStatus::Init,
            mediator: request.mediator,
            meta: request.meta.map(|bytes| format!("0x{}", hex::encode(bytes))),
            realm: request.realm.map(|id| RealmPolicy {
                id,
                arbitrator_scheme: "committee".to_owned(),
                frozen_at: 1_700_000_000,
            }),
            milestones: Vec::new(),
        };
        self.escrows.lock().insert(id, snapshot.clone());
        Ok(snapshot)
    }

    async fn get(&self, id: [u8; 32]) -> NodeResult<EscrowSnapshot> {
        self.escrows
            .lock()
            .get(&hex::encode(id))
            .cloned()
            .ok_or(NodeError::NotFound)
    }

    async fn fund(&self, id: [u8; 32], caller: Address) -> NodeResult<EscrowSnapshot> {
        let mut escrows = self.escrows.lock();
        let snapshot = escrows
            .get_mut(&hex::encode(id))
            .ok_or(NodeError::NotFound)?;
        if caller != snapshot.payer {
            return Err(NodeError::Forbidden);
        }
        snapshot.status = EscrowStatus::Funded;
        Ok(snapshot.clone())
    }

    async fn release(&self, id: [u8; 32], caller: Address) -> NodeResult<EscrowSnapshot> {
        let mut escrows = self.escrows.lock();
        let snapshot = escrows
            .get_mut(&hex::encode(id))
            .ok_or(NodeError::NotFound)?;
        if caller != snapshot.payer {
            return Err(NodeError::Forbidden);
        }
        if snapshot.status != EscrowStatus::Funded {
            return Err(NodeError::Conflict("escrow is not funded".to_owned()));
        }
        snapshot.status = EscrowStatus::Released;
        Ok(snapshot.clone())
    }

    async fn refund(&self, id: [u8; 32], caller: Address) -> NodeResult<EscrowSnapshot> {
        let mut escrows = self.escrows.lock();
        let snapshot = escrows
            .get_mut(&hex::encode(id))
            .ok_or(NodeError::NotFound)?;
        if caller != snapshot.payee {
            return Err(NodeError::Forbidden);
        }
        snapshot.status = EscrowStatus::Refunded;
        Ok(snapshot.clone())
    }

    async fn dispute(&self, id: [u8; 32], _caller: Address) -> NodeResult<EscrowSnapshot> {
        let mut escrows = self.escrows.lock();
        let snapshot = escrows
            .get_mut(&hex::encode(id))
            .ok_or(NodeError::NotFound)?;
        snapshot.status = EscrowStatus::Disputed;
        Ok(snapshot.clone())
    }

    async fn resolve(
        &self,
        id: [u8; 32],
        _caller: Address,
        _outcome: ResolutionOutcome,
    ) -> NodeResult<EscrowSnapshot> {
        let mut escrows = self.escrows.lock();
        let snapshot = escrows
            .get_mut(&hex::encode(id))
            .ok_or(NodeError::NotFound)?;
        snapshot.status = EscrowStatus::Resolved;
        Ok(snapshot.clone())
    }

    async fn milestone_update(
        &self,
        id: [u8; 32],
        _caller: Address,
        _leg: u32,
        _status: String,
    ) -> NodeResult<EscrowSnapshot> {
        self.escrows
            .lock()
            .get(&hex::encode(id))
            .cloned()
            .ok_or(NodeError::NotFound)
    }
}

#[async_trait]
impl ClaimableNode for StubNode {
    async fn create(&self, request: ClaimableCreateRequest) -> NodeResult<ClaimableRecord> {
        let id = self.next_id();
        let record = ClaimableRecord {
            id: id.clone(),
            payer: request.payer,
            token: request.token,
            amount: request.amount.to_string(),
            recipient_hint: hex::encode(request.recipient_hint),
            deadline: request.deadline,
            status: ClaimableStatus::Pending,
        };
        self.claimables.lock().insert(id, record.clone());
        Ok(record)
    }

    async fn claim(
        &self,
        id: [u8; 32],
        payee: Address,
        _preimage: Option<Vec<u8>>,
    ) -> NodeResult<ClaimableRecord> {
        let mut claimables = self.claimables.lock();
        let record = claimables
            .get_mut(&hex::encode(id))
            .ok_or(NodeError::NotFound)?;
        if let Some((_, owner)) = self.aliases.lock().get(&record.recipient_hint)
            && *owner != payee
        {
            return Err(NodeError::Forbidden);
        }
        record.status = ClaimableStatus::Claimed;
        Ok(record.clone())
    }

    async fn cancel(&self, id: [u8; 32], caller: Address) -> NodeResult<ClaimableRecord> {
        let mut claimables = self.claimables.lock();
        let record = claimables
            .get_mut(&hex::encode(id))
            .ok_or(NodeError::NotFound)?;
        if record.payer != caller {
            return Err(NodeError::Forbidden);
        }
        record.status = ClaimableStatus::Cancelled;
        Ok(record.clone())
    }

    async fn get(&self, id: [u8; 32]) -> NodeResult<ClaimableRecord> {
        self.claimables
            .lock()
            .get(&hex::encode(id))
            .cloned()
            .ok_or(NodeError::NotFound)
    }
}

#[async_trait]
impl IdentityNode for StubNode {
    async fn set_alias(&self, address: Address, alias: String) -> NodeResult<IdentityRecord> {
        let alias_id = hex::encode(nhb_gateway::codec::alias_id(&alias));
        self.aliases
            .lock()
            .insert(alias_id.clone(), (alias.clone(), address));
        Ok(IdentityRecord {
            alias,
            alias_id,
            address,
            avatar_ref: None,
        })
    }

    async fn set_avatar(
        &self,
        address: Address,
        avatar_ref: String,
    ) -> NodeResult<IdentityRecord> {
        let aliases = self.aliases.lock();
        let (alias_id, (alias, _)) = aliases
            .iter()
            .find(|(_, (_, owner))| *owner == address)
            .ok_or(NodeError::NotFound)?;
        Ok(IdentityRecord {
            alias: alias.clone(),
            alias_id: alias_id.clone(),
            address,
            avatar_ref: Some(avatar_ref),
        })
    }

    async fn resolve(&self, alias: String) -> NodeResult<IdentityRecord> {
        let alias_id = hex::encode(nhb_gateway::codec::alias_id(&alias));
        let aliases = self.aliases.lock();
        let (_, owner) = aliases.get(&alias_id).ok_or(NodeError::NotFound)?;
        Ok(IdentityRecord {
            alias,
            alias_id,
            address: *owner,
            avatar_ref: None,
        })
    }

    async fn reverse(&self, address: Address) -> NodeResult<IdentityRecord> {
        let aliases = self.aliases.lock();
        let (alias_id, (alias, _)) = aliases
            .iter()
            .find(|(_, (_, owner))| *owner == address)
            .ok_or(NodeError::NotFound)?;
        Ok(IdentityRecord {
            alias: alias.clone(),
            alias_id: alias_id.clone(),
            address,
            avatar_ref: None,
        })
    }
}

#[async_trait]
impl LendingNode for StubNode {
    async fn pools(&self) -> NodeResult<Vec<PoolInfo>> {
        Ok(vec![PoolInfo {
            pool_id: "core-nhb".to_owned(),
            token: TokenSymbol::Nhb,
            total_supplied: "100000".to_owned(),
            total_borrowed: "40000".to_owned(),
            supply_apy_bps: 310,
            borrow_apy_bps: 520,
            collateral_factor_bps: 7500,
        }])
    }

    async fn supply(
        &self,
        account: Address,
        pool_id: String,
        amount: BigUint,
    ) -> NodeResult<Position> {
        Ok(Position {
            account,
            pool_id,
            supplied: amount.to_string(),
            borrowed: "0".to_owned(),
            health_factor_bps: 20_000,
        })
    }

    async fn withdraw(
        &self,
        account: Address,
        pool_id: String,
        _amount: BigUint,
    ) -> NodeResult<Position> {
        Ok(Position {
            account,
            pool_id,
            supplied: "0".to_owned(),
            borrowed: "0".to_owned(),
            health_factor_bps: 20_000,
        })
    }

    async fn borrow(
        &self,
        account: Address,
        pool_id: String,
        amount: BigUint,
    ) -> NodeResult<Position> {
        Ok(Position {
            account,
            pool_id,
            supplied: "0".to_owned(),
            borrowed: amount.to_string(),
            health_factor_bps: 11_000,
        })
    }

    async fn repay(
        &self,
        account: Address,
        pool_id: String,
        _amount: BigUint,
    ) -> NodeResult<Position> {
        Ok(Position {
            account,
            pool_id,
            supplied: "0".to_owned(),
            borrowed: "0".to_owned(),
            health_factor_bps: 20_000,
        })
    }

    async fn liquidate(
        &self,
        _liquidator: Address,
        borrower: Address,
        pool_id: String,
    ) -> NodeResult<Position> {
        Ok(Position {
            account: borrower,
            pool_id,
            supplied: "0".to_owned(),
            borrowed: "0".to_owned(),
            health_factor_bps: 10_000,
        })
    }
}

#[async_trait]
impl LoyaltyNode for StubNode {
    async fn create_business(&self, owner: Address, name: String) -> NodeResult<BusinessRecord> {
        Ok(BusinessRecord {
            id: self.next_id(),
            owner,
            name,
            merchants: Vec::new(),
        })
    }

    async fn create_program(&self, request: ProgramRequest) -> NodeResult<ProgramRecord> {
        Ok(ProgramRecord {
            id: self.next_id(),
            business_id: hex::encode(request.business_id),
            name: request.name,
            token: request.token,
            accrual_bps: request.accrual_bps,
            cap_per_day: request.cap_per_day.map(|cap| cap.to_string()),
            active: true,
        })
    }

    async fn add_merchant(
        &self,
        business_id: [u8; 32],
        merchant: Address,
    ) -> NodeResult<BusinessRecord> {
        Ok(BusinessRecord {
            id: hex::encode(business_id),
            owner: addr(1),
            name: "demo".to_owned(),
            merchants: vec![merchant],
        })
    }

    async fn program_info(&self, program_id: [u8; 32]) -> NodeResult<ProgramRecord> {
        Ok(ProgramRecord {
            id: hex::encode(program_id),
            business_id: self.next_id(),
            name: "demo".to_owned(),
            token: TokenSymbol::Znhb,
            accrual_bps: 50,
            cap_per_day: None,
            active: true,
        })
    }
}

#[async_trait]
impl CreatorNode for StubNode {
    async fn publish(&self, creator: Address, content_ref: String) -> NodeResult<ContentRecord> {
        Ok(ContentRecord {
            id: self.next_id(),
            creator,
            content_ref,
            published_at: 1_700_000_000,
            total_tips: "0".to_owned(),
            total_stake: "0".to_owned(),
        })
    }

    async fn tip(
        &self,
        _fan: Address,
        content_id: [u8; 32],
        amount: BigUint,
    ) -> NodeResult<ContentRecord> {
        Ok(ContentRecord {
            id: hex::encode(content_id),
            creator: addr(2),
            content_ref: "ipfs://demo".to_owned(),
            published_at: 1_700_000_000,
            total_tips: amount.to_string(),
            total_stake: "0".to_owned(),
        })
    }

    async fn stake(
        &self,
        fan: Address,
        creator: Address,
        amount: BigUint,
    ) -> NodeResult<StakeTotal> {
        Ok(StakeTotal {
            fan,
            creator,
            amount: amount.to_string(),
            total_stake: amount.to_string(),
        })
    }

    async fn unstake(
        &self,
        fan: Address,
        creator: Address,
        amount: BigUint,
    ) -> NodeResult<StakeTotal> {
        Ok(StakeTotal {
            fan,
            creator,
            amount: amount.to_string(),
            total_stake: "0".to_owned(),
        })
    }

    async fn payouts(&self, _creator: Address) -> NodeResult<Vec<PayoutRow>> {
        Ok(vec![PayoutRow {
            period: "2026-07".to_owned(),
            amount: "12".to_owned(),
            settled: true,
        }])
    }
}

#[async_trait]
impl GovNode for StubNode {
    async fn propose(
        &self,
        proposer: Address,
        kind: String,
        _payload: Value,
    ) -> NodeResult<ProposalRecord> {
        Ok(ProposalRecord {
            id: 1,
            proposer,
            kind,
            status: ProposalStatus::Voting,
            submitted_at: 1_700_000_000,
            voting_ends_at: 1_700_600_000,
            yes_power: "0".to_owned(),
            no_power: "0".to_owned(),
            abstain_power: "0".to_owned(),
        })
    }

    async fn vote(
        &self,
        voter: Address,
        proposal_id: u64,
        choice: VoteChoice,
    ) -> NodeResult<ProposalRecord> {
        Ok(ProposalRecord {
            id: proposal_id,
            proposer: voter,
            kind: "param_change".to_owned(),
            status: ProposalStatus::Voting,
            submitted_at: 1_700_000_000,
            voting_ends_at: 1_700_600_000,
            yes_power: if matches!(choice, VoteChoice::Yes) {
                "1".to_owned()
            } else {
                "0".to_owned()
            },
            no_power: "0".to_owned(),
            abstain_power: "0".to_owned(),
        })
    }

    async fn proposal(&self, proposal_id: u64) -> NodeResult<ProposalRecord> {
        if proposal_id == 404 {
            return Err(NodeError::NotFound);
        }
        Ok(ProposalRecord {
            id: proposal_id,
            proposer: addr(3),
            kind: "text".to_owned(),
            status: ProposalStatus::Passed,
            submitted_at: 1_700_000_000,
            voting_ends_at: 1_700_600_000,
            yes_power: "10".to_owned(),
            no_power: "2".to_owned(),
            abstain_power: "1".to_owned(),
        })
    }

    async fn list(&self, _after_id: Option<u64>, limit: u32) -> NodeResult<Vec<ProposalRecord>> {
        Ok((1..=u64::from(limit.min(2)))
            .map(|id| ProposalRecord {
                id,
                proposer: addr(3),
                kind: "text".to_owned(),
                status: ProposalStatus::Voting,
                submitted_at: 1_700_000_000,
                voting_ends_at: 1_700_600_000,
                yes_power: "0".to_owned(),
                no_power: "0".to_owned(),
                abstain_power: "0".to_owned(),
            })
            .collect())
    }

    async fn finalize(&self, proposal_id: u64) -> NodeResult<ProposalRecord> {
        self.proposal(proposal_id).await
    }

    async fn queue(&self, proposal_id: u64) -> NodeResult<ProposalRecord> {
        self.proposal(proposal_id).await
    }

    async fn execute(&self, proposal_id: u64) -> NodeResult<ProposalRecord> {
        self.proposal(proposal_id).await
    }
}

#[async_trait]
impl TradeNode for StubNode {
    async fn create(&self, request: TradeCreateRequest) -> NodeResult<TradeState> {
        let trade_id = Uuid::new_v4();
        let n = self.counter.fetch_add(2, Ordering::SeqCst) as u8;
        let state = TradeState {
            trade_id,
            status: TradeStatus::Init,
            buyer: request.buyer,
            seller: request.seller,
            base_token: request.base_token,
            base_amount: request.base_amount,
            quote_token: request.quote_token,
            quote_amount: request.quote_amount,
            deadline: request.deadline,
            slippage_bps: request.slippage_bps,
            base_vault: addr(0xA0 ^ n),
            quote_vault: addr(0xB0 ^ n),
        };
        self.trades.lock().insert(trade_id, state.clone());
        Ok(state)
    }

    async fn get(&self, trade_id: Uuid) -> NodeResult<TradeState> {
        self.trades
            .lock()
            .get(&trade_id)
            .cloned()
            .ok_or(NodeError::NotFound)
    }

    async fn settle(&self, trade_id: Uuid) -> NodeResult<TradeState> {
        let mut trades = self.trades.lock();
        let state = trades.get_mut(&trade_id).ok_or(NodeError::NotFound)?;
        state.status = TradeStatus::Settled;
        Ok(state.clone())
    }

    async fn dispute(&self, trade_id: Uuid, _caller: Address) -> NodeResult<TradeState> {
        let mut trades = self.trades.lock();
        let state = trades.get_mut(&trade_id).ok_or(NodeError::NotFound)?;
        state.status = TradeStatus::Disputed;
        Ok(state.clone())
    }

    async fn resolve(
        &self,
        trade_id: Uuid,
        _caller: Address,
        _outcome: ResolutionOutcome,
    ) -> NodeResult<TradeState> {
        let mut trades = self.trades.lock();
        let state = trades.get_mut(&trade_id).ok_or(NodeError::NotFound)?;
        state.status = TradeStatus::Resolved;
        Ok(state.clone())
    }
}

#[async_trait]
impl NetNode for StubNode {
    async fn info(&self) -> NodeResult<NetInfo> {
        Ok(NetInfo {
            node_id: "nhb-node-1".to_owned(),
            listen_addrs: vec!["/ip4/0.0.0.0/tcp/26656".to_owned()],
            peer_count: 8,
            chain_height: 900,
        })
    }

    async fn peers(&self) -> NodeResult<Vec<PeerInfo>> {
        Ok(vec![PeerInfo {
            node_id: "nhb-node-2".to_owned(),
            address: "203.0.113.8:26656".to_owned(),
            direction: "outbound".to_owned(),
            latency_ms: 23,
            banned_until: None,
        }])
    }

    async fn ban(&self, node_id: String, seconds: Option<u64>) -> NodeResult<PeerInfo> {
        Ok(PeerInfo {
            node_id,
            address: "203.0.113.8:26656".to_owned(),
            direction: "outbound".to_owned(),
            latency_ms: 23,
            banned_until: Some(1_700_000_000 + seconds.unwrap_or(3600)),
        })
    }

    async fn unban(&self, node_id: String) -> NodeResult<PeerInfo> {
        Ok(PeerInfo {
            node_id,
            address: "203.0.113.8:26656".to_owned(),
            direction: "outbound".to_owned(),
            latency_ms: 23,
            banned_until: None,
        })
    }
}

#[async_trait]
impl SyncNode for StubNode {
    async fn status(&self) -> NodeResult<SyncStatus> {
        Ok(SyncStatus {
            syncing: false,
            current_height: 900,
            target_height: 900,
            snapshot_height: Some(800),
        })
    }

    async fn export_snapshot(&self, height: Option<u64>) -> NodeResult<SnapshotExport> {
        Ok(SnapshotExport {
            height: height.unwrap_or(900),
            chunks: 16,
            checksum: format!("0x{}", "cd".repeat(32)),
        })
    }

    async fn import_snapshot(&self, _source: String, _checksum: [u8; 32]) -> NodeResult<SyncStatus> {
        self.status().await
    }
}

#[async_trait]
impl ReputationNode for StubNode {
    async fn verify_skill(&self, attestation: AttestationRequest) -> NodeResult<VerifySkillResult> {
        Ok(VerifySkillResult {
            subject: attestation.subject,
            skill: attestation.skill,
            issuer: attestation.issuer,
            verified: true,
        })
    }
}

#[async_trait]
impl FinalityNode for StubNode {
    async fn subscribe(&self, cursor: Option<String>) -> NodeResult<FinalitySubscription> {
        // history at or after the cursor; the cursor itself is opaque
        // to the gateway, only this stub gives it numeric meaning
        let from = cursor.and_then(|c| c.parse::<u64>().ok()).unwrap_or(0);
        let backlog = self
            .finality_backlog
            .lock()
            .iter()
            .filter(|event| event.cursor.parse::<u64>().unwrap_or(0) >= from)
            .cloned()
            .collect();
        let (sender, receiver) = mpsc::channel(16);
        let cancel = CancellationToken::new();
        *self.finality_sender.lock() = Some(sender);
        *self.finality_cancel.lock() = Some(cancel.clone());
        Ok(FinalitySubscription {
            backlog,
            updates: receiver,
            cancel,
        })
    }
}
