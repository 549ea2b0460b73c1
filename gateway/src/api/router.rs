//! The frozen method table.
//!
//! A single dispatch table maps method names to handler functions plus
//! their gate flags. The table is built once at server construction and
//! never mutated. Submit-class methods pass the per-source rate
//! limiter; auth-required methods pass the bearer gate first.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use gateway_types::error::RpcError;
use serde_json::Value;

use crate::handlers::{
    accounts, claimable, creator, escrow, gov, identity, lending, loyalty, net, potso, reputation,
    stake, swap, sync, trade, tx,
};
use crate::state::GatewayState;

pub(crate) type HandlerFuture = BoxFuture<'static, Result<Value, RpcError>>;
pub(crate) type HandlerFn = fn(Arc<GatewayState>, Vec<Value>) -> HandlerFuture;

/// One routed method.
pub(crate) struct MethodSpec {
    /// Must pass the bearer gate.
    pub(crate) auth_required: bool,
    /// Submit-class: must pass the rate limiter.
    pub(crate) submit: bool,
    pub(crate) handler: HandlerFn,
}

fn public(handler: HandlerFn) -> MethodSpec {
    MethodSpec {
        auth_required: false,
        submit: false,
        handler,
    }
}

fn submit(handler: HandlerFn) -> MethodSpec {
    MethodSpec {
        auth_required: false,
        submit: true,
        handler,
    }
}

fn authed(handler: HandlerFn) -> MethodSpec {
    MethodSpec {
        auth_required: true,
        submit: false,
        handler,
    }
}

fn authed_submit(handler: HandlerFn) -> MethodSpec {
    MethodSpec {
        auth_required: true,
        submit: true,
        handler,
    }
}

/// Name → handler table, frozen at construction.
pub(crate) struct MethodTable {
    methods: HashMap<&'static str, MethodSpec>,
}

impl MethodTable {
    pub(crate) fn lookup(&self, method: &str) -> Option<&MethodSpec> {
        self.methods.get(method)
    }

    pub(crate) fn build() -> Self {
        let mut m: HashMap<&'static str, MethodSpec> = HashMap::new();

        // accounts and submission
        m.insert("nhb_getBalance", public(|s, p| Box::pin(accounts::get_balance(s, p))));
        m.insert("nhb_getLatestBlocks", public(|s, p| Box::pin(accounts::get_latest_blocks(s, p))));
        m.insert("nhb_getEpochSummary", public(|s, p| Box::pin(accounts::get_epoch_summary(s, p))));
        m.insert("nhb_sendTransaction", submit(|s, p| Box::pin(tx::send(s, p))));

        // sponsorship
        m.insert("tx_sponsor", authed_submit(|s, p| Box::pin(tx::sponsor(s, p))));
        m.insert("tx_sponsorshipStatus", public(|s, p| Box::pin(tx::sponsorship_status(s, p))));

        // swap vouchers
        m.insert("swap_submitVoucher", submit(|s, p| Box::pin(swap::submit_voucher(s, p))));
        m.insert("swap_voucherStatus", public(|s, p| Box::pin(swap::voucher_status(s, p))));
        m.insert("swap_setLimits", authed(|s, p| Box::pin(swap::set_limits(s, p))));
        m.insert("swap_providerStatus", public(|s, p| Box::pin(swap::provider_status(s, p))));
        m.insert("swap_reverseVoucher", authed_submit(|s, p| Box::pin(swap::reverse_voucher(s, p))));

        // staking
        m.insert("stake_delegate", submit(|s, p| Box::pin(stake::delegate(s, p))));
        m.insert("stake_undelegate", submit(|s, p| Box::pin(stake::undelegate(s, p))));
        m.insert("stake_claimRewards", submit(|s, p| Box::pin(stake::claim_rewards(s, p))));
        m.insert("stake_previewClaim", public(|s, p| Box::pin(stake::preview_claim(s, p))));

        // potso
        m.insert("potso_heartbeat", submit(|s, p| Box::pin(potso::heartbeat(s, p))));
        m.insert("potso_meters", public(|s, p| Box::pin(potso::meters(s, p))));
        m.insert("potso_leaderboard", public(|s, p| Box::pin(potso::leaderboard(s, p))));
        m.insert("potso_stakeLock", submit(|s, p| Box::pin(potso::stake_lock(s, p))));
        m.insert("potso_stakeUnlock", submit(|s, p| Box::pin(potso::stake_unlock(s, p))));
        m.insert("potso_submitEvidence", authed_submit(|s, p| Box::pin(potso::submit_evidence(s, p))));

        // escrow
        m.insert("escrow_create", submit(|s, p| Box::pin(escrow::create(s, p))));
        m.insert("escrow_get", public(|s, p| Box::pin(escrow::get(s, p))));
        m.insert("escrow_fund", submit(|s, p| Box::pin(escrow::fund(s, p))));
        m.insert("escrow_release", submit(|s, p| Box::pin(escrow::release(s, p))));
        m.insert("escrow_refund", submit(|s, p| Box::pin(escrow::refund(s, p))));
        m.insert("escrow_dispute", submit(|s, p| Box::pin(escrow::dispute(s, p))));
        m.insert("escrow_resolve", authed_submit(|s, p| Box::pin(escrow::resolve(s, p))));
        m.insert("escrow_milestoneUpdate", submit(|s, p| Box::pin(escrow::milestone_update(s, p))));

        // claimables
        m.insert("claimable_create", submit(|s, p| Box::pin(claimable::create(s, p))));
        m.insert("claimable_claim", submit(|s, p| Box::pin(claimable::claim(s, p))));
        m.insert("claimable_cancel", submit(|s, p| Box::pin(claimable::cancel(s, p))));
        m.insert("claimable_get", public(|s, p| Box::pin(claimable::get(s, p))));

        // identity
        m.insert("identity_setAlias", submit(|s, p| Box::pin(identity::set_alias(s, p))));
        m.insert("identity_setAvatar", submit(|s, p| Box::pin(identity::set_avatar(s, p))));
        m.insert("identity_resolve", public(|s, p| Box::pin(identity::resolve(s, p))));
        m.insert("identity_reverse", public(|s, p| Box::pin(identity::reverse(s, p))));

        // lending
        m.insert("lending_getPools", public(|s, p| Box::pin(lending::get_pools(s, p))));
        m.insert("lending_supply", submit(|s, p| Box::pin(lending::supply(s, p))));
        m.insert("lending_withdraw", submit(|s, p| Box::pin(lending::withdraw(s, p))));
        m.insert("lending_borrow", submit(|s, p| Box::pin(lending::borrow(s, p))));
        m.insert("lending_repay", submit(|s, p| Box::pin(lending::repay(s, p))));
        m.insert("lending_liquidate", authed_submit(|s, p| Box::pin(lending::liquidate(s, p))));

        // loyalty
        m.insert("loyalty_createBusiness", authed_submit(|s, p| Box::pin(loyalty::create_business(s, p))));
        m.insert("loyalty_createProgram", authed_submit(|s, p| Box::pin(loyalty::create_program(s, p))));
        m.insert("loyalty_addMerchant", authed_submit(|s, p| Box::pin(loyalty::add_merchant(s, p))));
        m.insert("loyalty_programInfo", public(|s, p| Box::pin(loyalty::program_info(s, p))));

        // creator economy
        m.insert("creator_publish", submit(|s, p| Box::pin(creator::publish(s, p))));
        m.insert("creator_tip", submit(|s, p| Box::pin(creator::tip(s, p))));
        m.insert("creator_stake", submit(|s, p| Box::pin(creator::stake(s, p))));
        m.insert("creator_unstake", submit(|s, p| Box::pin(creator::unstake(s, p))));
        m.insert("creator_payouts", public(|s, p| Box::pin(creator::payouts(s, p))));

        // governance
        m.insert("gov_propose", submit(|s, p| Box::pin(gov::propose(s, p))));
        m.insert("gov_vote", submit(|s, p| Box::pin(gov::vote(s, p))));
        m.insert("gov_proposal", public(|s, p| Box::pin(gov::proposal(s, p))));
        m.insert("gov_list", public(|s, p| Box::pin(gov::list(s, p))));
        m.insert("gov_finalize", authed_submit(|s, p| Box::pin(gov::finalize(s, p))));
        m.insert("gov_queue", authed_submit(|s, p| Box::pin(gov::queue(s, p))));
        m.insert("gov_execute", authed_submit(|s, p| Box::pin(gov::execute(s, p))));

        // p2p trading
        m.insert("p2p_createTrade", submit(|s, p| Box::pin(trade::create(s, p))));
        m.insert("p2p_getTrade", public(|s, p| Box::pin(trade::get(s, p))));
        m.insert("p2p_settle", submit(|s, p| Box::pin(trade::settle(s, p))));
        m.insert("p2p_dispute", submit(|s, p| Box::pin(trade::dispute(s, p))));
        m.insert("p2p_resolve", authed_submit(|s, p| Box::pin(trade::resolve(s, p))));

        // peer management
        m.insert("net_info", public(|s, p| Box::pin(net::info(s, p))));
        m.insert("net_peers", public(|s, p| Box::pin(net::peers(s, p))));
        m.insert("net_ban", authed(|s, p| Box::pin(net::ban(s, p))));
        m.insert("net_unban", authed(|s, p| Box::pin(net::unban(s, p))));

        // snapshot sync
        m.insert("sync_status", public(|s, p| Box::pin(sync::status(s, p))));
        m.insert("sync_exportSnapshot", authed(|s, p| Box::pin(sync::export_snapshot(s, p))));
        m.insert("sync_importSnapshot", authed_submit(|s, p| Box::pin(sync::import_snapshot(s, p))));

        // reputation
        m.insert("reputation_verifySkill", public(|s, p| Box::pin(reputation::verify_skill(s, p))));

        Self { methods: m }
    }
}
