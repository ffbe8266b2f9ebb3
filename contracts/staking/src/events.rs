#![allow(deprecated)] // events().publish migration tracked separately

use common::admin_tiers::AdminRole;
use soroban_sdk::{symbol_short, Address, Env};

use crate::tiers::Tier;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub reward_rate: i128,
    pub timestamp: u64,
}

/// Fired when a user deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub reward_paid: i128,
    pub position: i128,
    pub is_premium: bool,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user takes stake back through the normal path.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub reward_paid: i128,
    pub position: i128,
    pub is_premium: bool,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a user exits through the emergency path.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawnEvent {
    pub staker: Address,
    pub amount: i128,
    /// Best-effort figure; zero if it could not be computed.
    pub forfeited: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevenueAddedEvent {
    pub from: Address,
    pub amount: i128,
    pub revenue_pool: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevenueDistributedEvent {
    pub amount: i128,
    pub total_staked: i128,
    pub acc_reward_per_share: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub new_rate: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsDepositedEvent {
    pub from: Address,
    pub amount: i128,
    pub reward_reserve: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierUpdatedEvent {
    pub tier: Tier,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedSetEvent {
    pub by: Address,
    pub paused: bool,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub by: Address,
    pub target: Address,
    /// Rank of the granted role (1 Operator, 2 Manager, 3 Owner); `None`
    /// when the role was revoked.
    pub role: Option<u32>,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    stake_token: Address,
    reward_token: Address,
    reward_rate: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            stake_token,
            reward_token,
            reward_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    staker: Address,
    amount: i128,
    reward_paid: i128,
    position: i128,
    is_premium: bool,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            reward_paid,
            position,
            is_premium,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    staker: Address,
    amount: i128,
    reward_paid: i128,
    position: i128,
    is_premium: bool,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            staker,
            amount,
            reward_paid,
            position,
            is_premium,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), staker.clone()),
        RewardClaimedEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_emergency_withdrawn(
    env: &Env,
    staker: Address,
    amount: i128,
    forfeited: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("EMRG_WD"), staker.clone()),
        EmergencyWithdrawnEvent {
            staker,
            amount,
            forfeited,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_revenue_added(env: &Env, from: Address, amount: i128, revenue_pool: i128) {
    env.events().publish(
        (symbol_short!("REV_ADD"), from.clone()),
        RevenueAddedEvent {
            from,
            amount,
            revenue_pool,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_revenue_distributed(
    env: &Env,
    amount: i128,
    total_staked: i128,
    acc_reward_per_share: i128,
) {
    env.events().publish(
        (symbol_short!("REV_DIST"),),
        RevenueDistributedEvent {
            amount,
            total_staked,
            acc_reward_per_share,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RWD_RATE"),),
        RewardRateSetEvent {
            new_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_deposited(env: &Env, from: Address, amount: i128, reward_reserve: i128) {
    env.events().publish(
        (symbol_short!("RWD_DEP"), from.clone()),
        RewardsDepositedEvent {
            from,
            amount,
            reward_reserve,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tier_updated(env: &Env, tier: Tier) {
    env.events().publish(
        (symbol_short!("TIER_UPD"), tier.index),
        TierUpdatedEvent {
            tier,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused_set(env: &Env, by: Address, paused: bool) {
    env.events().publish(
        (symbol_short!("PAUSED"),),
        PausedSetEvent {
            by,
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_changed(env: &Env, by: Address, target: Address, role: Option<AdminRole>) {
    env.events().publish(
        (symbol_short!("ROLE"), target.clone()),
        RoleChangedEvent {
            by,
            target,
            role: role.map(|r| r.rank()),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
