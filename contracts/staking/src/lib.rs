#![no_std]

pub mod events;
pub mod ledger;
pub mod revenue;
pub mod rewards;
pub mod tiers;

use common::admin_tiers::{self, AdminRole};
use common::math;
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol, Vec,
};

use ledger::{Checkpoint, Position, StakeRecord};
use rewards::Pool;
use tiers::Tier;

// ── Amount constants ─────────────────────────────────────────────────────────

/// One whole platform token (7 decimals).
pub const UNIT: i128 = 10_000_000;
pub const MIN_STAKE_AMOUNT: i128 = 100 * UNIT;
pub const PREMIUM_THRESHOLD: i128 = 10_000 * UNIT;
/// 0.01 token per second.
pub const DEFAULT_REWARD_RATE: i128 = UNIT / 100;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const CONFIG: Symbol = symbol_short!("CONFIG");
const PAUSED: Symbol = symbol_short!("PAUSED");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    InvalidAmount = 5,
    InsufficientBalance = 6,
    NoRewards = 7,
    NoRevenue = 8,
    DiscountTooHigh = 9,
    TierNotFound = 10,
    TierOrdering = 11,
    TransferFailure = 12,
    InsufficientRewards = 13,
    Overflow = 14,
    Paused = 15,
    NotStaked = 16,
    TokensIdentical = 17,
}

// ── Public-facing types ──────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    pub stake_token: Address,
    pub reward_token: Address,
}

/// Aggregate view of one account, returned by `get_staking_stats`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingStats {
    pub staked: i128,
    pub pending_rewards: i128,
    pub total_claimed: i128,
    pub tier: Option<u32>,
    pub fee_discount_bps: u32,
    pub is_premium: bool,
    /// Zero when the account holds no stake.
    pub staked_at: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `stake_token`  – token users lock into the pool.
    /// * `reward_token` – token paid out as rewards and accepted as revenue.
    /// * `reward_rate`  – reward base units emitted **per second** across all
    ///   stakers.
    pub fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        reward_rate: i128,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_rate < 0 {
            return Err(ContractError::InvalidInput);
        }
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }

        let now = env.ledger().timestamp();

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(
            &CONFIG,
            &StakingConfig {
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
            },
        );
        env.storage().instance().set(&PAUSED, &false);
        rewards::store_pool(&env, &Pool::new(reward_rate, now));
        tiers::store_tiers(&env, &tiers::default_tiers(&env));

        admin_tiers::set_owner(&env, &admin);

        events::publish_initialized(&env, admin, stake_token, reward_token, reward_rate);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` stake tokens into the pool.
    ///
    /// Any reward already pending on the existing position is paid out in
    /// the same call, so the new debt can be anchored at the current index.
    /// Returns the reward paid.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        Self::require_not_paused(&env)?;

        if amount < MIN_STAKE_AMOUNT {
            return Err(ContractError::InvalidAmount);
        }

        let config = Self::load_config(&env)?;
        let now = env.ledger().timestamp();
        let checkpoint = Checkpoint::capture(&env, Some(&staker))?;

        // 1. Settle the pool before touching the position.
        let mut pool = rewards::load_pool(&env)?;
        pool.settle(&env, now)?;

        // 2. Pay out what the current stake earned, then grow it.
        let mut record = match ledger::load_position(&env, &staker) {
            Some(Position::Staked(record)) => record,
            _ => StakeRecord::open(now),
        };
        let payout = record.pending(&env, pool.acc_reward_per_share)?;
        record.amount = record
            .amount
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        record.sync(&env, pool.acc_reward_per_share)?;
        if payout > 0 {
            record.last_claim_at = now;
        }
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        // 3. Commit, then move tokens; undo the commit if any step fails.
        let contract = env.current_contract_address();
        let position = Position::Staked(record.clone());
        let outcome = Self::commit_payout(&env, &staker, payout, &position, &pool)
            .and_then(|_| Self::transfer(&env, &config.stake_token, &staker, &contract, amount))
            .and_then(|_| Self::transfer(&env, &config.reward_token, &contract, &staker, payout));
        checkpoint.resolve(&env, outcome)?;

        events::publish_staked(
            &env,
            staker,
            amount,
            payout,
            record.amount,
            record.is_premium,
            pool.total_staked,
        );

        Ok(payout)
    }

    /// Take `amount` stake tokens back, collecting pending reward.
    /// Returns the reward paid.
    pub fn unstake(env: Env, staker: Address, amount: i128) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        Self::require_not_paused(&env)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = Self::load_config(&env)?;
        let now = env.ledger().timestamp();
        let checkpoint = Checkpoint::capture(&env, Some(&staker))?;

        let mut pool = rewards::load_pool(&env)?;
        pool.settle(&env, now)?;

        let mut record = match ledger::load_position(&env, &staker) {
            Some(Position::Staked(record)) => record,
            _ => return Err(ContractError::InsufficientBalance),
        };
        if amount > record.amount {
            return Err(ContractError::InsufficientBalance);
        }

        let payout = record.pending(&env, pool.acc_reward_per_share)?;
        let before = record.amount;
        record.amount -= amount;
        record.sync(&env, pool.acc_reward_per_share)?;
        if payout > 0 {
            record.last_claim_at = now;
        }
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::Overflow)?;

        let position = if record.amount == 0 {
            Position::Unstaked(record.exit(before, now))
        } else {
            Position::Staked(record.clone())
        };

        let contract = env.current_contract_address();
        let outcome = Self::commit_payout(&env, &staker, payout, &position, &pool)
            .and_then(|_| Self::transfer(&env, &config.stake_token, &contract, &staker, amount))
            .and_then(|_| Self::transfer(&env, &config.reward_token, &contract, &staker, payout));
        checkpoint.resolve(&env, outcome)?;

        events::publish_unstaked(
            &env,
            staker,
            amount,
            payout,
            record.amount,
            record.is_premium,
            pool.total_staked,
        );

        Ok(payout)
    }

    /// Collect all pending reward. Fails with `NoRewards` if nothing accrued.
    pub fn claim_rewards(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        Self::require_not_paused(&env)?;

        let config = Self::load_config(&env)?;
        let now = env.ledger().timestamp();
        let checkpoint = Checkpoint::capture(&env, Some(&staker))?;

        let mut pool = rewards::load_pool(&env)?;
        pool.settle(&env, now)?;

        let mut record = match ledger::load_position(&env, &staker) {
            Some(Position::Staked(record)) => record,
            _ => return Err(ContractError::NoRewards),
        };
        let payout = record.pending(&env, pool.acc_reward_per_share)?;
        if payout <= 0 {
            return Err(ContractError::NoRewards);
        }
        record.sync(&env, pool.acc_reward_per_share)?;
        record.last_claim_at = now;

        let contract = env.current_contract_address();
        let position = Position::Staked(record);
        let outcome = Self::commit_payout(&env, &staker, payout, &position, &pool)
            .and_then(|_| Self::transfer(&env, &config.reward_token, &contract, &staker, payout));
        checkpoint.resolve(&env, outcome)?;

        events::publish_reward_claimed(&env, staker, payout);

        Ok(payout)
    }

    /// Return the full principal and forfeit any pending reward.
    ///
    /// Works while paused and never depends on reward arithmetic: the pool
    /// settlement is attempted for the benefit of remaining stakers, but an
    /// overflow there is ignored. Returns the principal returned.
    pub fn emergency_withdraw(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let config = Self::load_config(&env)?;
        let now = env.ledger().timestamp();

        let record = match ledger::load_position(&env, &staker) {
            Some(Position::Staked(record)) if record.amount > 0 => record,
            _ => return Err(ContractError::NotStaked),
        };
        let checkpoint = Checkpoint::capture(&env, Some(&staker))?;

        let mut pool = rewards::load_pool(&env)?;
        let mut settled = pool.clone();
        if settled.settle(&env, now).is_ok() {
            pool = settled;
        }
        let forfeited = record.pending(&env, pool.acc_reward_per_share).unwrap_or(0);

        let amount = record.amount;
        pool.total_staked = pool.total_staked.saturating_sub(amount).max(0);
        ledger::store_position(&env, &staker, &Position::Unstaked(record.exit(amount, now)));
        rewards::store_pool(&env, &pool);

        let contract = env.current_contract_address();
        let outcome = Self::transfer(&env, &config.stake_token, &contract, &staker, amount);
        checkpoint.resolve(&env, outcome)?;

        events::publish_emergency_withdrawn(&env, staker, amount, forfeited, pool.total_staked);

        Ok(amount)
    }

    // ── Revenue ─────────────────────────────────────────────────────────────

    /// Buffer `amount` reward tokens of trading revenue from `from`.
    ///
    /// The accumulator is untouched until `distribute_revenue`.
    pub fn add_revenue(env: Env, from: Address, amount: i128) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = Self::load_config(&env)?;
        let checkpoint = Checkpoint::capture(&env, None)?;

        let contract = env.current_contract_address();
        let mut buffered = 0;
        let outcome = revenue::credit_revenue(&env, amount)
            .and_then(|size| {
                buffered = size;
                revenue::credit_reserve(&env, amount)
            })
            .and_then(|_| Self::transfer(&env, &config.reward_token, &from, &contract, amount));
        checkpoint.resolve(&env, outcome)?;

        events::publish_revenue_added(&env, from, amount, buffered);

        Ok(buffered)
    }

    /// Fold the revenue buffer into the accumulator, pro-rata to current
    /// stake. Returns the amount distributed.
    pub fn distribute_revenue(env: Env) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;

        let now = env.ledger().timestamp();
        let mut pool = rewards::load_pool(&env)?;
        pool.settle(&env, now)?;

        let amount = revenue::distribute(&env, &mut pool)?;
        rewards::store_pool(&env, &pool);

        events::publish_revenue_distributed(
            &env,
            amount,
            pool.total_staked,
            pool.acc_reward_per_share,
        );

        Ok(amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_staked(env: Env, staker: Address) -> i128 {
        ledger::load_position(&env, &staker)
            .map(|p| p.staked_amount())
            .unwrap_or(0)
    }

    pub fn get_position(env: Env, staker: Address) -> Option<Position> {
        ledger::load_position(&env, &staker)
    }

    pub fn is_premium(env: Env, staker: Address) -> bool {
        matches!(
            ledger::load_position(&env, &staker),
            Some(Position::Staked(record)) if record.is_premium
        )
    }

    /// Real-time pending reward without mutating state.
    pub fn get_pending_rewards(env: Env, staker: Address) -> i128 {
        Self::pending_for(&env, &staker)
    }

    /// Highest tier reached by the account's current stake.
    pub fn get_user_tier(env: Env, staker: Address) -> Option<Tier> {
        let staked = Self::get_staked(env.clone(), staker);
        tiers::tier_for(&tiers::load_tiers(&env), staked)
    }

    /// Fee discount in basis points, zero below the first tier.
    pub fn get_user_fee_discount(env: Env, staker: Address) -> u32 {
        Self::get_user_tier(env, staker)
            .map(|t| t.fee_discount_bps)
            .unwrap_or(0)
    }

    /// `fee` after the account's tier discount is applied.
    pub fn quote_fee(env: Env, staker: Address, fee: i128) -> Result<i128, ContractError> {
        if fee < 0 {
            return Err(ContractError::InvalidInput);
        }
        let bps = Self::get_user_fee_discount(env.clone(), staker);
        let discount = math::bps_of(&env, fee, bps).ok_or(ContractError::Overflow)?;
        Ok(fee - discount)
    }

    /// Reads each per-user key once instead of going through the
    /// individual getters.
    pub fn get_staking_stats(env: Env, staker: Address) -> StakingStats {
        let position = ledger::load_position(&env, &staker);
        let (staked, is_premium, staked_at) = match &position {
            Some(Position::Staked(record)) => (record.amount, record.is_premium, record.staked_at),
            _ => (0, false, 0),
        };
        let tier = tiers::tier_for(&tiers::load_tiers(&env), staked);

        StakingStats {
            staked,
            pending_rewards: Self::pending_for(&env, &staker),
            total_claimed: ledger::total_claimed(&env, &staker),
            tier: tier.as_ref().map(|t| t.index),
            fee_discount_bps: tier.map(|t| t.fee_discount_bps).unwrap_or(0),
            is_premium,
            staked_at,
        }
    }

    pub fn get_tiers(env: Env) -> Vec<Tier> {
        tiers::load_tiers(&env)
    }

    pub fn get_pool(env: Env) -> Result<Pool, ContractError> {
        rewards::load_pool(&env)
    }

    pub fn get_total_staked(env: Env) -> i128 {
        rewards::load_pool(&env).map(|p| p.total_staked).unwrap_or(0)
    }

    pub fn get_reward_rate(env: Env) -> i128 {
        rewards::load_pool(&env).map(|p| p.reward_rate).unwrap_or(0)
    }

    pub fn get_revenue_pool(env: Env) -> i128 {
        revenue::revenue_pool(&env)
    }

    pub fn get_reward_reserve(env: Env) -> i128 {
        revenue::reward_reserve(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        env.storage().instance().get(&PAUSED).unwrap_or(false)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin_tiers::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        env.storage().instance().set(&PENDING_ADMIN, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed new admin can
    /// call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        if new_admin != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_admin = admin_tiers::get_owner(&env).ok_or(ContractError::NotInitialized)?;

        admin_tiers::transfer_owner(&env, &new_admin);
        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_ADMIN)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Update the reward emission rate.
    ///
    /// The accumulator is flushed at the old rate first, so the change only
    /// applies from now on.
    ///
    /// Requires at least `Manager`.
    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_role(&env, &caller, &AdminRole::Manager)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidInput);
        }

        let mut pool = rewards::load_pool(&env)?;
        pool.settle(&env, env.ledger().timestamp())?;
        pool.reward_rate = new_rate;
        rewards::store_pool(&env, &pool);

        events::publish_reward_rate_set(&env, new_rate);

        Ok(())
    }

    /// Fund time-based emissions with `amount` reward tokens from `caller`.
    /// Returns the new reserve. Requires at least `Manager`.
    pub fn deposit_rewards(env: Env, caller: Address, amount: i128) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_role(&env, &caller, &AdminRole::Manager)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = Self::load_config(&env)?;
        let checkpoint = Checkpoint::capture(&env, None)?;

        let reserve = revenue::credit_reserve(&env, amount)?;

        let contract = env.current_contract_address();
        let outcome = Self::transfer(&env, &config.reward_token, &caller, &contract, amount);
        checkpoint.resolve(&env, outcome)?;

        events::publish_rewards_deposited(&env, caller, amount, reserve);

        Ok(reserve)
    }

    /// Replace tier `index`, or append a new tier when `index` equals the
    /// current tier count. Requires at least `Manager`.
    pub fn update_tier(
        env: Env,
        caller: Address,
        index: u32,
        min_stake: i128,
        fee_discount_bps: u32,
    ) -> Result<Tier, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_role(&env, &caller, &AdminRole::Manager)?;

        let mut table = tiers::load_tiers(&env);
        let tier = tiers::apply_update(&mut table, index, min_stake, fee_discount_bps)?;
        tiers::store_tiers(&env, &table);

        events::publish_tier_updated(&env, tier.clone());

        Ok(tier)
    }

    /// Requires at least `Operator`.
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_role(&env, &caller, &AdminRole::Operator)?;

        env.storage().instance().set(&PAUSED, &paused);

        events::publish_paused_set(&env, caller, paused);

        Ok(())
    }

    // ── Role management ─────────────────────────────────────────────────────

    /// Grant `role` to `target`. Only an `Owner` may call this.
    pub fn grant_role(
        env: Env,
        caller: Address,
        target: Address,
        role: AdminRole,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !admin_tiers::grant_role(&env, &caller, &target, role) {
            return Err(ContractError::Unauthorized);
        }
        events::publish_role_changed(&env, caller, target, Some(role));
        Ok(())
    }

    /// Remove every role from `target`. Only an `Owner` may call this; the
    /// primary admin can only leave through the two-step transfer.
    pub fn revoke_role(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !admin_tiers::revoke_role(&env, &caller, &target) {
            return Err(ContractError::Unauthorized);
        }
        events::publish_role_changed(&env, caller, target, None);
        Ok(())
    }

    pub fn get_role(env: Env, admin: Address) -> Option<AdminRole> {
        admin_tiers::get_role(&env, &admin)
    }

    pub fn list_admins(env: Env) -> Vec<Address> {
        admin_tiers::list_admins(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_not_paused(env: &Env) -> Result<(), ContractError> {
        if env.storage().instance().get(&PAUSED).unwrap_or(false) {
            return Err(ContractError::Paused);
        }
        Ok(())
    }

    /// Guard: `caller` must be the primary admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin = admin_tiers::get_owner(env).ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Guard: `caller` must hold at least `min_role`.
    fn require_role(env: &Env, caller: &Address, min_role: &AdminRole) -> Result<(), ContractError> {
        if !admin_tiers::require_role(env, caller, min_role) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn load_config(env: &Env) -> Result<StakingConfig, ContractError> {
        env.storage()
            .instance()
            .get(&CONFIG)
            .ok_or(ContractError::NotInitialized)
    }

    /// Write the state delta of a reward-paying operation.
    fn commit_payout(
        env: &Env,
        staker: &Address,
        payout: i128,
        position: &Position,
        pool: &Pool,
    ) -> Result<(), ContractError> {
        revenue::debit_reserve(env, payout)?;
        ledger::add_claimed(env, staker, payout)?;
        ledger::store_position(env, staker, position);
        rewards::store_pool(env, pool);
        Ok(())
    }

    fn pending_for(env: &Env, staker: &Address) -> i128 {
        let record = match ledger::load_position(env, staker) {
            Some(Position::Staked(record)) => record,
            _ => return 0,
        };
        let pool = match rewards::load_pool(env) {
            Ok(pool) => pool.projected(env, env.ledger().timestamp()),
            Err(_) => return 0,
        };
        record.pending(env, pool.acc_reward_per_share).unwrap_or(0)
    }

    /// Move `amount` of `token`, reporting any failure of the token contract
    /// as `TransferFailure` instead of trapping.
    fn transfer(
        env: &Env,
        token: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        if amount == 0 {
            return Ok(());
        }
        match token::Client::new(env, token).try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailure),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;

#[cfg(test)]
mod test_tiers;
