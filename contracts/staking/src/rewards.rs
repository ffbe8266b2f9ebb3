//! Reward-per-share accumulator.
//!
//! The pool keeps a single monotonically non-decreasing index,
//! `acc_reward_per_share`, scaled by [`PRECISION`]. Any position's pending
//! reward is `amount × index − reward_debt`, which makes reward queries O(1)
//! regardless of how many accounts have staked.

use common::math::{from_index, to_index, PRECISION};
use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::ContractError;

const POOL: Symbol = symbol_short!("POOL");

/// Process-wide pool state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Sum of all active stake amounts.
    pub total_staked: i128,
    /// Cumulative reward per staked unit, scaled by `PRECISION`.
    pub acc_reward_per_share: i128,
    /// Reward-token base units emitted per second across all stakers.
    pub reward_rate: i128,
    pub last_update_time: u64,
}

impl Pool {
    pub fn new(reward_rate: i128, now: u64) -> Self {
        Self {
            total_staked: 0,
            acc_reward_per_share: 0,
            reward_rate,
            last_update_time: now,
        }
    }

    /// Advance the accumulator to `now`.
    ///
    /// ```text
    /// Δacc = reward_rate × elapsed × PRECISION / total_staked
    /// ```
    ///
    /// Nothing accrues while the pool is empty; the clock still moves so the
    /// first staker does not collect emissions for the idle period.
    pub fn settle(&mut self, env: &Env, now: u64) -> Result<(), ContractError> {
        let elapsed = now.saturating_sub(self.last_update_time);
        if self.total_staked > 0 && elapsed > 0 {
            let emitted = self
                .reward_rate
                .checked_mul(elapsed as i128)
                .ok_or(ContractError::Overflow)?;
            let delta = to_index(env, emitted, self.total_staked).ok_or(ContractError::Overflow)?;
            self.acc_reward_per_share = self
                .acc_reward_per_share
                .checked_add(delta)
                .ok_or(ContractError::Overflow)?;
        }
        if now > self.last_update_time {
            self.last_update_time = now;
        }
        Ok(())
    }

    /// Pool state as it would look if settled at `now`, for read-only
    /// queries. Falls back to the stored state if the projection overflows.
    pub fn projected(&self, env: &Env, now: u64) -> Pool {
        let mut next = self.clone();
        match next.settle(env, now) {
            Ok(()) => next,
            Err(_) => self.clone(),
        }
    }

    /// Fold a lump sum into the accumulator, pro-rata to current stake.
    pub fn fold_revenue(&mut self, env: &Env, amount: i128) -> Result<(), ContractError> {
        if self.total_staked <= 0 {
            return Err(ContractError::NoRevenue);
        }
        let delta = to_index(env, amount, self.total_staked).ok_or(ContractError::Overflow)?;
        self.acc_reward_per_share = self
            .acc_reward_per_share
            .checked_add(delta)
            .ok_or(ContractError::Overflow)?;
        Ok(())
    }
}

/// Reward already accounted for at index `acc`: `amount × acc / PRECISION`.
pub fn reward_debt(env: &Env, amount: i128, acc: i128) -> Result<i128, ContractError> {
    from_index(env, amount, acc).ok_or(ContractError::Overflow)
}

/// Reward accrued since `debt` was taken. Never negative.
pub fn pending_reward(env: &Env, amount: i128, debt: i128, acc: i128) -> Result<i128, ContractError> {
    let accrued = reward_debt(env, amount, acc)?;
    Ok(accrued.saturating_sub(debt).max(0))
}

// ── Storage ─────────────────────────────────────────────────────────────────

pub fn load_pool(env: &Env) -> Result<Pool, ContractError> {
    env.storage()
        .instance()
        .get(&POOL)
        .ok_or(ContractError::NotInitialized)
}

pub fn store_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&POOL, pool);
}

// ── Unit tests ──────────────────────────────────────────────────────────────
