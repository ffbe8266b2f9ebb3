//! Revenue buffer and reward reserve.
//!
//! Trading fees land in the revenue buffer via `add_revenue` and reach
//! stakers only when `distribute_revenue` folds them into the accumulator.
//! The reserve tracks reward-token balance earmarked for payouts; every
//! payout draws it down.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::rewards::Pool;
use crate::ContractError;

const REVENUE_POOL: Symbol = symbol_short!("REV_POOL");
const REWARD_RESERVE: Symbol = symbol_short!("RWD_RSV");

pub fn revenue_pool(env: &Env) -> i128 {
    env.storage().instance().get(&REVENUE_POOL).unwrap_or(0)
}

pub fn set_revenue_pool(env: &Env, amount: i128) {
    env.storage().instance().set(&REVENUE_POOL, &amount);
}

pub fn reward_reserve(env: &Env) -> i128 {
    env.storage().instance().get(&REWARD_RESERVE).unwrap_or(0)
}

pub fn set_reward_reserve(env: &Env, amount: i128) {
    env.storage().instance().set(&REWARD_RESERVE, &amount);
}

/// Buffer `amount` of revenue. Returns the new buffer size.
pub fn credit_revenue(env: &Env, amount: i128) -> Result<i128, ContractError> {
    let next = revenue_pool(env)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    set_revenue_pool(env, next);
    Ok(next)
}

/// Grow the payout reserve. Returns the new reserve.
pub fn credit_reserve(env: &Env, amount: i128) -> Result<i128, ContractError> {
    let next = reward_reserve(env)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    set_reward_reserve(env, next);
    Ok(next)
}

/// Draw `amount` from the reserve for a payout.
pub fn debit_reserve(env: &Env, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let reserve = reward_reserve(env);
    if amount > reserve {
        return Err(ContractError::InsufficientRewards);
    }
    set_reward_reserve(env, reserve - amount);
    Ok(())
}

/// Fold the whole buffer into `pool` and empty it. The pool must already be
/// settled to the current time. Returns the amount distributed.
pub fn distribute(env: &Env, pool: &mut Pool) -> Result<i128, ContractError> {
    let amount = revenue_pool(env);
    if amount <= 0 {
        return Err(ContractError::NoRevenue);
    }
    pool.fold_revenue(env, amount)?;
    set_revenue_pool(env, 0);
    Ok(amount)
}
