//! Stake ledger: one position per account, plus the checkpoint used to
//! undo committed state when an outgoing transfer fails.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::revenue;
use crate::rewards::{self, Pool};
use crate::{ContractError, PREMIUM_THRESHOLD};

// Per-user persistent storage uses tuple keys:  (prefix, user_address)
const USER_POSITION: Symbol = symbol_short!("POS");
const USER_CLAIMED: Symbol = symbol_short!("CLAIMED");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// An account with stake in the pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    pub amount: i128,
    /// `amount × acc_reward_per_share / PRECISION` at the last settlement.
    pub reward_debt: i128,
    pub is_premium: bool,
    pub staked_at: u64,
    pub last_claim_at: u64,
}

/// An account that staked before and has since withdrawn everything.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExitRecord {
    pub last_amount: i128,
    pub staked_at: u64,
    pub exited_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Position {
    Staked(StakeRecord),
    Unstaked(ExitRecord),
}

impl Position {
    pub fn staked_amount(&self) -> i128 {
        match self {
            Position::Staked(record) => record.amount,
            Position::Unstaked(_) => 0,
        }
    }
}

pub fn is_premium(amount: i128) -> bool {
    amount >= PREMIUM_THRESHOLD
}

impl StakeRecord {
    /// A fresh, empty record. Re-staking after a full exit starts here too.
    pub fn open(now: u64) -> Self {
        Self {
            amount: 0,
            reward_debt: 0,
            is_premium: false,
            staked_at: now,
            last_claim_at: 0,
        }
    }

    pub fn pending(&self, env: &Env, acc: i128) -> Result<i128, ContractError> {
        rewards::pending_reward(env, self.amount, self.reward_debt, acc)
    }

    /// Re-anchor the debt at `acc` and recompute the premium flag.
    pub fn sync(&mut self, env: &Env, acc: i128) -> Result<(), ContractError> {
        self.reward_debt = rewards::reward_debt(env, self.amount, acc)?;
        self.is_premium = is_premium(self.amount);
        Ok(())
    }

    /// Close the record, keeping the history an exit record carries.
    pub fn exit(&self, last_amount: i128, now: u64) -> ExitRecord {
        ExitRecord {
            last_amount,
            staked_at: self.staked_at,
            exited_at: now,
        }
    }
}

// ── Storage ─────────────────────────────────────────────────────────────────

fn position_key(user: &Address) -> (Symbol, Address) {
    (USER_POSITION, user.clone())
}

fn claimed_key(user: &Address) -> (Symbol, Address) {
    (USER_CLAIMED, user.clone())
}

pub fn load_position(env: &Env, user: &Address) -> Option<Position> {
    let key = position_key(user);
    let position: Option<Position> = env.storage().persistent().get(&key);
    if position.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    position
}

pub fn store_position(env: &Env, user: &Address, position: &Position) {
    let key = position_key(user);
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Lifetime reward paid out to `user`. Survives full exits.
pub fn total_claimed(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&claimed_key(user))
        .unwrap_or(0)
}

pub fn add_claimed(env: &Env, user: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let key = claimed_key(user);
    let next = total_claimed(env, user)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    env.storage().persistent().set(&key, &next);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    Ok(())
}

// ── Checkpoint ──────────────────────────────────────────────────────────────

/// Snapshot of every row a single operation may write.
///
/// Operations commit their full state delta first and only then move tokens.
/// If a transfer fails the snapshot is written back, so no partial
/// settlement survives the failed call.
pub struct Checkpoint {
    account: Option<Address>,
    pool: Pool,
    position: Option<Position>,
    claimed: i128,
    revenue_pool: i128,
    reward_reserve: i128,
}

impl Checkpoint {
    pub fn capture(env: &Env, account: Option<&Address>) -> Result<Self, ContractError> {
        Ok(Self {
            account: account.cloned(),
            pool: rewards::load_pool(env)?,
            position: account.and_then(|a| load_position(env, a)),
            claimed: account.map(|a| total_claimed(env, a)).unwrap_or(0),
            revenue_pool: revenue::revenue_pool(env),
            reward_reserve: revenue::reward_reserve(env),
        })
    }

    pub fn restore(self, env: &Env) {
        rewards::store_pool(env, &self.pool);
        revenue::set_revenue_pool(env, self.revenue_pool);
        revenue::set_reward_reserve(env, self.reward_reserve);

        if let Some(account) = self.account {
            match self.position {
                Some(position) => store_position(env, &account, &position),
                None => env.storage().persistent().remove(&position_key(&account)),
            }
            if self.claimed == 0 {
                env.storage().persistent().remove(&claimed_key(&account));
            } else {
                env.storage()
                    .persistent()
                    .set(&claimed_key(&account), &self.claimed);
            }
        }
    }

    /// Keep the committed state if `outcome` is `Ok`, otherwise restore the
    /// snapshot and pass the error through.
    pub fn resolve(self, env: &Env, outcome: Result<(), ContractError>) -> Result<(), ContractError> {
        if let Err(e) = outcome {
            self.restore(env);
            return Err(e);
        }
        Ok(())
    }
}
