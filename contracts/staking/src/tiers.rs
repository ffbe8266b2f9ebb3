//! Fee-discount tier table.
//!
//! Tiers are kept strictly ascending by `min_stake`; an account belongs to
//! the highest tier whose threshold its staked amount reaches.

use soroban_sdk::{contracttype, symbol_short, vec, Env, Symbol, Vec};

use crate::{ContractError, UNIT};

const TIERS: Symbol = symbol_short!("TIERS");

/// Largest discount a tier may grant, in basis points (10%).
pub const MAX_FEE_DISCOUNT_BPS: u32 = 1_000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tier {
    pub index: u32,
    pub min_stake: i128,
    pub fee_discount_bps: u32,
}

/// Bronze, Silver, Gold, Platinum.
pub fn default_tiers(env: &Env) -> Vec<Tier> {
    vec![
        env,
        Tier {
            index: 0,
            min_stake: 1_000 * UNIT,
            fee_discount_bps: 100,
        },
        Tier {
            index: 1,
            min_stake: 5_000 * UNIT,
            fee_discount_bps: 200,
        },
        Tier {
            index: 2,
            min_stake: 10_000 * UNIT,
            fee_discount_bps: 300,
        },
        Tier {
            index: 3,
            min_stake: 50_000 * UNIT,
            fee_discount_bps: 500,
        },
    ]
}

/// Highest tier reached by `staked`, if any.
pub fn tier_for(tiers: &Vec<Tier>, staked: i128) -> Option<Tier> {
    let mut found = None;
    for tier in tiers.iter() {
        if staked >= tier.min_stake {
            found = Some(tier);
        } else {
            break;
        }
    }
    found
}

/// Replace the tier at `index`, or append when `index == tiers.len()`.
///
/// The table must stay strictly ascending by `min_stake`.
pub fn apply_update(
    tiers: &mut Vec<Tier>,
    index: u32,
    min_stake: i128,
    fee_discount_bps: u32,
) -> Result<Tier, ContractError> {
    if fee_discount_bps > MAX_FEE_DISCOUNT_BPS {
        return Err(ContractError::DiscountTooHigh);
    }
    if min_stake <= 0 {
        return Err(ContractError::InvalidInput);
    }
    if index > tiers.len() {
        return Err(ContractError::TierNotFound);
    }

    if index > 0 {
        if let Some(below) = tiers.get(index - 1) {
            if min_stake <= below.min_stake {
                return Err(ContractError::TierOrdering);
            }
        }
    }
    if let Some(above) = tiers.get(index + 1) {
        if min_stake >= above.min_stake {
            return Err(ContractError::TierOrdering);
        }
    }

    let tier = Tier {
        index,
        min_stake,
        fee_discount_bps,
    };
    if index == tiers.len() {
        tiers.push_back(tier.clone());
    } else {
        tiers.set(index, tier.clone());
    }
    Ok(tier)
}

pub fn load_tiers(env: &Env) -> Vec<Tier> {
    env.storage()
        .instance()
        .get(&TIERS)
        .unwrap_or(Vec::new(env))
}

pub fn store_tiers(env: &Env, tiers: &Vec<Tier>) {
    env.storage().instance().set(&TIERS, tiers);
}
