extern crate std;

use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Env};

use crate::tiers::MAX_FEE_DISCOUNT_BPS;
use crate::{ContractError, StakingContract, StakingContractClient, DEFAULT_REWARD_RATE, UNIT};

fn setup() -> (Env, StakingContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &stake_token.address(),
        &reward_token.address(),
        &DEFAULT_REWARD_RATE,
    );

    (env, client, admin, stake_token.address())
}

fn staker_with(env: &Env, client: &StakingContractClient, stake_token: &Address, amount: i128) -> Address {
    let staker = Address::generate(env);
    StellarAssetClient::new(env, stake_token).mint(&staker, &amount);
    client.stake(&staker, &amount);
    staker
}

// ── Default table ────────────────────────────────────────────────────────────

#[test]
fn test_default_tiers() {
    let (_env, client, _admin, _) = setup();
    let tiers = client.get_tiers();

    let expected = [
        (1_000 * UNIT, 100u32),
        (5_000 * UNIT, 200),
        (10_000 * UNIT, 300),
        (50_000 * UNIT, 500),
    ];
    assert_eq!(tiers.len(), expected.len() as u32);
    for (i, (min_stake, bps)) in expected.iter().enumerate() {
        let tier = tiers.get(i as u32).unwrap();
        assert_eq!(tier.index, i as u32);
        assert_eq!(tier.min_stake, *min_stake);
        assert_eq!(tier.fee_discount_bps, *bps);
    }
}

#[test]
fn test_user_tier_by_stake() {
    let (env, client, _admin, stake_token) = setup();

    let small = staker_with(&env, &client, &stake_token, 500 * UNIT);
    assert_eq!(client.get_user_tier(&small), None);
    assert_eq!(client.get_user_fee_discount(&small), 0);

    let bronze = staker_with(&env, &client, &stake_token, 1_000 * UNIT);
    assert_eq!(client.get_user_tier(&bronze).map(|t| t.index), Some(0));
    assert_eq!(client.get_user_fee_discount(&bronze), 100);

    let gold = staker_with(&env, &client, &stake_token, 10_000 * UNIT);
    assert_eq!(client.get_user_fee_discount(&gold), 300);

    let platinum = staker_with(&env, &client, &stake_token, 75_000 * UNIT);
    assert_eq!(client.get_user_tier(&platinum).map(|t| t.index), Some(3));
    assert_eq!(client.get_user_fee_discount(&platinum), 500);

    let stranger = Address::generate(&env);
    assert_eq!(client.get_user_tier(&stranger), None);
}

#[test]
fn test_discount_drops_with_stake() {
    let (env, client, _admin, stake_token) = setup();
    let staker = staker_with(&env, &client, &stake_token, 5_000 * UNIT);
    assert_eq!(client.get_user_fee_discount(&staker), 200);

    client.unstake(&staker, &1);
    assert_eq!(client.get_user_fee_discount(&staker), 100);
}

#[test]
fn test_quote_fee_applies_discount() {
    let (env, client, _admin, stake_token) = setup();
    let staker = staker_with(&env, &client, &stake_token, 50_000 * UNIT);

    // 5% off.
    assert_eq!(client.quote_fee(&staker, &(100 * UNIT)), 95 * UNIT);

    let stranger = Address::generate(&env);
    assert_eq!(client.quote_fee(&stranger, &(100 * UNIT)), 100 * UNIT);

    match client.try_quote_fee(&staker, &-1) {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

// ── update_tier ──────────────────────────────────────────────────────────────

#[test]
fn test_update_tier_replaces_entry() {
    let (env, client, admin, stake_token) = setup();
    let staker = staker_with(&env, &client, &stake_token, 800 * UNIT);
    assert_eq!(client.get_user_tier(&staker), None);

    client.update_tier(&admin, &0, &(750 * UNIT), &MAX_FEE_DISCOUNT_BPS);

    let tier = client.get_user_tier(&staker).unwrap();
    assert_eq!(tier.index, 0);
    assert_eq!(tier.min_stake, 750 * UNIT);
    assert_eq!(client.get_user_fee_discount(&staker), 1_000);
}

#[test]
fn test_update_tier_appends_new_level() {
    let (_env, client, admin, _) = setup();

    client.update_tier(&admin, &4, &(100_000 * UNIT), &700);
    assert_eq!(client.get_tiers().len(), 5);
}

#[test]
fn test_update_tier_discount_too_high() {
    let (_env, client, admin, _) = setup();

    match client.try_update_tier(&admin, &0, &(1_000 * UNIT), &(MAX_FEE_DISCOUNT_BPS + 1)) {
        Err(Ok(e)) => assert_eq!(e, ContractError::DiscountTooHigh),
        _ => unreachable!("Expected DiscountTooHigh error"),
    }
    assert_eq!(client.get_tiers().get(0).unwrap().fee_discount_bps, 100);
}

#[test]
fn test_update_tier_rejects_bad_index_and_order() {
    let (_env, client, admin, _) = setup();

    match client.try_update_tier(&admin, &9, &(1_000_000 * UNIT), &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::TierNotFound),
        _ => unreachable!("Expected TierNotFound error"),
    }
    match client.try_update_tier(&admin, &2, &(60_000 * UNIT), &300) {
        Err(Ok(e)) => assert_eq!(e, ContractError::TierOrdering),
        _ => unreachable!("Expected TierOrdering error"),
    }
    match client.try_update_tier(&admin, &1, &0, &200) {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

#[test]
fn test_update_tier_unauthorized() {
    let (env, client, _admin, _) = setup();
    let intruder = Address::generate(&env);

    match client.try_update_tier(&intruder, &0, &(1_000 * UNIT), &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}
