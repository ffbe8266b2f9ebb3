extern crate std;

use common::admin_tiers::AdminRole;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};

use crate::{ContractError, StakingContract, StakingContractClient, DEFAULT_REWARD_RATE, UNIT};

// ── Test helpers ─────────────────────────────────────────────────────────────

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

    (env, client, admin, reward_token.address())
}

fn expect_unauthorized<T, E>(result: Result<T, Result<ContractError, E>>) {
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

// ── Owner bootstrapped on initialize ─────────────────────────────────────────

#[test]
fn test_admin_is_owner_after_init() {
    let (_env, client, admin, _) = setup();
    assert_eq!(client.get_role(&admin), Some(AdminRole::Owner));
    assert_eq!(client.list_admins().len(), 1);
}

// ── Grant / revoke ───────────────────────────────────────────────────────────

#[test]
fn test_owner_grants_every_role() {
    let (env, client, admin, _) = setup();

    for role in [AdminRole::Operator, AdminRole::Manager, AdminRole::Owner] {
        let target = Address::generate(&env);
        client.grant_role(&admin, &target, &role);
        assert_eq!(client.get_role(&target), Some(role));
    }
    assert_eq!(client.list_admins().len(), 4);
}

#[test]
fn test_owner_revokes_role() {
    let (env, client, admin, _) = setup();
    let target = Address::generate(&env);

    client.grant_role(&admin, &target, &AdminRole::Manager);
    client.revoke_role(&admin, &target);
    assert_eq!(client.get_role(&target), None);
    assert_eq!(client.list_admins().len(), 1);
}

#[test]
fn test_primary_owner_cannot_be_revoked() {
    let (env, client, admin, _) = setup();
    let second_owner = Address::generate(&env);
    client.grant_role(&admin, &second_owner, &AdminRole::Owner);

    expect_unauthorized(client.try_revoke_role(&second_owner, &admin));
    assert_eq!(client.get_role(&admin), Some(AdminRole::Owner));
}

#[test]
fn test_primary_owner_cannot_be_demoted() {
    let (env, client, admin, _) = setup();
    let second_owner = Address::generate(&env);
    client.grant_role(&admin, &second_owner, &AdminRole::Owner);

    expect_unauthorized(client.try_grant_role(&second_owner, &admin, &AdminRole::Operator));
    assert_eq!(client.get_role(&admin), Some(AdminRole::Owner));

    // The primary owner keeps full control, including over the second owner.
    client.set_reward_rate(&admin, &(2 * DEFAULT_REWARD_RATE));
    client.revoke_role(&admin, &second_owner);
    assert_eq!(client.get_role(&second_owner), None);
}

#[test]
fn test_manager_cannot_grant_or_revoke() {
    let (env, client, admin, _) = setup();
    let manager = Address::generate(&env);
    let operator = Address::generate(&env);

    client.grant_role(&admin, &manager, &AdminRole::Manager);
    client.grant_role(&admin, &operator, &AdminRole::Operator);

    expect_unauthorized(client.try_grant_role(
        &manager,
        &Address::generate(&env),
        &AdminRole::Operator,
    ));
    expect_unauthorized(client.try_revoke_role(&manager, &operator));
}

// ── Role gates on economic configuration ─────────────────────────────────────

#[test]
fn test_manager_can_configure_economics() {
    let (env, client, admin, reward_token) = setup();
    let manager = Address::generate(&env);
    client.grant_role(&admin, &manager, &AdminRole::Manager);

    client.set_reward_rate(&manager, &(2 * DEFAULT_REWARD_RATE));
    assert_eq!(client.get_reward_rate(), 2 * DEFAULT_REWARD_RATE);

    StellarAssetClient::new(&env, &reward_token).mint(&manager, &(10 * UNIT));
    assert_eq!(client.deposit_rewards(&manager, &(10 * UNIT)), 10 * UNIT);

    let tier = client.update_tier(&manager, &0, &(800 * UNIT), &150);
    assert_eq!(tier.fee_discount_bps, 150);
}

#[test]
fn test_operator_cannot_configure_economics() {
    let (env, client, admin, _) = setup();
    let operator = Address::generate(&env);
    client.grant_role(&admin, &operator, &AdminRole::Operator);

    expect_unauthorized(client.try_set_reward_rate(&operator, &99));
    expect_unauthorized(client.try_deposit_rewards(&operator, &UNIT));
    expect_unauthorized(client.try_update_tier(&operator, &0, &(800 * UNIT), &150));
}

#[test]
fn test_non_admin_cannot_call_admin_functions() {
    let (env, client, _admin, _) = setup();
    let intruder = Address::generate(&env);

    expect_unauthorized(client.try_set_reward_rate(&intruder, &999));
    expect_unauthorized(client.try_set_paused(&intruder, &true));
    expect_unauthorized(client.try_grant_role(&intruder, &intruder, &AdminRole::Owner));
    assert_eq!(client.get_role(&intruder), None);
}

#[test]
fn test_negative_reward_rate_rejected() {
    let (_env, client, admin, _) = setup();
    match client.try_set_reward_rate(&admin, &-1) {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

// ── Pause ────────────────────────────────────────────────────────────────────

#[test]
fn test_operator_pauses_and_resumes() {
    let (env, client, admin, _) = setup();
    let operator = Address::generate(&env);
    client.grant_role(&admin, &operator, &AdminRole::Operator);

    client.set_paused(&operator, &true);
    assert!(client.is_paused());

    let staker = Address::generate(&env);
    match client.try_stake(&staker, &(1_000 * UNIT)) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }

    client.set_paused(&operator, &false);
    assert!(!client.is_paused());
}

#[test]
fn test_pause_blocks_distribution_but_not_revenue_intake() {
    let (env, client, admin, reward_token) = setup();
    client.set_paused(&admin, &true);

    let curve = Address::generate(&env);
    StellarAssetClient::new(&env, &reward_token).mint(&curve, &(5 * UNIT));
    client.add_revenue(&curve, &(5 * UNIT));
    assert_eq!(client.get_revenue_pool(), 5 * UNIT);

    match client.try_distribute_revenue() {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }
}

// ── Two-step admin transfer ──────────────────────────────────────────────────

#[test]
fn test_admin_transfer_round_trip() {
    let (env, client, admin, _) = setup();
    let next = Address::generate(&env);

    client.propose_admin(&admin, &next);
    assert_eq!(client.get_pending_admin(), Some(next.clone()));

    env.ledger().set_timestamp(60);
    client.accept_admin(&next);

    assert_eq!(client.get_admin(), next);
    assert_eq!(client.get_pending_admin(), None);
    assert_eq!(client.get_role(&next), Some(AdminRole::Owner));
    assert_eq!(client.get_role(&admin), None);

    expect_unauthorized(client.try_set_reward_rate(&admin, &1));
}

#[test]
fn test_only_proposed_admin_can_accept() {
    let (env, client, admin, _) = setup();
    let next = Address::generate(&env);
    let intruder = Address::generate(&env);

    client.propose_admin(&admin, &next);
    expect_unauthorized(client.try_accept_admin(&intruder));
    assert_eq!(client.get_admin(), admin);
}

#[test]
fn test_cancel_admin_transfer() {
    let (env, client, admin, _) = setup();
    let next = Address::generate(&env);

    client.propose_admin(&admin, &next);
    client.cancel_admin_transfer(&admin);
    assert_eq!(client.get_pending_admin(), None);

    match client.try_accept_admin(&next) {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

#[test]
fn test_non_admin_cannot_propose() {
    let (env, client, _admin, _) = setup();
    let intruder = Address::generate(&env);

    expect_unauthorized(client.try_propose_admin(&intruder, &intruder));
}
