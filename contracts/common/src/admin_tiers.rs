use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ROLE_PREFIX: Symbol = symbol_short!("ADM_ROLE");
const OWNER: Symbol = symbol_short!("OWNER");
const ROLE_LIST: Symbol = symbol_short!("ADM_LIST");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Role Enum ────────────────────────────────────────────────────────────────

/// Three-level administrator hierarchy for launchpad contracts.
///
/// - `Owner`    – Everything below, plus granting and revoking roles.
/// - `Manager`  – Economic configuration: reward rate, reward deposits,
///                fee-discount tiers. Includes `Operator` rights.
/// - `Operator` – Can only pause and unpause contract operations.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AdminRole {
    Operator = 1,
    Manager = 2,
    Owner = 3,
}

impl AdminRole {
    pub fn rank(&self) -> u32 {
        *self as u32
    }

    /// Returns true if this role is at least as high as `min_role`.
    pub fn has_at_least(&self, min_role: &AdminRole) -> bool {
        self.rank() >= min_role.rank()
    }
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn role_key(admin: &Address) -> (Symbol, Address) {
    (ROLE_PREFIX, admin.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Assigns a role to the given address.
/// Callers must verify authorization beforehand.
pub fn set_role(env: &Env, admin: &Address, role: AdminRole) {
    let key = role_key(admin);
    env.storage().persistent().set(&key, &role);
    extend_ttl(env, &key);
    track_admin(env, admin);
}

pub fn get_role(env: &Env, admin: &Address) -> Option<AdminRole> {
    let key = role_key(admin);
    let role: Option<AdminRole> = env.storage().persistent().get(&key);
    if role.is_some() {
        extend_ttl(env, &key);
    }
    role
}

pub fn remove_role(env: &Env, admin: &Address) {
    env.storage().persistent().remove(&role_key(admin));
    untrack_admin(env, admin);
}

/// Returns `false` if the caller has no role or their role is below
/// `min_role`.
pub fn require_role(env: &Env, caller: &Address, min_role: &AdminRole) -> bool {
    match get_role(env, caller) {
        Some(role) => role.has_at_least(min_role),
        None => false,
    }
}

// ── Owner Registry ───────────────────────────────────────────────────────────

/// Records `owner` as the primary owner and assigns them the `Owner` role.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
    set_role(env, owner, AdminRole::Owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Moves primary ownership from the current owner to `new_owner`.
///
/// The previous owner loses every role; other role holders are untouched.
pub fn transfer_owner(env: &Env, new_owner: &Address) {
    if let Some(previous) = get_owner(env) {
        if previous != *new_owner {
            remove_role(env, &previous);
        }
    }
    set_owner(env, new_owner);
}

// ── Grant / Revoke ───────────────────────────────────────────────────────────

/// Grants `role` to `target`.
///
/// Only an `Owner` may call this. The caller must already have been
/// authenticated via `require_auth()`. Returns `false` if the caller is not
/// an owner or `target` is the primary owner, whose role only changes
/// through [`transfer_owner`].
pub fn grant_role(env: &Env, caller: &Address, target: &Address, role: AdminRole) -> bool {
    if !require_role(env, caller, &AdminRole::Owner) {
        return false;
    }
    if get_owner(env).as_ref() == Some(target) {
        return false;
    }
    set_role(env, target, role);
    true
}

/// Removes every role from `target`.
///
/// Only an `Owner` may call this, and the primary owner cannot be revoked
/// (ownership moves through the two-step transfer instead).
pub fn revoke_role(env: &Env, caller: &Address, target: &Address) -> bool {
    if !require_role(env, caller, &AdminRole::Owner) {
        return false;
    }
    if get_owner(env).as_ref() == Some(target) {
        return false;
    }
    remove_role(env, target);
    true
}

/// Returns all addresses currently holding a role.
pub fn list_admins(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&ROLE_LIST)
        .unwrap_or(Vec::new(env))
}

fn track_admin(env: &Env, admin: &Address) {
    let mut admins = list_admins(env);
    if !admins.contains(admin) {
        admins.push_back(admin.clone());
        env.storage().persistent().set(&ROLE_LIST, &admins);
    }
}

fn untrack_admin(env: &Env, admin: &Address) {
    let admins = list_admins(env);
    let mut kept = Vec::new(env);
    for a in admins.iter() {
        if a != *admin {
            kept.push_back(a);
        }
    }
    env.storage().persistent().set(&ROLE_LIST, &kept);
}
