//! Checked fixed-point helpers.
//!
//! Reward indices are stored scaled by [`PRECISION`]; fee discounts are
//! expressed in basis points. Every helper returns `None` instead of
//! wrapping or panicking so callers can surface a typed overflow error.

use soroban_sdk::{Env, I256};

/// Fixed-point scale for per-share reward indices (10^18).
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Denominator for basis-point quantities.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// `a * b / denominator`, rounding toward zero.
///
/// The product is widened to 256 bits when it does not fit in `i128`, so
/// only a quotient outside `i128` is reported. Returns `None` on that or on
/// a zero denominator.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Option<i128> {
    if denominator == 0 {
        return None;
    }
    if let Some(product) = a.checked_mul(b) {
        return product.checked_div(denominator);
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
}

/// Scale a raw amount up into index space: `amount * PRECISION / per`.
pub fn to_index(env: &Env, amount: i128, per: i128) -> Option<i128> {
    mul_div(env, amount, PRECISION, per)
}

/// Project an index back onto a share count: `shares * index / PRECISION`.
pub fn from_index(env: &Env, shares: i128, index: i128) -> Option<i128> {
    mul_div(env, shares, index, PRECISION)
}

/// `amount * bps / 10_000`.
pub fn bps_of(env: &Env, amount: i128, bps: u32) -> Option<i128> {
    mul_div(env, amount, bps as i128, BPS_DENOMINATOR)
}
