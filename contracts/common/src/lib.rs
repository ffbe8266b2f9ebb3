//! Shared utilities for the launchpad contract suite.
//!
//! This crate provides:
//! - [`admin_tiers`]: the role registry used to gate administrator actions.
//! - [`math`]: checked fixed-point helpers for reward accounting.

#![no_std]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod admin_tiers;
pub mod math;

pub use admin_tiers::*;
pub use math::*;
