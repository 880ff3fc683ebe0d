//! Program-wide constants.

/// Full linear-vest duration in seconds (30 days). The per-second release
/// rate is `total_amount / FULL_VEST_DURATION_SECS`, integer division.
pub const FULL_VEST_DURATION_SECS: i64 = 30 * 24 * 60 * 60;

/// Max entitlement records stored in the ledger PDA.
pub const MAX_BENEFICIARIES: usize = 64;

/// Max addresses stored in the blacklist PDA.
pub const MAX_BLACKLIST: usize = 64;

/// Max consumed nonces remembered per beneficiary (signature gate).
/// Bounds the number of re-admissions a single wallet can go through.
pub const MAX_NONCES_PER_BENEFICIARY: usize = 8;
