//! Protocol constants and magic numbers.
//!
//! All protocol-wide constants are defined here for easy auditing and
//! modification. Everything downstream of an oracle price or a token
//! amount is expressed at the canonical 18-decimal scale.

// ═══════════════════════════════════════════════════════════════════════════════
// FIXED-POINT SCALES
// ═══════════════════════════════════════════════════════════════════════════════

/// Canonical fixed-point scale: 10^18 (1e18 = 1.0)
pub const PRECISION_18: u128 = 1_000_000_000_000_000_000;

/// Canonical decimal count every native amount is normalized into
pub const CANONICAL_DECIMALS: u32 = 18;

/// Largest supported native decimal count (10^38 still fits in u128)
pub const MAX_TOKEN_DECIMALS: u32 = 38;

/// Basis points base (10000 = 100%)
pub const BPS_BASE: u64 = 10_000;

/// Reward accumulator scale: pending = staked * acc_per_share / 1e12
pub const ACC_REWARD_PRECISION: u128 = 1_000_000_000_000;

// ═══════════════════════════════════════════════════════════════════════════════
// TOKEN DECIMALS
// ═══════════════════════════════════════════════════════════════════════════════

/// WBTC native decimals (satoshi-style, 8 decimals)
pub const WBTC_DECIMALS: u32 = 8;

/// Standard stable-asset decimals (USDC/USDT style)
pub const STABLE_DECIMALS: u32 = 6;

/// Protocol-native token decimals (BTD, BTB, BRS)
pub const PROTOCOL_TOKEN_DECIMALS: u32 = 18;

// ═══════════════════════════════════════════════════════════════════════════════
// TIME CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Seconds in a year (365 days), used for annualized rate accrual
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

// ═══════════════════════════════════════════════════════════════════════════════
// RATE CURVE CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// CR at and above which the rate curve sits at its minimum - 150%
pub const CR_UPPER: u128 = 1_500_000_000_000_000_000;

/// CR at which the rate curve passes through the caller baseline - 100%
pub const CR_THRESHOLD: u128 = PRECISION_18;

/// CR at and below which the rate curve is pinned at its maximum - 20%
pub const CR_FLOOR: u128 = 200_000_000_000_000_000;

/// Minimum annual rate, both asset classes - 2%
pub const R_MIN_BPS: u64 = 200;

/// Maximum annual rate, senior (primary) asset class - 10%
pub const R_MAX_SENIOR_BPS: u64 = 1_000;

/// Maximum annual rate, junior (subordinate) asset class - 20%
pub const R_MAX_JUNIOR_BPS: u64 = 2_000;

/// Peg deviation at which the x-rate response reaches half saturation - 5%
pub const PEG_RESPONSE_HALF_SAT: u128 = 50_000_000_000_000_000;

// ═══════════════════════════════════════════════════════════════════════════════
// ORACLE CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Minimum number of sources required for multi-source blending
pub const MIN_BLEND_SOURCES: usize = 2;

/// Default maximum allowed deviation of a source from the median - 5%
pub const MAX_PRICE_DEVIATION_BPS: u64 = 500;

/// Default maximum price staleness in seconds (1 hour)
pub const MAX_PRICE_STALENESS_SECS: u64 = 3_600;

// ═══════════════════════════════════════════════════════════════════════════════
// MINT / REDEEM LIMITS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default minimum net issuance per mint - 1 BTD
pub const MIN_ISSUANCE: u128 = PRECISION_18;

/// Default minimum net redemption - 1 BTD
pub const MIN_REDEMPTION: u128 = PRECISION_18;
