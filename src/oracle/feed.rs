//! Single-feed oracle reading and validation.
//!
//! Raw feed answers arrive as signed integers in the feed's own decimal
//! count, together with the timestamp of the last update. This module
//! rejects unusable readings (non-positive answers, stale updates),
//! rescales valid ones into the canonical 18-decimal price scale, and
//! provides the derived price operations (inversion, spot price from
//! reserves) and the pairwise deviation test used by blending.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::precision::to_canonical;
use crate::utils::constants::{BPS_BASE, PRECISION_18};

/// One raw oracle reading as supplied by a feed collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedReading {
    /// Raw answer in the feed's native decimals; non-positive is invalid
    pub answer: i128,
    /// Decimal count of the raw answer
    pub decimals: u32,
    /// Unix timestamp of the feed's last update
    pub updated_at: u64,
}

/// Validate a raw feed answer and rescale it to the canonical price scale.
///
/// Fails with [`Error::InvalidPrice`] for zero or negative answers.
pub fn read_and_scale(raw_answer: i128, feed_decimals: u32) -> Result<u128> {
    if raw_answer <= 0 {
        return Err(Error::InvalidPrice { raw: raw_answer });
    }
    to_canonical(raw_answer as u128, feed_decimals)
}

/// Reject a reading whose last update is older than `max_age` seconds.
pub fn validate_freshness(updated_at: u64, now: u64, max_age: u64) -> Result<()> {
    let age = now.saturating_sub(updated_at);
    if age > max_age {
        return Err(Error::StalePrice { age, max_age });
    }
    Ok(())
}

/// Full feed read: freshness check, validity check, canonical rescale.
pub fn read_feed(reading: &FeedReading, now: u64, max_age: u64) -> Result<u128> {
    validate_freshness(reading.updated_at, now, max_age)?;
    read_and_scale(reading.answer, reading.decimals)
}

/// Invert a canonical price: `1e18 * 1e18 / p`.
///
/// Fails with [`Error::InvalidPrice`] on a zero price.
pub fn inverse_price(price: u128) -> Result<u128> {
    if price == 0 {
        return Err(Error::InvalidPrice { raw: 0 });
    }
    crate::utils::math::mul_div(PRECISION_18, PRECISION_18, price)
}

/// Spot price of asset B denominated in asset A, from pool reserves.
///
/// Both reserves are normalized to the canonical scale before dividing,
/// so assets with different native decimals compare correctly. Fails if
/// either reserve normalizes to zero.
pub fn spot_price_from_reserves(
    reserve_a: u128,
    reserve_b: u128,
    decimals_a: u32,
    decimals_b: u32,
) -> Result<u128> {
    let norm_a = to_canonical(reserve_a, decimals_a)?;
    let norm_b = to_canonical(reserve_b, decimals_b)?;
    if norm_a == 0 || norm_b == 0 {
        return Err(Error::InvalidParameter {
            name: "reserves".into(),
            reason: "reserve normalizes to zero".into(),
        });
    }
    crate::utils::math::mul_div(norm_a, PRECISION_18, norm_b)
}

/// Deviation between two prices in basis points, relative to their mean.
///
/// Returns `None` when either input is zero: a ratio against zero is
/// undefined, and callers treat it as out of bounds rather than an error.
pub fn deviation_bps(a: u128, b: u128) -> Option<u64> {
    if a == 0 || b == 0 {
        return None;
    }
    let diff = a.abs_diff(b);
    // Widen the mean: a + b can exceed u128
    let avg = (U256::from(a) + U256::from(b)) / 2;
    // diff <= a + b, so deviation is at most 20000 bps and fits u64
    let dev = U256::from(diff) * U256::from(BPS_BASE) / avg;
    Some(dev.as_u64())
}

/// Whether two prices lie within `max_bps` of each other.
///
/// Returns `false` (not an error) when either input is zero.
pub fn deviation_within(a: u128, b: u128, max_bps: u64) -> bool {
    match deviation_bps(a, b) {
        Some(dev) => dev <= max_bps,
        None => false,
    }
}
