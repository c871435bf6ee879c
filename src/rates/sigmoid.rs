//! CR- and peg-deviation-driven dynamic interest rate curves.
//!
//! Two independently parameterized piecewise-linear curves share the same
//! CR band geometry: at 150% CR and above the rate sits at `R_MIN`, at
//! exactly 100% it passes through the caller-supplied baseline, and at 20%
//! and below it is pinned at the class maximum (10% senior, 20% junior).
//! The junior curve's slopes are derived from its wider max-min band, so
//! below 100% CR the junior rate always rises at least as fast as the
//! senior rate, and above 100% both converge down to the same `R_MIN`.
//!
//! A secondary layer folds in deviation of the asset's market price from
//! its $1 peg through a bounded saturating response, then clamps to the
//! class bounds. Outputs are in-bounds for arbitrarily extreme inputs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::constants::{
    BPS_BASE, CR_FLOOR, CR_THRESHOLD, CR_UPPER, PEG_RESPONSE_HALF_SAT, PRECISION_18,
    R_MAX_JUNIOR_BPS, R_MAX_SENIOR_BPS, R_MIN_BPS,
};
use crate::utils::math::mul_div;

/// Asset class driving curve sensitivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    /// Primary asset class (BTD)
    Senior,
    /// Subordinate asset class (BTB), wider rate band
    Junior,
}

impl AssetClass {
    /// Maximum annual rate for this class, in basis points
    pub fn r_max_bps(self) -> u64 {
        match self {
            AssetClass::Senior => R_MAX_SENIOR_BPS,
            AssetClass::Junior => R_MAX_JUNIOR_BPS,
        }
    }
}

fn validate_baseline(r_default_bps: u64) -> Result<()> {
    if r_default_bps > BPS_BASE {
        return Err(Error::RateAboveBase {
            rate_bps: r_default_bps,
            base_bps: BPS_BASE,
        });
    }
    Ok(())
}

/// Annual rate for a class at a given collateral ratio.
///
/// The caller-supplied baseline `r_default_bps` is the rate at exactly
/// 100% CR; it is clamped into the class band before the curve is
/// evaluated. Fails only when the baseline exceeds 100% outright.
pub fn rate_for_cr(class: AssetClass, cr: u128, r_default_bps: u64) -> Result<u64> {
    validate_baseline(r_default_bps)?;
    let r_max = class.r_max_bps();
    let r_default = r_default_bps.clamp(R_MIN_BPS, r_max);

    if cr >= CR_UPPER {
        return Ok(R_MIN_BPS);
    }
    if cr <= CR_FLOOR {
        return Ok(r_max);
    }

    let rate = if cr >= CR_THRESHOLD {
        // 100%..150%: descend linearly from the baseline toward R_MIN,
        // junior descending faster in proportion to its wider band
        let delta_num = cr - CR_THRESHOLD;
        let delta_den = CR_UPPER - CR_THRESHOLD;
        let span = (r_default - R_MIN_BPS) as u128;
        let reduction = mul_div(span, delta_num, delta_den)?;
        let reduction = mul_div(
            reduction,
            (r_max - R_MIN_BPS) as u128,
            (R_MAX_SENIOR_BPS - R_MIN_BPS) as u128,
        )?;
        r_default.saturating_sub(reduction as u64)
    } else {
        // 20%..100%: climb linearly from the baseline toward the class
        // maximum, reaching it exactly at the floor
        let drop_num = CR_THRESHOLD - cr;
        let drop_den = CR_THRESHOLD - CR_FLOOR;
        let span = (r_max - r_default) as u128;
        let increase = mul_div(span, drop_num, drop_den)? as u64;
        r_default.saturating_add(increase)
    };

    Ok(rate.clamp(R_MIN_BPS, r_max))
}

/// Annual rate folding in deviation of the market price from the $1 peg.
///
/// Below-peg prices push the rate up toward the class maximum (make
/// holding the asset more attractive); above-peg prices push it down
/// toward `R_MIN`. The response saturates: at a deviation equal to
/// [`PEG_RESPONSE_HALF_SAT`] it delivers half of the available span and
/// approaches the full span asymptotically, so the final clamp to
/// `[R_MIN, R_MAX]` is a backstop rather than a working truncation.
pub fn calculate_x_rate(
    class: AssetClass,
    price: u128,
    cr: u128,
    r_default_bps: u64,
) -> Result<u64> {
    let base = rate_for_cr(class, cr, r_default_bps)?;
    let r_max = class.r_max_bps();

    let deviation = price.abs_diff(PRECISION_18);
    if deviation == 0 {
        return Ok(base);
    }

    let denom = deviation.saturating_add(PEG_RESPONSE_HALF_SAT);
    let rate = if price < PRECISION_18 {
        let span = (r_max - base) as u128;
        let response = mul_div(span, deviation, denom)? as u64;
        base.saturating_add(response)
    } else {
        let span = (base - R_MIN_BPS) as u128;
        let response = mul_div(span, deviation, denom)? as u64;
        base.saturating_sub(response)
    };

    Ok(rate.clamp(R_MIN_BPS, r_max))
}
