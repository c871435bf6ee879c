//! Collateral and liability valuation.
//!
//! The collateral ratio (CR) is the PRECISION_18-scaled ratio of collateral
//! USD value to liability USD value; `1e18` means exactly 100% backed.
//! A debt-free system deliberately reports a neutral CR of exactly 100%
//! rather than an "infinite" sentinel, so downstream rate curves see it at
//! their baseline point. Zero collateral against positive liabilities is
//! the degenerate maximal-risk case and reports a CR of zero.

use crate::error::{Error, Result};
use crate::precision::to_canonical;
use crate::utils::constants::PRECISION_18;
use crate::utils::math::{mul_div, safe_add};

/// USD value of a native-precision collateral amount at a canonical price.
pub fn collateral_value(
    collateral_amount_native: u128,
    collateral_decimals: u32,
    collateral_price: u128,
) -> Result<u128> {
    let canonical = to_canonical(collateral_amount_native, collateral_decimals)?;
    mul_div(canonical, collateral_price, PRECISION_18)
}

/// Combined USD value of both liability classes at the reference price.
///
/// `secondary_liability_equivalent` is the subordinate class already
/// expressed in primary-liability units; the reference price is the
/// (purchasing-power-adjusted) USD value of one liability unit.
pub fn liability_value(
    primary_liability_supply: u128,
    secondary_liability_equivalent: u128,
    reference_price: u128,
) -> Result<u128> {
    let total = safe_add(primary_liability_supply, secondary_liability_equivalent)?;
    mul_div(total, reference_price, PRECISION_18)
}

/// Collateral ratio, PRECISION_18-scaled.
///
/// Returns exactly `1e18` when the total liability value is zero: the
/// safe neutral default that signals neither false health nor false
/// danger and never divides by zero.
pub fn collateral_ratio(
    collateral_amount_native: u128,
    collateral_decimals: u32,
    collateral_price: u128,
    primary_liability_supply: u128,
    secondary_liability_equivalent: u128,
    reference_price: u128,
) -> Result<u128> {
    let lv = liability_value(
        primary_liability_supply,
        secondary_liability_equivalent,
        reference_price,
    )?;
    if lv == 0 {
        return Ok(PRECISION_18);
    }
    let cv = collateral_value(collateral_amount_native, collateral_decimals, collateral_price)?;
    mul_div(cv, PRECISION_18, lv)
}

/// USD surplus above 100% backing, clamped to zero when undercollateralized.
pub fn max_redeemable_usd(collateral_value: u128, liability_value: u128) -> u128 {
    collateral_value.saturating_sub(liability_value)
}

/// Surplus above 100% backing expressed in BTD at the reference price.
pub fn max_redeemable_btd(
    collateral_value: u128,
    liability_value: u128,
    reference_price: u128,
) -> Result<u128> {
    if reference_price == 0 {
        return Err(Error::InvalidPrice { raw: 0 });
    }
    let surplus = max_redeemable_usd(collateral_value, liability_value);
    mul_div(surplus, PRECISION_18, reference_price)
}
