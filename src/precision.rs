//! Native/canonical decimal scale conversion.
//!
//! Token amounts arrive in their native decimal count (8 for WBTC-style
//! assets, 6 for standard stables, 18 for protocol tokens) and are
//! normalized into the canonical 18-decimal scale before any cross-asset
//! arithmetic. Scaling is by an exact power of ten, so the round-trip
//! native -> canonical -> native is lossless for decimals <= 18.

use crate::error::{Error, Result};
use crate::utils::constants::{CANONICAL_DECIMALS, MAX_TOKEN_DECIMALS};

/// Power of ten as u128, valid for exponents up to [`MAX_TOKEN_DECIMALS`]
fn pow10(exp: u32) -> u128 {
    debug_assert!(exp <= MAX_TOKEN_DECIMALS);
    10u128.pow(exp)
}

fn check_decimals(decimals: u32) -> Result<()> {
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(Error::UnsupportedDecimals {
            decimals,
            max: MAX_TOKEN_DECIMALS,
        });
    }
    Ok(())
}

/// Convert a native-precision amount into the canonical 18-decimal scale.
///
/// For `decimals < 18` the amount is multiplied by `10^(18 - decimals)`
/// (checked); for `decimals > 18` it is floor-divided by
/// `10^(decimals - 18)`; at 18 decimals it is returned unchanged.
pub fn to_canonical(amount: u128, decimals: u32) -> Result<u128> {
    check_decimals(decimals)?;
    match decimals.cmp(&CANONICAL_DECIMALS) {
        std::cmp::Ordering::Less => {
            let factor = pow10(CANONICAL_DECIMALS - decimals);
            amount.checked_mul(factor).ok_or(Error::Overflow {
                operation: format!("to_canonical({}, {})", amount, decimals),
            })
        }
        std::cmp::Ordering::Greater => Ok(amount / pow10(decimals - CANONICAL_DECIMALS)),
        std::cmp::Ordering::Equal => Ok(amount),
    }
}

/// Convert a canonical 18-decimal amount back into native precision.
///
/// Inverse of [`to_canonical`]: floor-divides for `decimals < 18`,
/// multiplies (checked) for `decimals > 18`.
pub fn from_canonical(amount: u128, decimals: u32) -> Result<u128> {
    check_decimals(decimals)?;
    match decimals.cmp(&CANONICAL_DECIMALS) {
        std::cmp::Ordering::Less => Ok(amount / pow10(CANONICAL_DECIMALS - decimals)),
        std::cmp::Ordering::Greater => {
            let factor = pow10(decimals - CANONICAL_DECIMALS);
            amount.checked_mul(factor).ok_or(Error::Overflow {
                operation: format!("from_canonical({}, {})", amount, decimals),
            })
        }
        std::cmp::Ordering::Equal => Ok(amount),
    }
}
