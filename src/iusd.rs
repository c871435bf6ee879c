//! Purchasing-power index (iUSD/CPI) adjustment math.
//!
//! Realized inflation is measured as the ratio of the current CPI reading
//! to the previous one; dividing that by a reference monthly growth trend
//! yields the factor by which nominal USD amounts are scaled to preserve
//! real purchasing power. MintLogic consumes the adjustment factor through
//! the reference price it is handed.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::constants::PRECISION_18;
use crate::utils::math::mul_div;

/// Result of a CPI adjustment computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpiAdjustment {
    /// `current_cpi / previous_cpi`, PRECISION_18-scaled
    pub inflation_multiplier: u128,
    /// `inflation_multiplier / monthly_growth_factor`, PRECISION_18-scaled
    pub adjustment_factor: u128,
}

/// Compute the inflation multiplier and purchasing-power adjustment factor.
///
/// Fails with [`Error::InvalidCpi`] when the previous CPI reading or the
/// growth factor is zero.
pub fn adjustment_factor(
    current_cpi: u128,
    previous_cpi: u128,
    monthly_growth_factor: u128,
) -> Result<CpiAdjustment> {
    if previous_cpi == 0 {
        return Err(Error::InvalidCpi {
            reason: "previous CPI is zero".into(),
        });
    }
    if monthly_growth_factor == 0 {
        return Err(Error::InvalidCpi {
            reason: "monthly growth factor is zero".into(),
        });
    }

    let inflation_multiplier = mul_div(current_cpi, PRECISION_18, previous_cpi)?;
    let adjustment = mul_div(inflation_multiplier, PRECISION_18, monthly_growth_factor)?;

    Ok(CpiAdjustment {
        inflation_multiplier,
        adjustment_factor: adjustment,
    })
}

/// Scale a nominal USD amount into purchasing-power-indexed units.
pub fn nominal_to_indexed(amount: u128, adjustment_factor: u128) -> Result<u128> {
    if adjustment_factor == 0 {
        return Err(Error::InvalidCpi {
            reason: "adjustment factor is zero".into(),
        });
    }
    mul_div(amount, PRECISION_18, adjustment_factor)
}

/// Scale a purchasing-power-indexed amount back into nominal USD.
pub fn indexed_to_nominal(amount: u128, adjustment_factor: u128) -> Result<u128> {
    mul_div(amount, adjustment_factor, PRECISION_18)
}
