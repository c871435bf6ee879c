//! Per-second interest accrual and fee extraction.
//!
//! All "memory" (last accrual timestamp, accumulated per-share index,
//! per-depositor reward debt) is owned by the calling pool; these routines
//! only transform the snapshot they are handed.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::constants::{ACC_REWARD_PRECISION, BPS_BASE, PRECISION_18, SECONDS_PER_YEAR};
use crate::utils::math::{mul_div, safe_sub};

fn validate_bps(rate_bps: u64) -> Result<()> {
    if rate_bps > BPS_BASE {
        return Err(Error::RateAboveBase {
            rate_bps,
            base_bps: BPS_BASE,
        });
    }
    Ok(())
}

/// PRECISION_18-scaled per-share interest index delta for an elapsed period.
///
/// `rate * elapsed / (BPS_BASE * SECONDS_PER_YEAR)`, zero if either
/// factor is zero.
pub fn interest_per_share_delta(annual_rate_bps: u64, seconds_elapsed: u64) -> Result<u128> {
    validate_bps(annual_rate_bps)?;
    if annual_rate_bps == 0 || seconds_elapsed == 0 {
        return Ok(0);
    }
    // bps * elapsed * 1e18 comfortably fits U256
    let num = U256::from(annual_rate_bps) * U256::from(seconds_elapsed) * U256::from(PRECISION_18);
    let den = U256::from(BPS_BASE) * U256::from(SECONDS_PER_YEAR);
    Ok((num / den).as_u128())
}

/// Simple interest accrued on a principal over an elapsed period.
///
/// `principal * rate * elapsed / (BPS_BASE * SECONDS_PER_YEAR)`, floored.
pub fn accrued_interest(
    principal: u128,
    annual_rate_bps: u64,
    seconds_elapsed: u64,
) -> Result<u128> {
    validate_bps(annual_rate_bps)?;
    if principal == 0 || annual_rate_bps == 0 || seconds_elapsed == 0 {
        return Ok(0);
    }
    let num = U256::from(principal)
        * U256::from(annual_rate_bps)
        * U256::from(seconds_elapsed);
    let den = U256::from(BPS_BASE) * U256::from(SECONDS_PER_YEAR);
    let result = num / den;
    if result > U256::from(u128::MAX) {
        return Err(Error::Overflow {
            operation: format!(
                "accrued_interest({}, {}, {})",
                principal, annual_rate_bps, seconds_elapsed
            ),
        });
    }
    Ok(result.as_u128())
}

/// Reward owed to a staker, clamped at zero rather than underflowing.
///
/// `max(0, staked * acc_per_share / 1e12 - reward_debt)`.
pub fn pending_reward(staked_amount: u128, acc_per_share: u128, reward_debt: u128) -> Result<u128> {
    let entitled = mul_div(staked_amount, acc_per_share, ACC_REWARD_PRECISION)?;
    Ok(entitled.saturating_sub(reward_debt))
}

/// Fee on an amount at a basis-point rate; always at most the amount.
pub fn fee_amount(amount: u128, fee_bps: u64) -> Result<u128> {
    validate_bps(fee_bps)?;
    mul_div(amount, fee_bps as u128, BPS_BASE as u128)
}

/// Split of one withdrawal into interest and principal components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalSplit {
    /// Portion of the withdrawal paid out of pending interest
    pub interest_share: u128,
    /// Portion paid out of principal
    pub principal_share: u128,
}

/// Split a withdrawal into its interest and principal shares.
///
/// The interest share is the proportional slice of `pending_interest`
/// corresponding to `requested / total_available`; the principal share is
/// the exact remainder, so `interest + principal == requested` always.
/// Flooring the interest slice means any rounding residue lands on the
/// principal side, never over-crediting interest.
pub fn split_withdrawal(
    requested_amount: u128,
    pending_interest: u128,
    total_available: u128,
) -> Result<WithdrawalSplit> {
    if total_available == 0 {
        return Err(Error::InvalidParameter {
            name: "total_available".into(),
            reason: "cannot split against an empty pool".into(),
        });
    }
    if requested_amount > total_available {
        return Err(Error::InvalidParameter {
            name: "requested_amount".into(),
            reason: "exceeds total available".into(),
        });
    }

    let interest_share =
        mul_div(pending_interest, requested_amount, total_available)?.min(requested_amount);
    let principal_share = safe_sub(requested_amount, interest_share)?;

    Ok(WithdrawalSplit {
        interest_share,
        principal_share,
    })
}
