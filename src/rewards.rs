//! Staking reward emission and accumulator math.
//!
//! Pools accrue reward through a monotone accumulator-per-share index;
//! each depositor's pending reward is the difference between their staked
//! entitlement and the reward debt snapshotted at their last settlement.
//! The pool owns and persists all of that state; these routines only
//! compute the next values.

use primitive_types::U256;

use crate::error::{Error, Result};
use crate::utils::constants::ACC_REWARD_PRECISION;
use crate::utils::math::mul_div;

/// Reward emitted to one pool over a duration.
///
/// `rate_per_second * duration * alloc_points / total_alloc_points`,
/// always at most `rate_per_second * duration`.
pub fn emission_for(
    duration: u64,
    rate_per_second: u128,
    alloc_points: u64,
    total_alloc_points: u64,
) -> Result<u128> {
    if total_alloc_points == 0 {
        return Err(Error::InvalidParameter {
            name: "total_alloc_points".into(),
            reason: "cannot be zero".into(),
        });
    }
    if alloc_points > total_alloc_points {
        return Err(Error::InvalidParameter {
            name: "alloc_points".into(),
            reason: "exceeds total allocation".into(),
        });
    }

    let gross = U256::from(rate_per_second) * U256::from(duration);
    let share = gross * U256::from(alloc_points) / U256::from(total_alloc_points);
    if share > U256::from(u128::MAX) {
        return Err(Error::Overflow {
            operation: format!("emission_for({}, {})", duration, rate_per_second),
        });
    }
    Ok(share.as_u128())
}

/// Clamp a proposed reward against the remaining mintable supply.
///
/// Zero once the cap is reached or exceeded.
pub fn clamp_to_max(already_minted: u128, proposed_reward: u128, max_supply: u128) -> u128 {
    proposed_reward.min(max_supply.saturating_sub(already_minted))
}

/// Next accumulator-per-share value after distributing `reward`.
///
/// No-op at zero stake: the caller treats zero-stake periods as accrual
/// skipped and carries the undistributed reward forward itself.
pub fn acc_reward_per_share(current: u128, reward: u128, total_staked: u128) -> Result<u128> {
    if total_staked == 0 {
        return Ok(current);
    }
    let delta = mul_div(reward, ACC_REWARD_PRECISION, total_staked)?;
    current.checked_add(delta).ok_or(Error::Overflow {
        operation: "acc_reward_per_share".into(),
    })
}
