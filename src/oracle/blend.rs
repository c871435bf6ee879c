//! Multi-source price blending.
//!
//! Sources are blended by statistical median, then every source must sit
//! within a deviation bound of that median. The blend is order-invariant
//! and the result is always bounded by the minimum and maximum source.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::oracle::feed::{deviation_bps, deviation_within};
use crate::utils::constants::MIN_BLEND_SOURCES;
use crate::utils::math::median;

/// Middle value of three, independent of argument order.
pub fn median3(a: u128, b: u128, c: u128) -> u128 {
    a.max(b).min(a.min(b).max(c))
}

/// Blend at least two price sources into a deviation-checked median.
///
/// Fails with [`Error::InsufficientSources`] below two sources and with
/// [`Error::ExcessiveDeviation`] when any source lies further than
/// `max_deviation_bps` from the computed median. A zero source always
/// fails the deviation check.
pub fn blend_multi_source(prices: &[u128], max_deviation_bps: u64) -> Result<u128> {
    if prices.len() < MIN_BLEND_SOURCES {
        return Err(Error::InsufficientSources {
            got: prices.len(),
            need: MIN_BLEND_SOURCES,
        });
    }

    let mut sorted = prices.to_vec();
    // len >= 2, so the median exists
    let blended = median(&mut sorted).expect("non-empty price set");
    trace!(sources = prices.len(), blended, "blended price sources");

    for &price in prices {
        match deviation_bps(price, blended) {
            Some(dev) if dev <= max_deviation_bps => {}
            Some(dev) => {
                debug!(price, blended, deviation_bps = dev, "source out of bounds");
                return Err(Error::ExcessiveDeviation {
                    deviation_bps: dev,
                    max_deviation_bps,
                });
            }
            // Zero against the median is undefined; treat as maximal deviation
            None => {
                return Err(Error::ExcessiveDeviation {
                    deviation_bps: u64::MAX,
                    max_deviation_bps,
                })
            }
        }
    }

    Ok(blended)
}

/// Soft variant of [`blend_multi_source`]'s bound check.
///
/// Returns `false` rather than failing when any source is out of bounds,
/// and `false` below two sources (a soft check must never pass where the
/// hard check would fail).
pub fn validate_all_within_bounds(prices: &[u128], max_deviation_bps: u64) -> bool {
    if prices.len() < MIN_BLEND_SOURCES {
        return false;
    }
    let mut sorted = prices.to_vec();
    let blended = match median(&mut sorted) {
        Some(m) => m,
        None => return false,
    };
    prices
        .iter()
        .all(|&p| deviation_within(p, blended, max_deviation_bps))
}
