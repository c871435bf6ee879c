//! Checked fixed-point arithmetic primitives.
//!
//! Every monetary quantity in this crate is a u128 at the canonical
//! 18-decimal scale, so the product of two values can exceed u128. All
//! mul-then-div sequences therefore widen through a 256-bit intermediate
//! and fail closed on overflow instead of wrapping.

use primitive_types::U256;

use crate::error::{Error, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// SAFE ARITHMETIC OPERATIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Safe addition with overflow check
pub fn safe_add(a: u128, b: u128) -> Result<u128> {
    a.checked_add(b).ok_or(Error::Overflow {
        operation: format!("{} + {}", a, b),
    })
}

/// Safe subtraction with underflow check
pub fn safe_sub(a: u128, b: u128) -> Result<u128> {
    a.checked_sub(b).ok_or(Error::Underflow {
        operation: format!("{} - {}", a, b),
    })
}

/// Safe multiplication then division (floor)
///
/// Computes (a * b) / c with a U256 intermediate. Floor division is the
/// only rounding mode used for value flowing to a caller; round-up is
/// reserved for amounts the protocol collects.
pub fn mul_div(a: u128, b: u128, c: u128) -> Result<u128> {
    if c == 0 {
        return Err(Error::InvalidParameter {
            name: "divisor".into(),
            reason: "division by zero".into(),
        });
    }
    let result = U256::from(a) * U256::from(b) / U256::from(c);
    if result > U256::from(u128::MAX) {
        return Err(Error::Overflow {
            operation: format!("({} * {}) / {}", a, b, c),
        });
    }
    Ok(result.as_u128())
}

/// Safe multiplication then division, rounding up
pub fn mul_div_up(a: u128, b: u128, c: u128) -> Result<u128> {
    if c == 0 {
        return Err(Error::InvalidParameter {
            name: "divisor".into(),
            reason: "division by zero".into(),
        });
    }
    let numerator = U256::from(a) * U256::from(b);
    let divisor = U256::from(c);
    let result = (numerator + divisor - U256::one()) / divisor;
    if result > U256::from(u128::MAX) {
        return Err(Error::Overflow {
            operation: format!("ceil(({} * {}) / {})", a, b, c),
        });
    }
    Ok(result.as_u128())
}

// ═══════════════════════════════════════════════════════════════════════════════
// UTILITY FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Calculate the median of a slice (modifies the slice by sorting)
///
/// Even-length slices return the floor mean of the two middle elements.
pub fn median(values: &mut [u128]) -> Option<u128> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        // Average without overflowing the sum
        let lo = values[mid - 1];
        let hi = values[mid];
        Some(lo / 2 + hi / 2 + (lo % 2 + hi % 2) / 2)
    } else {
        Some(values[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::PRECISION_18;

    #[test]
    fn test_safe_arithmetic() {
        assert!(safe_add(1, 2).is_ok());
        assert!(safe_add(u128::MAX, 1).is_err());

        assert!(safe_sub(5, 3).is_ok());
        assert!(safe_sub(3, 5).is_err());
    }

    #[test]
    fn test_mul_div_basic() {
        assert_eq!(mul_div(6, 7, 2).unwrap(), 21);
        assert_eq!(mul_div(7, 1, 2).unwrap(), 3); // floor
        assert_eq!(mul_div_up(7, 1, 2).unwrap(), 4); // ceil
        assert!(mul_div(1, 1, 0).is_err());
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        // 1e18-scaled amount times a 5e22 price would overflow u128 without
        // the U256 intermediate
        let amount = 1_000_000 * PRECISION_18;
        let price = 50_000 * PRECISION_18;
        let value = mul_div(amount, price, PRECISION_18).unwrap();
        assert_eq!(value, 50_000_000_000 * PRECISION_18);
    }

    #[test]
    fn test_mul_div_overflow_rejected() {
        assert!(mul_div(u128::MAX, u128::MAX, 1).is_err());
        assert!(mul_div_up(u128::MAX, u128::MAX, 1).is_err());
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&mut [1, 2, 3]), Some(2));
        assert_eq!(median(&mut [1, 2, 3, 4]), Some(2)); // floor((2+3)/2)
        assert_eq!(median(&mut [3, 1, 2]), Some(2));
        assert_eq!(median(&mut []), None);
        // Mean of middles must not overflow for large values
        assert_eq!(median(&mut [u128::MAX, u128::MAX]), Some(u128::MAX));
    }
}
