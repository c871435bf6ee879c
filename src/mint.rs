//! WBTC -> BTD mint sizing.
//!
//! One pure transition: collateral in, issuance out. The reference price
//! carries the purchasing-power adjustment (pass `1e18` when no inflation
//! adjustment applies); the dust floor is explicit configuration from the
//! governance collaborator, never ambient state.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::precision::to_canonical;
use crate::rates::interest::fee_amount;
use crate::utils::constants::PRECISION_18;
use crate::utils::math::{mul_div, safe_add, safe_sub};

/// Inputs for one mint computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintInputs {
    /// Collateral amount in native units (e.g. 1e8 = 1 WBTC)
    pub collateral_amount: u128,
    /// Native decimal count of the collateral asset
    pub collateral_decimals: u32,
    /// Collateral USD price, PRECISION_18-scaled
    pub collateral_price: u128,
    /// Purchasing-power-adjusted BTD reference price (1e18 = $1)
    pub reference_price: u128,
    /// BTD supply before this mint
    pub current_supply: u128,
    /// Mint fee in basis points
    pub fee_bps: u64,
    /// Minimum net issuance (dust floor)
    pub min_issuance: u128,
}

/// Outputs of one mint computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintOutputs {
    /// Gross BTD issuance before the fee
    pub btd_gross: u128,
    /// Fee charged, in BTD
    pub btd_fee: u128,
    /// Net BTD minted to the depositor
    pub btd_to_mint: u128,
    /// BTD supply after this mint (gross, the fee is minted to treasury)
    pub new_total_supply: u128,
}

/// Size a mint: `gross = normalize(collateral) * price / reference_price`,
/// then extract the fee.
///
/// Fails with [`Error::BelowMinimumAmount`] when the net issuance is under
/// the dust floor. Doubling the collateral doubles the net issuance within
/// rounding tolerance.
pub fn compute_mint(inputs: &MintInputs) -> Result<MintOutputs> {
    if inputs.collateral_amount == 0 {
        return Err(Error::ZeroAmount);
    }
    if inputs.collateral_price == 0 {
        return Err(Error::InvalidPrice { raw: 0 });
    }
    if inputs.reference_price == 0 {
        return Err(Error::InvalidPrice { raw: 0 });
    }

    let canonical = to_canonical(inputs.collateral_amount, inputs.collateral_decimals)?;
    let collateral_usd = mul_div(canonical, inputs.collateral_price, PRECISION_18)?;
    let btd_gross = mul_div(collateral_usd, PRECISION_18, inputs.reference_price)?;

    let btd_fee = fee_amount(btd_gross, inputs.fee_bps)?;
    let btd_to_mint = safe_sub(btd_gross, btd_fee)?;

    if btd_to_mint < inputs.min_issuance {
        return Err(Error::BelowMinimumAmount {
            amount: btd_to_mint,
            minimum: inputs.min_issuance,
        });
    }

    let new_total_supply = safe_add(inputs.current_supply, btd_gross)?;
    trace!(btd_gross, btd_fee, btd_to_mint, "sized mint");

    Ok(MintOutputs {
        btd_gross,
        btd_fee,
        btd_to_mint,
        new_total_supply,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{MIN_ISSUANCE, WBTC_DECIMALS};

    fn base_inputs() -> MintInputs {
        MintInputs {
            collateral_amount: 100_000_000, // 1 WBTC
            collateral_decimals: WBTC_DECIMALS,
            collateral_price: 50_000 * PRECISION_18,
            reference_price: PRECISION_18,
            current_supply: 0,
            fee_bps: 50,
            min_issuance: MIN_ISSUANCE,
        }
    }

    #[test]
    fn test_mint_one_wbtc() {
        // 1 WBTC at $50,000 with a 0.5% fee
        let out = compute_mint(&base_inputs()).unwrap();
        assert_eq!(out.btd_gross, 50_000 * PRECISION_18);
        assert_eq!(out.btd_fee, 250 * PRECISION_18);
        assert_eq!(out.btd_to_mint, 49_750 * PRECISION_18);
        assert_eq!(out.new_total_supply, 50_000 * PRECISION_18);
    }

    #[test]
    fn test_fee_plus_net_equals_gross() {
        let out = compute_mint(&base_inputs()).unwrap();
        assert_eq!(out.btd_to_mint + out.btd_fee, out.btd_gross);
    }

    #[test]
    fn test_zero_fee_means_zero_fee() {
        let mut inputs = base_inputs();
        inputs.fee_bps = 0;
        let out = compute_mint(&inputs).unwrap();
        assert_eq!(out.btd_fee, 0);
        assert_eq!(out.btd_to_mint, out.btd_gross);
    }

    #[test]
    fn test_linearity() {
        let single = compute_mint(&base_inputs()).unwrap();
        let mut doubled = base_inputs();
        doubled.collateral_amount *= 2;
        let double = compute_mint(&doubled).unwrap();
        assert_eq!(double.btd_to_mint, 2 * single.btd_to_mint);
    }

    #[test]
    fn test_reference_price_shrinks_issuance() {
        // A 2x adjustment factor halves nominal issuance
        let mut inputs = base_inputs();
        inputs.reference_price = 2 * PRECISION_18;
        let out = compute_mint(&inputs).unwrap();
        assert_eq!(out.btd_gross, 25_000 * PRECISION_18);
    }

    #[test]
    fn test_dust_mint_rejected() {
        let mut inputs = base_inputs();
        inputs.collateral_amount = 1; // 1 satoshi
        assert!(matches!(
            compute_mint(&inputs),
            Err(Error::BelowMinimumAmount { .. })
        ));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut inputs = base_inputs();
        inputs.collateral_amount = 0;
        assert!(matches!(compute_mint(&inputs), Err(Error::ZeroAmount)));

        let mut inputs = base_inputs();
        inputs.collateral_price = 0;
        assert!(compute_mint(&inputs).is_err());

        let mut inputs = base_inputs();
        inputs.reference_price = 0;
        assert!(compute_mint(&inputs).is_err());

        let mut inputs = base_inputs();
        inputs.fee_bps = 10_001;
        assert!(matches!(
            compute_mint(&inputs),
            Err(Error::RateAboveBase { .. })
        ));
    }

    #[test]
    fn test_supply_tracks_gross() {
        let mut inputs = base_inputs();
        inputs.current_supply = 1_000_000 * PRECISION_18;
        let out = compute_mint(&inputs).unwrap();
        assert_eq!(
            out.new_total_supply,
            1_000_000 * PRECISION_18 + out.btd_gross
        );
    }
}
