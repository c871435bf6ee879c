//! BTD -> collateral redemption with the compensation waterfall.
//!
//! A healthy redemption (CR at or above 100%) pays entirely in WBTC. An
//! underwater redemption haircuts the WBTC portion in proportion to CR and
//! covers the USD shortfall through a strict waterfall: BTB whenever its
//! price holds at or above the protocol floor, BRS otherwise. The ordering
//! (exhaust BTB before touching BRS, no proportional blending) is an
//! economic policy preserved from the protocol design.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::precision::from_canonical;
use crate::rates::interest::fee_amount;
use crate::utils::constants::PRECISION_18;
use crate::utils::math::{mul_div, safe_sub};

/// Inputs for one redemption computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemInputs {
    /// BTD amount being redeemed, PRECISION_18-scaled
    pub btd_amount: u128,
    /// Purchasing-power-adjusted BTD reference price (1e18 = $1)
    pub reference_price: u128,
    /// Collateral USD price, PRECISION_18-scaled
    pub collateral_price: u128,
    /// Native decimal count of the collateral asset
    pub collateral_decimals: u32,
    /// Current collateral ratio, PRECISION_18-scaled
    pub cr: u128,
    /// BTB (compensation asset A) USD price
    pub btb_price: u128,
    /// BRS (compensation asset B) USD price
    pub brs_price: u128,
    /// Protocol floor under which BTB stops being the compensation asset
    pub min_btb_price: u128,
    /// Redemption fee in basis points
    pub fee_bps: u64,
    /// Minimum net redemption (dust floor)
    pub min_redemption: u128,
}

/// Outputs of one redemption computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemOutputs {
    /// Fee charged, in BTD
    pub btd_fee: u128,
    /// Net BTD retired after the fee
    pub btd_net: u128,
    /// WBTC paid out, in native units
    pub wbtc_out: u128,
    /// BTB paid out to cover the shortfall, PRECISION_18-scaled
    pub btb_out: u128,
    /// BRS paid out to cover the residual shortfall, PRECISION_18-scaled
    pub brs_out: u128,
    /// USD shortfall the compensation assets covered
    pub shortfall_usd: u128,
}

/// Compute a redemption: fee first, dust floor second, then the healthy
/// path or the CR-scaled waterfall.
///
/// Fails with [`Error::InvalidSecondaryPrice`] when a shortfall must be
/// covered but the asset that should cover it is unpriced.
pub fn compute_redeem(inputs: &RedeemInputs) -> Result<RedeemOutputs> {
    if inputs.btd_amount == 0 {
        return Err(Error::ZeroAmount);
    }
    if inputs.collateral_price == 0 {
        return Err(Error::InvalidPrice { raw: 0 });
    }
    if inputs.reference_price == 0 {
        return Err(Error::InvalidPrice { raw: 0 });
    }

    let btd_fee = fee_amount(inputs.btd_amount, inputs.fee_bps)?;
    let btd_net = safe_sub(inputs.btd_amount, btd_fee)?;
    if btd_net < inputs.min_redemption {
        return Err(Error::BelowMinimumAmount {
            amount: btd_net,
            minimum: inputs.min_redemption,
        });
    }

    let net_usd = mul_div(btd_net, inputs.reference_price, PRECISION_18)?;

    if inputs.cr >= PRECISION_18 {
        // Healthy: the full net value is paid in collateral
        let wbtc_canonical = mul_div(net_usd, PRECISION_18, inputs.collateral_price)?;
        let wbtc_out = from_canonical(wbtc_canonical, inputs.collateral_decimals)?;
        trace!(btd_net, wbtc_out, "healthy redemption");
        return Ok(RedeemOutputs {
            btd_fee,
            btd_net,
            wbtc_out,
            btb_out: 0,
            brs_out: 0,
            shortfall_usd: 0,
        });
    }

    // Underwater: the collateral portion is haircut in proportion to CR
    let collateral_usd = mul_div(net_usd, inputs.cr, PRECISION_18)?;
    let wbtc_canonical = mul_div(collateral_usd, PRECISION_18, inputs.collateral_price)?;
    let wbtc_out = from_canonical(wbtc_canonical, inputs.collateral_decimals)?;

    let shortfall_usd = safe_sub(net_usd, collateral_usd)?;
    let mut residual_usd = shortfall_usd;
    let mut btb_out = 0u128;
    let mut brs_out = 0u128;

    if residual_usd > 0 {
        // Waterfall stage 1: BTB, while its price holds the floor
        if inputs.btb_price >= inputs.min_btb_price && inputs.btb_price > 0 {
            btb_out = mul_div(residual_usd, PRECISION_18, inputs.btb_price)?;
            residual_usd = 0;
        } else {
            debug!(
                btb_price = inputs.btb_price,
                floor = inputs.min_btb_price,
                "BTB below floor, falling through to BRS"
            );
        }

        // Waterfall stage 2: BRS covers whatever BTB did not
        if residual_usd > 0 {
            if inputs.brs_price == 0 {
                return Err(Error::InvalidSecondaryPrice);
            }
            brs_out = mul_div(residual_usd, PRECISION_18, inputs.brs_price)?;
        }
    }

    trace!(
        btd_net,
        wbtc_out,
        btb_out,
        brs_out,
        shortfall_usd,
        "underwater redemption"
    );

    Ok(RedeemOutputs {
        btd_fee,
        btd_net,
        wbtc_out,
        btb_out,
        brs_out,
        shortfall_usd,
    })
}
