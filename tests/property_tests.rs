//! Property tests for the BTD core invariants.
//!
//! Each property mirrors an invariant the protocol relies on: fees never
//! exceed principal, ratios never amplify, blending is order-invariant and
//! bounded, accumulators never move backwards.

use proptest::prelude::*;

use btd_core::collateral::collateral_ratio;
use btd_core::mint::{compute_mint, MintInputs};
use btd_core::oracle::blend::{blend_multi_source, median3, validate_all_within_bounds};
use btd_core::oracle::feed::deviation_within;
use btd_core::precision::{from_canonical, to_canonical};
use btd_core::rates::interest::{fee_amount, split_withdrawal};
use btd_core::rates::sigmoid::{calculate_x_rate, rate_for_cr, AssetClass};
use btd_core::redeem::{compute_redeem, RedeemInputs};
use btd_core::rewards::{acc_reward_per_share, emission_for};
use btd_core::utils::constants::{BPS_BASE, PRECISION_18, R_MIN_BPS, WBTC_DECIMALS};

const WBTC_UNIT: u128 = 100_000_000;

fn asset_class() -> impl Strategy<Value = AssetClass> {
    prop_oneof![Just(AssetClass::Senior), Just(AssetClass::Junior)]
}

proptest! {
    // ═══════════════════════════════════════════════════════════════════
    // Fee conservation
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn prop_fee_never_exceeds_amount(
        amount in 0u128..u128::MAX / 10_000,
        fee_bps in 0u64..=BPS_BASE,
    ) {
        let fee = fee_amount(amount, fee_bps).unwrap();
        prop_assert!(fee <= amount);
        if fee_bps == 0 {
            prop_assert_eq!(fee, 0);
        }
    }

    #[test]
    fn prop_mint_conserves_value(
        wbtc in 1u128..1_000_000 * WBTC_UNIT,
        price_dollars in 1u128..10_000_000,
        fee_bps in 0u64..=BPS_BASE,
    ) {
        let out = compute_mint(&MintInputs {
            collateral_amount: wbtc,
            collateral_decimals: WBTC_DECIMALS,
            collateral_price: price_dollars * PRECISION_18,
            reference_price: PRECISION_18,
            current_supply: 0,
            fee_bps,
            min_issuance: 0,
        }).unwrap();

        prop_assert_eq!(out.btd_to_mint + out.btd_fee, out.btd_gross);
        prop_assert!(out.btd_fee <= out.btd_gross);
        if fee_bps == 0 {
            prop_assert_eq!(out.btd_fee, 0);
        }
        // Whole-dollar price, unit reference: gross is exactly the
        // collateral USD value
        let canonical = to_canonical(wbtc, WBTC_DECIMALS).unwrap();
        prop_assert_eq!(out.btd_gross, canonical * price_dollars);
    }

    #[test]
    fn prop_mint_linearity(
        wbtc in 1u128..1_000_000 * WBTC_UNIT,
        price_dollars in 1u128..1_000_000,
        fee_bps in 0u64..=BPS_BASE,
    ) {
        let inputs = |amount| MintInputs {
            collateral_amount: amount,
            collateral_decimals: WBTC_DECIMALS,
            collateral_price: price_dollars * PRECISION_18,
            reference_price: PRECISION_18,
            current_supply: 0,
            fee_bps,
            min_issuance: 0,
        };
        let single = compute_mint(&inputs(wbtc)).unwrap();
        let double = compute_mint(&inputs(2 * wbtc)).unwrap();
        // Doubling collateral doubles net issuance within one rounding
        // unit; the fee floors, so the doubled mint never pays out more
        prop_assert!(double.btd_to_mint <= 2 * single.btd_to_mint);
        prop_assert!(2 * single.btd_to_mint - double.btd_to_mint <= 1);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Redemption waterfall
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn prop_healthy_redeem_pays_no_compensation(
        btd in PRECISION_18..1_000_000 * PRECISION_18,
        price_dollars in 1_000u128..1_000_000,
        cr_excess in 0u128..10 * PRECISION_18,
        fee_bps in 0u64..BPS_BASE / 2,
    ) {
        let out = compute_redeem(&RedeemInputs {
            btd_amount: btd,
            reference_price: PRECISION_18,
            collateral_price: price_dollars * PRECISION_18,
            collateral_decimals: WBTC_DECIMALS,
            cr: PRECISION_18 + cr_excess,
            btb_price: PRECISION_18 / 2,
            brs_price: PRECISION_18 / 10,
            min_btb_price: 3 * PRECISION_18 / 10,
            fee_bps,
            min_redemption: 0,
        }).unwrap();
        prop_assert_eq!(out.btb_out, 0);
        prop_assert_eq!(out.brs_out, 0);
        prop_assert_eq!(out.shortfall_usd, 0);
        prop_assert_eq!(out.btd_fee + out.btd_net, btd);
    }

    #[test]
    fn prop_underwater_redeem_pays_btb_when_above_floor(
        btd in PRECISION_18..1_000_000 * PRECISION_18,
        price_dollars in 1_000u128..1_000_000,
        cr in 0u128..PRECISION_18,
        fee_bps in 0u64..BPS_BASE / 2,
    ) {
        let out = compute_redeem(&RedeemInputs {
            btd_amount: btd,
            reference_price: PRECISION_18,
            collateral_price: price_dollars * PRECISION_18,
            collateral_decimals: WBTC_DECIMALS,
            cr,
            btb_price: PRECISION_18 / 2, // above the floor
            brs_price: PRECISION_18 / 10,
            min_btb_price: 3 * PRECISION_18 / 10,
            fee_bps,
            min_redemption: 0,
        }).unwrap();
        // Below 100% CR a shortfall always exists, and BTB covers it alone
        prop_assert!(out.shortfall_usd > 0);
        prop_assert!(out.btb_out > 0);
        prop_assert_eq!(out.brs_out, 0);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Price blending
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn prop_median3_order_invariant(a in 0u128.., b in 0u128.., c in 0u128..) {
        let expected = median3(a, b, c);
        for (x, y, z) in [(a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            prop_assert_eq!(median3(x, y, z), expected);
        }
        // The median is one of the inputs and sits between min and max
        prop_assert!(expected >= a.min(b).min(c));
        prop_assert!(expected <= a.max(b).max(c));
    }

    #[test]
    fn prop_blend_bounded_and_order_invariant(
        prices in prop::collection::vec(1u128..u128::MAX / 2, 2..8),
        max_bps in 0u64..=2 * BPS_BASE,
    ) {
        let forward = blend_multi_source(&prices, max_bps).ok();
        let mut reversed = prices.clone();
        reversed.reverse();
        prop_assert_eq!(blend_multi_source(&reversed, max_bps).ok(), forward);

        if let Some(blended) = forward {
            prop_assert!(blended >= *prices.iter().min().unwrap());
            prop_assert!(blended <= *prices.iter().max().unwrap());
            // The soft check agrees with the hard check
            prop_assert!(validate_all_within_bounds(&prices, max_bps));
        }
    }

    #[test]
    fn prop_deviation_symmetric(a in 0u128.., b in 0u128.., max_bps in 0u64..=BPS_BASE) {
        prop_assert_eq!(
            deviation_within(a, b, max_bps),
            deviation_within(b, a, max_bps)
        );
    }

    // ═══════════════════════════════════════════════════════════════════
    // Collateral ratio
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn prop_cr_scale_invariant(
        wbtc in 1u128..1_000 * WBTC_UNIT,
        price_dollars in 1u128..1_000_000,
        primary in 1u128..1_000_000 * PRECISION_18,
        secondary in 0u128..1_000_000 * PRECISION_18,
        k in 1u128..1_000,
    ) {
        // Whole-dollar prices and a unit reference price keep intermediate
        // valuations exact, so scaling both sides by k is an identity
        let cr = |scale: u128| collateral_ratio(
            scale * wbtc,
            WBTC_DECIMALS,
            price_dollars * PRECISION_18,
            scale * primary,
            scale * secondary,
            PRECISION_18,
        ).unwrap();
        prop_assert_eq!(cr(k), cr(1));
    }

    // ═══════════════════════════════════════════════════════════════════
    // Precision round-trips
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn prop_native_round_trip(
        amount in 0u128..u128::MAX / 1_000_000_000_000_000_000,
        decimals in 0u32..=18,
    ) {
        let canonical = to_canonical(amount, decimals).unwrap();
        prop_assert_eq!(from_canonical(canonical, decimals).unwrap(), amount);
    }

    #[test]
    fn prop_canonical_round_trip_on_exact_multiples(units in 0u128..1_000_000_000) {
        // Amounts that are exact multiples of the smallest native unit
        // survive canonical -> native -> canonical for d in {6, 8, 18}
        for decimals in [6u32, 8, 18] {
            let step = 10u128.pow(18 - decimals);
            let canonical = units * step;
            let native = from_canonical(canonical, decimals).unwrap();
            prop_assert_eq!(to_canonical(native, decimals).unwrap(), canonical);
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Rates
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn prop_rates_always_in_bounds(
        class in asset_class(),
        cr in 0u128..,
        price in 0u128..,
        r_default in 0u64..=BPS_BASE,
    ) {
        let rate = rate_for_cr(class, cr, r_default).unwrap();
        prop_assert!(rate >= R_MIN_BPS);
        prop_assert!(rate <= class.r_max_bps());

        let x_rate = calculate_x_rate(class, price, cr, r_default).unwrap();
        prop_assert!(x_rate >= R_MIN_BPS);
        prop_assert!(x_rate <= class.r_max_bps());
    }

    #[test]
    fn prop_junior_dominates_underwater(
        cr in 0u128..PRECISION_18,
        r_default in 0u64..=BPS_BASE,
    ) {
        let senior = rate_for_cr(AssetClass::Senior, cr, r_default).unwrap();
        let junior = rate_for_cr(AssetClass::Junior, cr, r_default).unwrap();
        prop_assert!(junior >= senior);
    }

    #[test]
    fn prop_split_reconciles_exactly(
        total in 1u128..u128::MAX / 2,
        requested_frac in 0u128..=1_000,
        pending in 0u128..u128::MAX / 1_000,
    ) {
        let requested = total / 1_000 * requested_frac.min(1_000);
        prop_assume!(requested <= total);
        let split = split_withdrawal(requested, pending.min(total), total).unwrap();
        prop_assert_eq!(split.interest_share + split.principal_share, requested);
        prop_assert!(split.interest_share <= requested);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Rewards
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn prop_emission_bounded(
        duration in 0u64..=10 * 365 * 86_400,
        rate in 0u128..1_000 * PRECISION_18,
        alloc in 0u64..1_000,
        extra in 1u64..1_000,
    ) {
        let total = alloc + extra;
        let emitted = emission_for(duration, rate, alloc, total).unwrap();
        prop_assert!(emitted <= rate * duration as u128);
    }

    #[test]
    fn prop_acc_per_share_monotone(
        current in 0u128..u128::MAX / 2,
        reward in 0u128..u128::MAX / 1_000_000_000_000,
        staked in 0u128..u128::MAX / 2,
    ) {
        if let Ok(next) = acc_reward_per_share(current, reward, staked) {
            prop_assert!(next >= current);
        }
    }
}
