//! # BTD Core
//!
//! Deterministic fixed-point math core for a Bitcoin-collateralized
//! synthetic-dollar protocol: mint and redemption sizing, collateral
//! ratios, dynamic interest rates, oracle price aggregation, and staking
//! reward distribution.
//!
//! ## Architecture
//!
//! - **Precision**: native/canonical 18-decimal scale conversion
//! - **Oracle**: single-feed validation and multi-source median blending
//! - **Collateral**: ratio and valuation math
//! - **Rates**: CR-driven rate curves and per-second interest accrual
//! - **Mint / Redeem**: issuance sizing and the compensation waterfall
//! - **Rewards**: emission and accumulator-per-share math
//!
//! ## Design Principles
//!
//! Every routine is a pure, synchronous function over explicit input
//! values: no floating point, no I/O, no clocks, no shared state. Given
//! identical inputs the output is bit-identical on every platform.
//! Intermediate products widen to 256 bits and fail closed on overflow;
//! division always floors in the protocol-safe direction.
//!
//! ## Example
//!
//! ```rust
//! use btd_core::mint::{compute_mint, MintInputs};
//! use btd_core::utils::constants::{MIN_ISSUANCE, PRECISION_18, WBTC_DECIMALS};
//!
//! let outputs = compute_mint(&MintInputs {
//!     collateral_amount: 100_000_000, // 1 WBTC
//!     collateral_decimals: WBTC_DECIMALS,
//!     collateral_price: 50_000 * PRECISION_18,
//!     reference_price: PRECISION_18,
//!     current_supply: 0,
//!     fee_bps: 50,
//!     min_issuance: MIN_ISSUANCE,
//! })?;
//! assert_eq!(outputs.btd_to_mint, 49_750 * PRECISION_18);
//! # Ok::<(), btd_core::error::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    trivial_casts,
    unused_lifetimes,
    unused_qualifications
)]

pub mod collateral;
pub mod error;
pub mod iusd;
pub mod mint;
pub mod oracle;
pub mod precision;
pub mod rates;
pub mod redeem;
pub mod rewards;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collateral::{collateral_ratio, collateral_value, liability_value};
    pub use crate::error::{Error, Result};
    pub use crate::mint::{compute_mint, MintInputs, MintOutputs};
    pub use crate::oracle::{
        blend::{blend_multi_source, median3},
        feed::{read_and_scale, FeedReading},
    };
    pub use crate::precision::{from_canonical, to_canonical};
    pub use crate::rates::{
        interest::{fee_amount, split_withdrawal},
        sigmoid::{calculate_x_rate, rate_for_cr, AssetClass},
    };
    pub use crate::redeem::{compute_redeem, RedeemInputs, RedeemOutputs};
    pub use crate::utils::constants::{BPS_BASE, PRECISION_18};
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
