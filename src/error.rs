//! Error types for the BTD core math library.
//!
//! Every failure in this crate is local, synchronous, and terminal for the
//! call that produced it: a routine either returns a complete output value
//! or one of these errors, and mutates nothing either way.

use thiserror::Error;

/// Result type alias for BTD core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the BTD core math library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ═══════════════════════════════════════════════════════════════════
    // Input Validation Errors
    // ═══════════════════════════════════════════════════════════════════

    /// Invalid input parameter
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Amount is zero
    #[error("Amount cannot be zero")]
    ZeroAmount,

    /// Fee or rate exceeds 100% (the basis-point base)
    #[error("Rate {rate_bps} bps exceeds base of {base_bps} bps")]
    RateAboveBase {
        /// Offending rate in basis points
        rate_bps: u64,
        /// Basis-point base (100%)
        base_bps: u64,
    },

    /// Token decimal count outside the supported range
    #[error("Unsupported token decimals: {decimals} (max {max})")]
    UnsupportedDecimals {
        /// Requested decimal count
        decimals: u32,
        /// Maximum supported decimal count
        max: u32,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Oracle Errors
    // ═══════════════════════════════════════════════════════════════════

    /// Price is zero or negative and cannot be used
    #[error("Invalid price: {raw}")]
    InvalidPrice {
        /// Raw answer as reported by the feed
        raw: i128,
    },

    /// Price is stale (not updated recently enough)
    #[error("Price is stale: last update {age}s ago, max allowed {max_age}s")]
    StalePrice {
        /// Seconds since last update
        age: u64,
        /// Maximum allowed age in seconds
        max_age: u64,
    },

    /// Fewer price sources than blending requires
    #[error("Insufficient price sources: got {got}, need {need}")]
    InsufficientSources {
        /// Number of sources provided
        got: usize,
        /// Number of sources required
        need: usize,
    },

    /// A price source deviates from the blended median beyond tolerance
    #[error("Price deviation {deviation_bps} bps exceeds maximum {max_deviation_bps} bps")]
    ExcessiveDeviation {
        /// Actual deviation in basis points
        deviation_bps: u64,
        /// Maximum allowed deviation in basis points
        max_deviation_bps: u64,
    },

    /// CPI inputs cannot produce an adjustment factor
    #[error("Invalid CPI input: {reason}")]
    InvalidCpi {
        /// Reason the CPI data was rejected
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Mint / Redeem Errors
    // ═══════════════════════════════════════════════════════════════════

    /// Net issuance or redemption below the protocol dust floor
    #[error("Amount {amount} below minimum {minimum}")]
    BelowMinimumAmount {
        /// Computed net amount
        amount: u128,
        /// Protocol minimum
        minimum: u128,
    },

    /// Compensation asset is unpriced while compensation is needed
    #[error("Compensation asset price unavailable while shortfall must be covered")]
    InvalidSecondaryPrice,

    // ═══════════════════════════════════════════════════════════════════
    // Arithmetic Errors
    // ═══════════════════════════════════════════════════════════════════

    /// Overflow in calculation
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// Operation that overflowed
        operation: String,
    },

    /// Underflow in calculation
    #[error("Arithmetic underflow in {operation}")]
    Underflow {
        /// Operation that underflowed
        operation: String,
    },
}

impl Error {
    /// Returns true if this error indicates bad caller input rather than
    /// an internal arithmetic failure
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Error::Overflow { .. } | Error::Underflow { .. })
    }

    /// Returns true if this is a critical error requiring immediate attention
    pub fn is_critical(&self) -> bool {
        matches!(self, Error::Overflow { .. } | Error::Underflow { .. })
    }

    /// Returns the error code for external systems
    pub fn code(&self) -> u32 {
        match self {
            // Input validation errors: 1xxx
            Error::InvalidParameter { .. } => 1001,
            Error::ZeroAmount => 1002,
            Error::RateAboveBase { .. } => 1003,
            Error::UnsupportedDecimals { .. } => 1004,

            // Oracle errors: 2xxx
            Error::InvalidPrice { .. } => 2001,
            Error::StalePrice { .. } => 2002,
            Error::InsufficientSources { .. } => 2003,
            Error::ExcessiveDeviation { .. } => 2004,
            Error::InvalidCpi { .. } => 2005,

            // Mint/redeem errors: 3xxx
            Error::BelowMinimumAmount { .. } => 3001,
            Error::InvalidSecondaryPrice => 3002,

            // Arithmetic errors: 9xxx
            Error::Overflow { .. } => 9001,
            Error::Underflow { .. } => 9002,
        }
    }
}
