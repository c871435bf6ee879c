//! Shared utilities for the BTD core.
//!
//! - Checked fixed-point arithmetic
//! - Protocol constants

pub mod constants;
pub mod math;

pub use constants::*;
pub use math::*;
