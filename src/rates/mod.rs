//! Interest rate math.
//!
//! - Dynamic CR-driven rate curves (senior and junior classes)
//! - Per-second accrual, fee extraction, withdrawal splitting

pub mod interest;
pub mod sigmoid;

pub use interest::*;
pub use sigmoid::*;
