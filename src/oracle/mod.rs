//! Oracle price math.
//!
//! - Single-feed reading, rescaling, and validation
//! - Multi-source median blending with deviation bounds

pub mod blend;
pub mod feed;

pub use blend::*;
pub use feed::*;
