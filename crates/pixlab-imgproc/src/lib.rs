#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image filtering module.
pub mod filter;

/// image quality metrics module.
pub mod metrics;

/// synthetic gaussian noise module.
pub mod noise;

/// border extension utilities.
pub mod padding;

/// degrade-and-restore pipeline module.
pub mod pipeline;

/// grayscale intensity statistics module.
pub mod stats;
