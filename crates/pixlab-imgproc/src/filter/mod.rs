//! Filter operations
//!
//! This module provides linear spatial filtering for image processing.

/// Filter kernel type and validation.
mod kernel;
pub use kernel::{Kernel2d, KernelError};

/// Preset filter kernels.
pub mod kernels;

/// 2D convolution operations.
mod convolution;
pub use convolution::*;
