#![deny(missing_docs)]
//! Image container types for classical spatial-domain image processing

/// image representation for pixel processing purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
