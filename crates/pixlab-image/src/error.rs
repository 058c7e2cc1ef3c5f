/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when an operation requires a non-empty image.
    #[error("Image has no pixels ({0}x{1})")]
    EmptyImage(usize, usize),

    /// Error when two images are expected to have matching sizes.
    #[error("Image size mismatch ({0}x{1} vs {2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel coordinate is out of bounds.
    #[error("Pixel ({0}, {1}) is out of bounds for a {2}x{3} image")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1} channels)")]
    ChannelIndexOutOfBounds(usize, usize),
}
