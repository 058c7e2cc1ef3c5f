use pixlab_image::Image;

/// Grayscale-normalized intensity statistics of an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityStats {
    /// Mean of the normalized intensity values.
    pub mean: f64,
    /// Variance of the normalized intensity values.
    pub variance: f64,
    /// Standard deviation, in the same units as the mean.
    pub std_dev: f64,
}

/// Normalized intensity of one RGB pixel.
///
/// The channels are packed into a signed 32-bit ARGB word with opaque alpha
/// and the word is divided by 255. The packed word doubles as a brightness
/// proxy; this is deliberately NOT a luminance conversion, and opaque alpha
/// makes the value negative.
#[inline]
fn packed_intensity(px: &[u8]) -> f64 {
    let packed =
        (0xFFu32 << 24) | (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
    f64::from(packed as i32) / 255.0
}

/// Compute the mean normalized intensity of an image.
///
/// The per-pixel intensity is the packed signed ARGB word divided by 255, so
/// the result is not confined to `[0, 1]`.
///
/// The image must contain at least one pixel.
///
/// # Example
///
/// ```
/// use pixlab_image::{Image, ImageSize};
/// use pixlab_imgproc::stats::mean;
///
/// let image = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     255u8,
/// ).unwrap();
///
/// // a white pixel packs to 0xFFFFFFFF, i.e. -1 as a signed word
/// assert_eq!(mean(&image), -1.0 / 255.0);
/// ```
pub fn mean(image: &Image<u8, 3>) -> f64 {
    let sum = image
        .as_slice()
        .chunks_exact(3)
        .map(packed_intensity)
        .sum::<f64>();

    sum / (image.width() * image.height()) as f64
}

/// Compute the variance of the normalized intensity around the supplied mean.
///
/// The mean is NOT recomputed; callers pass the output of [`mean`].
pub fn variance(image: &Image<u8, 3>, mean: f64) -> f64 {
    let sum = image
        .as_slice()
        .chunks_exact(3)
        .map(|px| (packed_intensity(px) - mean).powi(2))
        .sum::<f64>();

    sum / (image.width() * image.height()) as f64
}

/// Compute the standard deviation from a variance.
///
/// A negative variance yields NaN; the value produced by [`variance`] is
/// never negative.
pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}

/// Compute mean, variance and standard deviation of an image in one call.
pub fn intensity_stats(image: &Image<u8, 3>) -> IntensityStats {
    let mean = mean(image);
    let variance = variance(image, mean);

    IntensityStats {
        mean,
        variance,
        std_dev: std_dev(variance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pixlab_image::{ImageError, ImageSize};

    #[test]
    fn mean_uniform_gray() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            128u8,
        )?;

        // (128, 128, 128) packs to 0xFF808080, i.e. -8355712 as a signed word
        assert_relative_eq!(mean(&image), -8_355_712.0 / 255.0, epsilon = 1e-9);

        Ok(())
    }

    #[test]
    fn mean_black_and_white() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 0, 0, 255, 255, 255],
        )?;

        // black packs to -16777216, white to -1
        let expected = (-16_777_216.0 / 255.0 + -1.0 / 255.0) / 2.0;
        assert_relative_eq!(mean(&image), expected, epsilon = 1e-9);

        Ok(())
    }

    #[test]
    fn variance_uniform_is_zero() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            128u8,
        )?;

        // the mean can carry a rounding residue of a few ulps, so the
        // variance is only approximately zero
        let m = mean(&image);
        assert_relative_eq!(variance(&image, m), 0.0, epsilon = 1e-12);
        assert_relative_eq!(std_dev(variance(&image, m)), 0.0, epsilon = 1e-6);

        Ok(())
    }

    #[test]
    fn variance_uses_supplied_mean() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            255u8,
        )?;

        // every pixel is -1/255, so deviation from a mean of 1/255 is 2/255
        let v = variance(&image, 1.0 / 255.0);
        assert_relative_eq!(v, (2.0 / 255.0) * (2.0 / 255.0), epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn std_dev_negative_variance_is_nan() {
        assert!(std_dev(-1.0).is_nan());
    }

    #[test]
    fn intensity_stats_composes() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 0, 0, 255, 255, 255],
        )?;

        let stats = intensity_stats(&image);
        assert_relative_eq!(stats.mean, mean(&image), epsilon = 1e-12);
        assert_relative_eq!(
            stats.variance,
            variance(&image, stats.mean),
            epsilon = 1e-12
        );
        assert_relative_eq!(stats.std_dev, stats.variance.sqrt(), epsilon = 1e-12);

        Ok(())
    }
}
