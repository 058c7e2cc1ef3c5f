use pixlab_image::{Image, ImageDtype, ImageError};

const MAX_NUM_INTENSITY_LEVELS: f64 = 256.0;

/// Compute the mean squared error (MSE) between two images.
///
/// The squared channel differences are summed over all pixels and divided by
/// `width * height * channels`.
///
/// # Errors
///
/// Returns an error if the two images differ in size.
///
/// # Example
///
/// ```
/// use pixlab_image::{Image, ImageSize};
/// use pixlab_imgproc::metrics::mse;
///
/// let image1 = Image::<u8, 3>::from_size_val(
///     ImageSize { width: 2, height: 3 },
///     128u8,
/// ).unwrap();
/// let image2 = image1.clone();
///
/// assert_eq!(mse(&image1, &image2).unwrap(), 0.0);
/// ```
pub fn mse<T, const C: usize>(image1: &Image<T, C>, image2: &Image<T, C>) -> Result<f64, ImageError>
where
    T: ImageDtype,
{
    if image1.size() != image2.size() {
        return Err(ImageError::InvalidImageSize(
            image1.width(),
            image1.height(),
            image2.width(),
            image2.height(),
        ));
    }

    let sum = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .map(|(&a, &b)| {
            let diff = a.into() - b.into();
            diff * diff
        })
        .sum::<f64>();

    Ok(sum / image1.numel() as f64)
}

/// Compute the root mean squared error (RMSE) between two images.
///
/// # Errors
///
/// Returns an error if the two images differ in size.
pub fn rmse<T, const C: usize>(
    image1: &Image<T, C>,
    image2: &Image<T, C>,
) -> Result<f64, ImageError>
where
    T: ImageDtype,
{
    Ok(mse(image1, image2)?.sqrt())
}

/// Compute the peak signal-to-noise ratio (PSNR) between two images, in dB.
///
/// Computed as `20 * log10(255 / sqrt(rmse))`. The divisor is the square
/// root of the RMSE, not the RMSE itself; this deviates from the textbook
/// PSNR definition and is kept as-is. Identical images yield
/// `f64::INFINITY`.
///
/// # Errors
///
/// Returns an error if the two images differ in size.
pub fn psnr<T, const C: usize>(
    image1: &Image<T, C>,
    image2: &Image<T, C>,
) -> Result<f64, ImageError>
where
    T: ImageDtype,
{
    let rmse = rmse(image1, image2)?;

    if rmse == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(20.0 * ((MAX_NUM_INTENSITY_LEVELS - 1.0) / rmse.sqrt()).log10())
}
