use pixlab_image::{Image, ImageDtype, ImageError, ImageSize};
use rand::Rng;

/// Draw one gaussian sample via the Marsaglia polar method.
///
/// Each call runs a fresh rejection loop; the paired second variate is
/// discarded. The loop accepts once `u1² + u2²` lands in (0, 1), which
/// happens with probability π/4 per iteration.
fn sample_gaussian<R>(mean: f64, std_dev: f64, rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    loop {
        let u1 = 2.0 * rng.random::<f64>() - 1.0;
        let u2 = 2.0 * rng.random::<f64>() - 1.0;
        let s = u1 * u1 + u2 * u2;
        if s > 0.0 && s < 1.0 {
            let z = (-2.0 * s.ln() / s).sqrt();
            return mean + std_dev * u1 * z;
        }
    }
}

/// Generate a field of independent gaussian samples, one per pixel.
///
/// # Arguments
///
/// * `mean` - The mean of the gaussian distribution.
/// * `std_dev` - The standard deviation of the gaussian distribution.
/// * `size` - The size of the field in pixels.
/// * `rng` - The random number generator to draw from; seed it for
///   reproducible fields.
///
/// # Example
///
/// ```
/// use pixlab_image::ImageSize;
/// use pixlab_imgproc::noise::gaussian_field;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let field = gaussian_field(0.0, 1.0, ImageSize { width: 4, height: 4 }, &mut rng).unwrap();
///
/// assert_eq!(field.size().width, 4);
/// assert_eq!(field.size().height, 4);
/// ```
pub fn gaussian_field<R>(
    mean: f64,
    std_dev: f64,
    size: ImageSize,
    rng: &mut R,
) -> Result<Image<f64, 1>, ImageError>
where
    R: Rng + ?Sized,
{
    let mut data = Vec::with_capacity(size.width * size.height);
    for _ in 0..size.width * size.height {
        data.push(sample_gaussian(mean, std_dev, rng));
    }

    Image::new(size, data)
}

/// Add a noise field to an image.
///
/// The same scalar sample is added to the red, green and blue channel of the
/// pixel it is indexed by; each channel is then rounded to the nearest
/// integer and clamped to `[0, 255]`.
///
/// # Errors
///
/// Returns an error if `field` or `dst` do not match the size of `src`.
pub fn apply_noise(
    src: &Image<u8, 3>,
    field: &Image<f64, 1>,
    dst: &mut Image<u8, 3>,
) -> Result<(), ImageError> {
    if src.size() != field.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            field.width(),
            field.height(),
        ));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut()
        .chunks_exact_mut(3)
        .zip(src.as_slice().chunks_exact(3).zip(field.as_slice().iter()))
        .for_each(|(out, (px, &sample))| {
            for c in 0..3 {
                out[c] = u8::from_f64(f64::from(px[c]) + sample);
            }
        });

    Ok(())
}

/// Degrade an image with additive gaussian noise.
///
/// Generates a fresh noise field sized for `src` and applies it with
/// [`apply_noise`].
pub fn add_gaussian_noise<R>(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<(), ImageError>
where
    R: Rng + ?Sized,
{
    let field = gaussian_field(mean, std_dev, src.size(), rng)?;
    apply_noise(src, &field, dst)
}
