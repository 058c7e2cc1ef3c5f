use log::debug;
use pixlab_image::{Image, ImageError};
use rand::Rng;

use crate::filter::{filter, Kernel2d};
use crate::metrics;
use crate::noise::add_gaussian_noise;
use crate::stats::{intensity_stats, IntensityStats};

/// Parameters for one synthetic degradation of the source image.
#[derive(Debug, Clone, Copy)]
pub struct NoiseSpec {
    /// Multiplier applied to the source standard deviation to obtain the
    /// effective noise standard deviation.
    pub std_dev_coef: f64,
    /// Mean of the additive gaussian noise.
    pub mean: f64,
}

/// An image variant together with its quality metrics against the reference.
#[derive(Debug, Clone)]
pub struct DegradedImage {
    /// The degraded (or restored) image.
    pub image: Image<u8, 3>,
    /// Root mean squared error against the reference image.
    pub rmse: f64,
    /// Peak signal-to-noise ratio against the reference image, in dB.
    pub psnr: f64,
}

/// Everything the degrade-and-restore pipeline produces for one source image.
#[derive(Debug, Clone)]
pub struct Report {
    /// Intensity statistics of the source image.
    pub stats: IntensityStats,
    /// One noisy variant per requested [`NoiseSpec`], input order preserved.
    pub noisy: Vec<DegradedImage>,
    /// `filtered[k][n]` is noisy variant `n` restored with kernel `k`;
    /// input order preserved on both axes.
    pub filtered: Vec<Vec<DegradedImage>>,
}

/// Run the full degrade-and-restore pipeline on one source image.
///
/// Computes the source intensity statistics, produces one noisy variant per
/// [`NoiseSpec`] (with standard deviation `std_dev_coef * stats.std_dev`),
/// restores every noisy variant with every kernel, and measures RMSE and
/// PSNR of each variant against the source.
///
/// # Errors
///
/// Propagates any image allocation or size mismatch error from the
/// underlying operations; none occur for well-formed inputs.
pub fn degrade_and_restore<R>(
    src: &Image<u8, 3>,
    noise_specs: &[NoiseSpec],
    kernels: &[Kernel2d],
    rng: &mut R,
) -> Result<Report, ImageError>
where
    R: Rng + ?Sized,
{
    let stats = intensity_stats(src);
    debug!(
        "source stats: mean={:.4} variance={:.4} std_dev={:.4}",
        stats.mean, stats.variance, stats.std_dev
    );

    let mut noisy = Vec::with_capacity(noise_specs.len());
    for (i, spec) in noise_specs.iter().enumerate() {
        let std_dev = spec.std_dev_coef * stats.std_dev;
        debug!("noisy[{i}]: mean={:.4} std_dev={std_dev:.4}", spec.mean);

        let mut image = Image::from_size_val(src.size(), 0u8)?;
        add_gaussian_noise(src, &mut image, spec.mean, std_dev, rng)?;
        noisy.push(measured(src, image)?);
    }

    let mut filtered = Vec::with_capacity(kernels.len());
    for (k, kernel) in kernels.iter().enumerate() {
        let mut per_kernel = Vec::with_capacity(noisy.len());
        for (n, variant) in noisy.iter().enumerate() {
            debug!("filtered[{k}][{n}]: {}x{} kernel", kernel.rows(), kernel.cols());

            let mut image = Image::from_size_val(src.size(), 0u8)?;
            filter(&variant.image, &mut image, kernel)?;
            per_kernel.push(measured(src, image)?);
        }
        filtered.push(per_kernel);
    }

    Ok(Report {
        stats,
        noisy,
        filtered,
    })
}

fn measured(reference: &Image<u8, 3>, image: Image<u8, 3>) -> Result<DegradedImage, ImageError> {
    let rmse = metrics::rmse(reference, &image)?;
    let psnr = metrics::psnr(reference, &image)?;
    debug!("rmse={rmse:.4} psnr={psnr:.4}");

    Ok(DegradedImage { image, rmse, psnr })
}
