use pixlab_image::{Image, ImageDtype, ImageError};
use rayon::prelude::*;

use super::Kernel2d;
use crate::padding::{extend_edge_clamp, ClampedSampler, Padding2d};

/// Convolve an image with a normalized 2D kernel.
///
/// The kernel's first dimension runs along the image x axis. Border taps
/// read an edge-clamp extended copy of the source through
/// [`ClampedSampler`], so the output keeps the source dimensions instead of
/// shrinking. Channel sums are accumulated in `f64`, rounded to the nearest
/// integer and clamped to `[0, 255]`. Rows are processed in parallel.
///
/// # Errors
///
/// Returns an error if `src` has no pixels or if `src` and `dst` differ in
/// size.
///
/// # Example
///
/// ```
/// use pixlab_image::{Image, ImageSize};
/// use pixlab_imgproc::filter::{filter, kernels};
///
/// let src = Image::<u8, 3>::from_size_val(
///     ImageSize { width: 4, height: 4 },
///     128u8,
/// ).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0u8).unwrap();
///
/// let kernel = kernels::gaussian_approx_kernel3().unwrap();
/// filter(&src, &mut dst, &kernel).unwrap();
///
/// // a normalized kernel leaves a uniform image unchanged
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn filter(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    kernel: &Kernel2d,
) -> Result<(), ImageError> {
    if src.width() == 0 || src.height() == 0 {
        return Err(ImageError::EmptyImage(src.width(), src.height()));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let padding = Padding2d::for_kernel(kernel.rows(), kernel.cols());
    let mut extended = Image::from_size_val(padding.padded_size(src.size()), 0u8)?;
    extend_edge_clamp(src, &mut extended, &padding)?;
    let sampler = ClampedSampler::new(&extended, src.size());

    let a = kernel.half_rows() as isize;
    let b = kernel.half_cols() as isize;
    let dst_stride = src.cols() * 3;

    dst.as_slice_mut()
        .par_chunks_mut(dst_stride)
        .enumerate()
        .for_each(|(y, dst_row)| {
            dst_row.chunks_exact_mut(3).enumerate().for_each(|(x, px)| {
                let mut sum = [0.0f64; 3];
                for dx in -a..=a {
                    for dy in -b..=b {
                        let sample = sampler.get(x as isize + dx, y as isize + dy);
                        let weight = kernel.get((a + dx) as usize, (b + dy) as usize);
                        for c in 0..3 {
                            sum[c] += f64::from(sample[c]) * weight;
                        }
                    }
                }
                for c in 0..3 {
                    px[c] = u8::from_f64(sum[c]);
                }
            });
        });

    Ok(())
}
