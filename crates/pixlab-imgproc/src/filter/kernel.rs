/// Errors related to filter kernels.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// The kernel has zero rows or columns.
    #[error("Kernel must not be empty")]
    EmptyKernel,

    /// The kernel dimensions are not odd.
    #[error("Kernel dimensions must be odd, got {0}x{1}")]
    EvenSidedKernel(usize, usize),

    /// The weight data does not match the kernel dimensions.
    #[error("Kernel data length ({0}) does not match {1} rows x {2} cols")]
    InvalidKernelLength(usize, usize, usize),

    /// The weights sum to zero and cannot be normalized.
    #[error("Kernel weights sum to zero")]
    ZeroSum,
}

/// A rectangular grid of convolution weights with odd dimensions.
///
/// After construction the weights sum to 1.0, so convolving with the kernel
/// preserves overall brightness. Normalization divides every weight by the
/// raw sum only when that sum is not exactly 1.0; a sum that is already
/// bit-exact 1.0 is left untouched, so near-1.0 sums DO get renormalized.
///
/// # Example
///
/// ```
/// use pixlab_imgproc::filter::Kernel2d;
///
/// let kernel = Kernel2d::new(3, 3, vec![
///     1.0, 2.0, 1.0,
///     2.0, 4.0, 2.0,
///     1.0, 2.0, 1.0,
/// ]).unwrap();
///
/// assert_eq!(kernel.weights().iter().sum::<f64>(), 1.0);
/// assert_eq!(kernel.get(1, 1), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel2d {
    weights: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Kernel2d {
    /// Create a normalized kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Rejects empty or even-sized dimensions, weight data whose length does
    /// not match `rows * cols`, and weights summing to zero.
    pub fn new(rows: usize, cols: usize, mut weights: Vec<f64>) -> Result<Self, KernelError> {
        if rows == 0 || cols == 0 {
            return Err(KernelError::EmptyKernel);
        }

        if rows % 2 == 0 || cols % 2 == 0 {
            return Err(KernelError::EvenSidedKernel(rows, cols));
        }

        if weights.len() != rows * cols {
            return Err(KernelError::InvalidKernelLength(weights.len(), rows, cols));
        }

        let sum = weights.iter().sum::<f64>();
        if sum == 0.0 {
            return Err(KernelError::ZeroSum);
        }

        if sum != 1.0 {
            weights.iter_mut().for_each(|w| *w /= sum);
        }

        Ok(Self {
            weights,
            rows,
            cols,
        })
    }

    /// Number of kernel rows, the first dimension. During filtering the row
    /// index runs along the image x axis.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of kernel columns, the second dimension.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Half the first dimension, i.e. `a` for a `(2a+1)x(2b+1)` kernel.
    pub fn half_rows(&self) -> usize {
        self.rows / 2
    }

    /// Half the second dimension, i.e. `b` for a `(2a+1)x(2b+1)` kernel.
    pub fn half_cols(&self) -> usize {
        self.cols / 2
    }

    /// The weight at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.cols + col]
    }

    /// The normalized weights in row-major order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
