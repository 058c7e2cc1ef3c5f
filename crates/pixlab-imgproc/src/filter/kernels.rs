use super::{Kernel2d, KernelError};

/// Create a 3x3 binomial smoothing kernel (1-2-1 weighting), normalized.
pub fn gaussian_approx_kernel3() -> Result<Kernel2d, KernelError> {
    Kernel2d::new(
        3,
        3,
        vec![1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0],
    )
}

/// Create a 3x3 smoothing kernel with a strong plus-shaped center weighting,
/// normalized.
pub fn weighted_smoothing_kernel3() -> Result<Kernel2d, KernelError> {
    Kernel2d::new(
        3,
        3,
        vec![1.0, 15.0, 1.0, 15.0, 30.0, 15.0, 1.0, 15.0, 1.0],
    )
}

/// Create a uniform box kernel with the given odd dimensions.
pub fn box_kernel(rows: usize, cols: usize) -> Result<Kernel2d, KernelError> {
    Kernel2d::new(rows, cols, vec![1.0; rows * cols])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_approx_kernel3() -> Result<(), KernelError> {
        let kernel = gaussian_approx_kernel3()?;
        assert_eq!(kernel.rows(), 3);
        assert_eq!(kernel.cols(), 3);
        assert_eq!(kernel.get(1, 1), 0.25);
        assert_eq!(kernel.weights().iter().sum::<f64>(), 1.0);

        Ok(())
    }

    #[test]
    fn test_weighted_smoothing_kernel3() -> Result<(), KernelError> {
        let kernel = weighted_smoothing_kernel3()?;
        assert_relative_eq!(kernel.get(1, 1), 30.0 / 94.0, epsilon = 1e-12);
        assert_relative_eq!(
            kernel.weights().iter().sum::<f64>(),
            1.0,
            epsilon = 1e-12
        );

        Ok(())
    }

    #[test]
    fn test_box_kernel() -> Result<(), KernelError> {
        let kernel = box_kernel(1, 5)?;
        assert_eq!(kernel.rows(), 1);
        assert_eq!(kernel.cols(), 5);
        assert_eq!(kernel.get(0, 2), 0.2);

        Ok(())
    }
}
