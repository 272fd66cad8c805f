use crate::error::BlurError;

/// A square convolution kernel with odd side length.
///
/// The kernel is immutable for the lifetime of a blur operation and shared
/// read-only by all workers.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Create a new kernel from a flat row-major weight buffer.
    ///
    /// # Arguments
    ///
    /// * `size` - The side length of the kernel, odd and non-zero.
    /// * `weights` - The kernel weights, `size * size` values in row-major order.
    ///
    /// # Errors
    ///
    /// If the size is even or zero, or the weight buffer does not match the
    /// size, an error is returned.
    pub fn new(size: usize, weights: Vec<f32>) -> Result<Self, BlurError> {
        if size == 0 || size % 2 == 0 {
            return Err(BlurError::InvalidKernelSize(size));
        }
        if weights.len() != size * size {
            return Err(BlurError::InvalidKernelLength(weights.len(), size * size));
        }

        Ok(Self { size, weights })
    }

    /// Get the side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the half width of the kernel, `(size - 1) / 2`.
    pub fn half(&self) -> usize {
        (self.size - 1) / 2
    }

    /// Get the weight at kernel cell `(kx, ky)`.
    pub fn weight(&self, kx: usize, ky: usize) -> f32 {
        self.weights[ky * self.size + kx]
    }

    /// Get the kernel weights as a flat slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }
}

/// Create the 1x1 identity kernel.
///
/// Convolving with it leaves the image unchanged.
pub fn identity_kernel() -> Kernel {
    Kernel {
        size: 1,
        weights: vec![1.0],
    }
}

/// Create a box blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The side length of the kernel, odd and non-zero.
pub fn box_kernel(kernel_size: usize) -> Result<Kernel, BlurError> {
    let weight = 1.0 / (kernel_size * kernel_size) as f32;
    Kernel::new(kernel_size, vec![weight; kernel_size * kernel_size])
}

/// Create a gaussian blur kernel.
///
/// The 2-D weights are the outer product of a normalized 1-D gaussian with
/// itself, so the kernel sums to one.
///
/// # Arguments
///
/// * `kernel_size` - The side length of the kernel, odd and non-zero.
/// * `sigma` - The sigma of the gaussian.
pub fn gaussian_kernel(kernel_size: usize, sigma: f32) -> Result<Kernel, BlurError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(BlurError::InvalidKernelSize(kernel_size));
    }

    let mut kernel_1d = Vec::with_capacity(kernel_size);

    let mean = (kernel_size - 1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the 1-D kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel_1d.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the 1-D kernel
    let norm = kernel_1d.iter().sum::<f32>();
    kernel_1d.iter_mut().for_each(|k| *k /= norm);

    let weights = kernel_1d
        .iter()
        .flat_map(|ky| kernel_1d.iter().map(move |kx| ky * kx))
        .collect();

    Kernel::new(kernel_size, weights)
}
