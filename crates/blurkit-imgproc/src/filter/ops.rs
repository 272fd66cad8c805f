use blurkit_image::{Image, PixelChannel};

use super::convolution::filter2d;
use super::kernels;
use crate::error::BlurError;

/// Blur an image using a box blur filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The side length of the kernel, odd and non-zero.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn box_blur<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_size: usize,
) -> Result<(), BlurError>
where
    T: PixelChannel,
{
    let kernel = kernels::box_kernel(kernel_size)?;
    filter2d(src, dst, &kernel)
}

/// Blur an image using a gaussian blur filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The side length of the kernel, odd and non-zero.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian_blur<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_size: usize,
    sigma: f32,
) -> Result<(), BlurError>
where
    T: PixelChannel,
{
    let kernel = kernels::gaussian_kernel(kernel_size, sigma)?;
    filter2d(src, dst, &kernel)
}
