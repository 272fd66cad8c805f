use blurkit_image::{Image, ImageError, PixelChannel};

use super::kernels::Kernel;
use crate::error::BlurError;
use crate::parallel::{self, SharedSlice};

/// Compute the blurred value of the pixel at `(x, y)`.
///
/// Sums `weight * channel` over every kernel cell whose source coordinate
/// falls inside the image, together with the weights themselves, then
/// divides each channel sum by the weight total. Out-of-bounds cells
/// contribute to neither, so near the image border the kernel is
/// implicitly renormalized to the taps that cover valid pixels instead of
/// averaging in phantom zero neighbors.
///
/// Returns `None` when the weight total is zero, which can only happen
/// with a degenerate all-zero kernel; that is a caller bug, not a
/// recoverable condition.
pub fn convolve_pixel<T, const C: usize>(
    src: &Image<T, C>,
    kernel: &Kernel,
    x: usize,
    y: usize,
) -> Option<[f32; C]>
where
    T: PixelChannel,
{
    let half = kernel.half() as isize;
    let cols = src.cols();
    let rows = src.rows();
    let src_data = src.as_slice();

    let mut sums = [0.0f32; C];
    let mut weight_total = 0.0f32;

    for ky in 0..kernel.size() {
        let gy = y as isize - half + ky as isize;
        if gy < 0 || gy >= rows as isize {
            continue;
        }
        let row_offset = gy as usize * cols;
        for kx in 0..kernel.size() {
            let gx = x as isize - half + kx as isize;
            if gx < 0 || gx >= cols as isize {
                continue;
            }
            let weight = kernel.weight(kx, ky);
            let offset = (row_offset + gx as usize) * C;
            for (ch, sum) in sums.iter_mut().enumerate() {
                *sum += weight * src_data[offset + ch].to_f32();
            }
            weight_total += weight;
        }
    }

    if weight_total == 0.0 {
        return None;
    }

    sums.iter_mut().for_each(|sum| *sum /= weight_total);
    Some(sums)
}

/// Convolve an image with a square kernel using a fixed number of workers.
///
/// The image width is split into disjoint column ranges, one worker thread
/// per range, each writing its own columns of `dst`. The call returns only
/// after every worker has finished; on a spawn failure the already-running
/// workers are joined before the error is returned.
///
/// A degenerate all-zero kernel leaves `dst` untouched.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The convolution kernel.
/// * `workers` - The number of worker threads, must be > 0.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn filter2d_with_workers<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    workers: usize,
) -> Result<(), BlurError>
where
    T: PixelChannel,
{
    if src.size() != dst.size() {
        return Err(BlurError::Image(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )));
    }
    if workers == 0 {
        return Err(BlurError::InvalidWorkerCount(workers));
    }

    let cols = src.cols();
    let portions = parallel::partition_columns(src.cols(), src.rows(), workers);
    let dst_view = SharedSlice::new(dst.as_slice_mut());

    parallel::run_portions(&portions, |portion| {
        for y in portion.y..portion.y + portion.h {
            for x in portion.x..portion.x + portion.w {
                if let Some(sums) = convolve_pixel(src, kernel, x, y) {
                    let offset = (y * cols + x) * C;
                    for (ch, &sum) in sums.iter().enumerate() {
                        // SAFETY: (x, y) lies inside this worker's portion and
                        // portions are disjoint, so no other worker writes here
                        unsafe { dst_view.write(offset + ch, T::from_f32(sum)) };
                    }
                }
            }
        }
    })
}

/// Convolve an image with a square kernel.
///
/// Same as [`filter2d_with_workers`] with one worker per available logical
/// processor.
pub fn filter2d<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), BlurError>
where
    T: PixelChannel,
{
    filter2d_with_workers(src, dst, kernel, parallel::default_workers())
}
