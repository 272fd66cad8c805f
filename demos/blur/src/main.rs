use argh::FromArgs;
use std::path::PathBuf;
use std::time::Instant;

use blurkit_image::ImageRgb8;
use blurkit_imgproc::filter::filter2d_with_workers;
use blurkit_imgproc::parallel::default_workers;
use blurkit_io as io;

#[derive(FromArgs)]
/// Blur a PPM image with a convolution kernel read from a file
struct Args {
    /// path to the input PPM (P6) image
    #[argh(option)]
    image: PathBuf,

    /// path to the kernel description file
    #[argh(option)]
    kernel: PathBuf,

    /// path to write the blurred PPM image to
    #[argh(option)]
    output: PathBuf,

    /// number of worker threads, defaults to the number of logical processors
    #[argh(option)]
    workers: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let image = io::read_image_ppm(&args.image)?;
    let kernel = io::read_kernel(&args.kernel)?;
    let workers = args.workers.unwrap_or_else(default_workers);

    log::info!(
        "blurring {} with a {}x{} kernel on {} workers",
        image.size(),
        kernel.size(),
        kernel.size(),
        workers
    );

    let mut blurred = ImageRgb8::from_size_val(image.size(), 0)?;

    let now = Instant::now();
    filter2d_with_workers(&image, &mut blurred, &kernel, workers)?;
    log::info!("blurred in {:?}", now.elapsed());

    io::write_image_ppm(&args.output, &blurred)?;

    Ok(())
}
