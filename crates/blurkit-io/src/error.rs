/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or read the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error when the PPM header is malformed.
    #[error("Invalid PPM header: {0}")]
    InvalidPpmHeader(String),

    /// Error when the pixel payload is shorter than the header promises.
    #[error("Truncated PPM pixel data ({0} bytes, expected {1})")]
    TruncatedPpmData(usize, usize),

    /// Error when the kernel description file is malformed.
    #[error("Invalid kernel file: {0}")]
    InvalidKernelFile(String),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] blurkit_image::ImageError),

    /// Error to create the kernel.
    #[error("Failed to create kernel. {0}")]
    KernelCreationError(#[from] blurkit_imgproc::BlurError),
}
