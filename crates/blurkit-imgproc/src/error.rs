use blurkit_image::ImageError;

/// An error type for the blur engine.
#[derive(thiserror::Error, Debug)]
pub enum BlurError {
    /// Error from the underlying image container.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The kernel size must be odd and non-zero.
    #[error("Kernel size must be odd and non-zero, got {0}")]
    InvalidKernelSize(usize),

    /// The kernel weight buffer does not match the declared size.
    #[error("Kernel has {0} weights, expected {1}")]
    InvalidKernelLength(usize, usize),

    /// The worker count must be at least one.
    #[error("Worker count must be > 0, got {0}")]
    InvalidWorkerCount(usize),

    /// A worker thread could not be spawned.
    #[error("Failed to spawn worker thread: {0}")]
    ThreadSpawn(#[from] std::io::Error),
}
