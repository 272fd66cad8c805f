use std::path::Path;

use blurkit_imgproc::filter::kernels::Kernel;

use crate::error::IoError;

/// Reads a convolution kernel from a text file.
///
/// The format is the kernel side length followed by `size * size`
/// whitespace-separated floating point weights in row-major order, e.g.
///
/// ```text
/// 3
/// 1.0 2.0 1.0
/// 2.0 4.0 2.0
/// 1.0 2.0 1.0
/// ```
///
/// # Arguments
///
/// * `file_path` - The path to the kernel description file.
pub fn read_kernel(file_path: impl AsRef<Path>) -> Result<Kernel, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(file_path)?;
    let mut tokens = contents.split_whitespace();

    let size = tokens
        .next()
        .ok_or_else(|| IoError::InvalidKernelFile("missing kernel size".to_string()))?
        .parse::<usize>()
        .map_err(|e| IoError::InvalidKernelFile(format!("bad kernel size: {e}")))?;

    let weights = tokens
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|e| IoError::InvalidKernelFile(format!("bad weight {token:?}: {e}")))
        })
        .collect::<Result<Vec<f32>, IoError>>()?;

    Ok(Kernel::new(size, weights)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_kernel() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("kernel.txt");

        let mut file = std::fs::File::create(&file_path)?;
        writeln!(file, "3")?;
        writeln!(file, "1.0 2.0 1.0")?;
        writeln!(file, "2.0 4.0 2.0")?;
        writeln!(file, "1.0 2.0 1.0")?;

        let kernel = read_kernel(&file_path)?;
        assert_eq!(kernel.size(), 3);
        assert_eq!(kernel.weight(1, 1), 4.0);
        assert_eq!(kernel.weight(0, 2), 1.0);

        Ok(())
    }

    #[test]
    fn test_read_kernel_missing_file() {
        let result = read_kernel("/nonexistent/kernel.txt");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn test_read_kernel_bad_size() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("kernel.txt");
        std::fs::write(&file_path, "three 1.0")?;

        let result = read_kernel(&file_path);
        assert!(matches!(result, Err(IoError::InvalidKernelFile(_))));

        Ok(())
    }

    #[test]
    fn test_read_kernel_wrong_weight_count() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("kernel.txt");
        std::fs::write(&file_path, "3 1.0 1.0")?;

        let result = read_kernel(&file_path);
        assert!(matches!(result, Err(IoError::KernelCreationError(_))));

        Ok(())
    }
}
