use std::path::Path;

use blurkit_image::{Image, ImageSize};

use crate::error::IoError;

// whitespace separating PPM header tokens
fn is_ppm_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Read the next whitespace-delimited header token, skipping `#` comments.
fn next_token<'a>(data: &'a [u8], pos: &mut usize) -> Result<&'a [u8], IoError> {
    while *pos < data.len() {
        if is_ppm_whitespace(data[*pos]) {
            *pos += 1;
        } else if data[*pos] == b'#' {
            while *pos < data.len() && data[*pos] != b'\n' {
                *pos += 1;
            }
        } else {
            break;
        }
    }

    let start = *pos;
    while *pos < data.len() && !is_ppm_whitespace(data[*pos]) {
        *pos += 1;
    }

    if start == *pos {
        return Err(IoError::InvalidPpmHeader(
            "unexpected end of header".to_string(),
        ));
    }

    Ok(&data[start..*pos])
}

fn parse_header_value(token: &[u8]) -> Result<usize, IoError> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| {
            IoError::InvalidPpmHeader(format!(
                "expected an integer, got {:?}",
                String::from_utf8_lossy(token)
            ))
        })
}

/// Reads a binary PPM (P6) image from the given file path.
///
/// Only three-channel, 8-bit images (maxval 255) are supported.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM image.
///
/// # Returns
///
/// An RGB image containing the PPM image data.
pub fn read_image_ppm(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let data = std::fs::read(file_path)?;

    let mut pos = 0;
    let magic = next_token(&data, &mut pos)?;
    if magic != b"P6" {
        return Err(IoError::InvalidPpmHeader(format!(
            "expected magic P6, got {:?}",
            String::from_utf8_lossy(magic)
        )));
    }

    let width = parse_header_value(next_token(&data, &mut pos)?)?;
    let height = parse_header_value(next_token(&data, &mut pos)?)?;
    let maxval = parse_header_value(next_token(&data, &mut pos)?)?;
    if maxval != 255 {
        return Err(IoError::InvalidPpmHeader(format!(
            "expected maxval 255, got {maxval}"
        )));
    }

    // a single whitespace byte separates the header from the pixel payload
    pos += 1;

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| {
            IoError::InvalidPpmHeader(format!("image dimensions {width}x{height} overflow"))
        })?;
    let pixels = data
        .get(pos..pos + expected)
        .ok_or(IoError::TruncatedPpmData(
            data.len().saturating_sub(pos),
            expected,
        ))?;

    Ok(Image::new(ImageSize { width, height }, pixels.to_vec())?)
}

/// Writes an image as a binary PPM (P6) file to the given file path.
///
/// # Arguments
///
/// * `file_path` - The path to write the PPM image to.
/// * `image` - The RGB image to write.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let mut data = format!("P6\n{} {}\n255\n", image.width(), image.height()).into_bytes();
    data.extend_from_slice(image.as_slice());

    std::fs::write(file_path, data)?;

    Ok(())
}
