//! Flattening rasters to downloadable bytes.
//!
//! The image tools hand their result back to the page as an encoded file:
//! PNG by default (lossless, what the rotation tool downloads) or JPEG with
//! a quality setting. Both encoders come from the `image` crate.

use crate::raster::RasterImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur while encoding an output image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Image encoding failed: {0}")]
    EncodingFailed(String),
}

fn validate(image: &RasterImage) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }
    let expected = (image.width as usize) * (image.height as usize) * 3;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

/// Encode a raster as PNG bytes.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a raster as JPEG bytes.
///
/// Quality is clamped to 1..=100; 80-90 is a good default for web use.
pub fn encode_jpeg(image: &RasterImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_magic_bytes() {
        let img = RasterImage::filled(32, 16, [128, 64, 32]);
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_jpeg_magic_bytes() {
        let img = RasterImage::filled(32, 16, [128, 64, 32]);
        let jpeg = encode_jpeg(&img, 90).unwrap();

        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let img = RasterImage::filled(10, 10, [100, 100, 100]);
        assert!(encode_jpeg(&img, 0).is_ok());
        assert!(encode_jpeg(&img, 255).is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let img = RasterImage::new(0, 10, vec![]);
        assert!(matches!(
            encode_png(&img),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_jpeg(&img, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_mismatched_pixel_data_rejected() {
        let img = RasterImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 9 * 10 * 3],
        };
        assert!(matches!(
            encode_png(&img),
            Err(EncodeError::InvalidPixelData {
                expected: 300,
                actual: 270
            })
        ));
    }

    #[test]
    fn test_png_roundtrips_losslessly() {
        let mut img = RasterImage::filled(8, 8, [0, 0, 0]);
        for (i, px) in img.pixels.iter_mut().enumerate() {
            *px = (i % 251) as u8;
        }

        let png = encode_png(&img).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().into_rgb8();
        assert_eq!(RasterImage::from_rgb_image(decoded), img);
    }

    #[test]
    fn test_non_square_images_encode() {
        let wide = RasterImage::filled(200, 50, [128, 128, 128]);
        let tall = RasterImage::filled(50, 200, [128, 128, 128]);
        assert!(encode_png(&wide).is_ok());
        assert!(encode_jpeg(&tall, 90).is_ok());
    }
}
