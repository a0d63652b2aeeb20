//! Rotation rendering.
//!
//! The output canvas is sized by [`rotated_bounds`] and the source is drawn
//! centered, so the full image stays visible at any angle. Pixels the source
//! never covers take the background fill (the canvas is painted before
//! drawing, which also flattens transparency).
//!
//! Exact multiples of 90 degrees are pure index remaps and therefore
//! lossless. Every other angle is resampled with inverse-mapped bilinear
//! interpolation: for each output pixel we compute which source location
//! lands there and interpolate its four neighbors.

use super::geometry::{quarter_turns, rotated_bounds, RotateError};
use crate::raster::{RasterImage, Rgb};

/// Rotate an image about its center onto an expanded canvas.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
/// * `background` - Fill for canvas areas outside the rotated source
///
/// # Errors
///
/// Returns [`RotateError::EmptyImage`] for zero-sized input and
/// [`RotateError::NonFiniteAngle`] for NaN or infinite angles.
pub fn rotate_image(
    image: &RasterImage,
    angle_degrees: f64,
    background: Rgb,
) -> Result<RasterImage, RotateError> {
    if image.is_empty() {
        return Err(RotateError::EmptyImage {
            width: image.width,
            height: image.height,
        });
    }
    if !angle_degrees.is_finite() {
        return Err(RotateError::NonFiniteAngle(angle_degrees));
    }

    // Quarter turns shuffle pixels without resampling.
    if let Some(turns) = quarter_turns(angle_degrees) {
        return Ok(rotate_quarter(image, turns));
    }

    let (dst_w, dst_h) = rotated_bounds(image.width, image.height, angle_degrees)?;
    let (src_w, src_h) = (image.width as f64, image.height as f64);

    // Negate angle for correct visual rotation direction
    let angle_rad = -angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = vec![0u8; (dst_w as usize) * (dst_h as usize) * 3];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Translate to the canvas center, inverse-rotate, translate back
            let dx = dst_x as f64 - dst_cx;
            let dy = dst_y as f64 - dst_cy;

            let src_x = dx * cos - dy * sin + src_cx;
            let src_y = dx * sin + dy * cos + src_cy;

            let pixel = sample_bilinear(image, src_x, src_y, background);

            let dst_idx = ((dst_y * dst_w + dst_x) * 3) as usize;
            output[dst_idx..dst_idx + 3].copy_from_slice(&pixel);
        }
    }

    Ok(RasterImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    })
}

/// Rotate by `turns` quarter turns (0..4) with exact pixel remapping.
fn rotate_quarter(image: &RasterImage, turns: u8) -> RasterImage {
    if turns == 0 {
        return image.clone();
    }

    let (w, h) = (image.width as usize, image.height as usize);
    let (out_w, out_h) = if turns % 2 == 1 { (h, w) } else { (w, h) };
    let mut output = vec![0u8; w * h * 3];

    for out_y in 0..out_h {
        for out_x in 0..out_w {
            let (src_x, src_y) = match turns {
                1 => (out_y, h - 1 - out_x),
                2 => (w - 1 - out_x, h - 1 - out_y),
                _ => (w - 1 - out_y, out_x),
            };
            let src_idx = (src_y * w + src_x) * 3;
            let dst_idx = (out_y * out_w + out_x) * 3;
            output[dst_idx..dst_idx + 3].copy_from_slice(&image.pixels[src_idx..src_idx + 3]);
        }
    }

    RasterImage {
        width: out_w as u32,
        height: out_h as u32,
        pixels: output,
    }
}

/// Fetch a source pixel, or the background for out-of-bounds taps.
#[inline]
fn tap(image: &RasterImage, px: i64, py: i64, background: Rgb) -> [f64; 3] {
    if px < 0 || py < 0 || px >= image.width as i64 || py >= image.height as i64 {
        return [
            background[0] as f64,
            background[1] as f64,
            background[2] as f64,
        ];
    }
    let idx = (py as usize * image.width as usize + px as usize) * 3;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation.
///
/// The 4 nearest pixels are weighted by distance; taps that fall outside
/// the source blend with the background, which softens the cut edge the
/// same way the canvas fill does.
fn sample_bilinear(image: &RasterImage, x: f64, y: f64, background: Rgb) -> [u8; 3] {
    let (w, h) = (image.width as f64, image.height as f64);

    // Entirely outside the source footprint
    if x < -1.0 || x >= w || y < -1.0 || y >= h {
        return background;
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = tap(image, x0, y0, background);
    let p10 = tap(image, x0 + 1, y0, background);
    let p01 = tap(image, x0, y0 + 1, background);
    let p11 = tap(image, x0 + 1, y0 + 1, background);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::raster::WHITE;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=48, 1u32..=48)
    }

    fn gradient_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for i in 0..(width * height) {
            let v = (i % 256) as u8;
            pixels.extend_from_slice(&[v, v, v]);
        }
        RasterImage {
            width,
            height,
            pixels,
        }
    }

    proptest! {
        /// Property: output dimensions always match the bounds formula.
        #[test]
        fn prop_output_dims_match_bounds(
            (width, height) in dimensions_strategy(),
            angle in -360.0f64..=360.0,
        ) {
            let img = gradient_image(width, height);
            let result = rotate_image(&img, angle, WHITE).unwrap();
            let bounds = rotated_bounds(width, height, angle).unwrap();
            prop_assert_eq!((result.width, result.height), bounds);
            prop_assert_eq!(
                result.pixels.len(),
                (result.width as usize) * (result.height as usize) * 3
            );
        }

        /// Property: quarter turns preserve the pixel multiset.
        #[test]
        fn prop_quarter_turns_preserve_pixels(
            (width, height) in dimensions_strategy(),
            turns in 1u8..=3,
        ) {
            let img = gradient_image(width, height);
            let result = rotate_image(&img, (turns as f64) * 90.0, WHITE).unwrap();

            let mut before: Vec<u8> = img.pixels.iter().step_by(3).copied().collect();
            let mut after: Vec<u8> = result.pixels.iter().step_by(3).copied().collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        /// Property: rotation is deterministic.
        #[test]
        fn prop_rotation_is_deterministic(
            (width, height) in dimensions_strategy(),
            angle in -180.0f64..=180.0,
        ) {
            let img = gradient_image(width, height);
            let a = rotate_image(&img, angle, WHITE).unwrap();
            let b = rotate_image(&img, angle, WHITE).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
