//! Bounding-box math for rotation.
//!
//! When an image is rotated about its center, the corners swing outside the
//! original bounds. The output canvas must grow to the axis-aligned bounding
//! box of the rotated rectangle so nothing is clipped:
//!
//! ```text
//! new_w = ceil(w * |cos θ| + h * |sin θ|)
//! new_h = ceil(w * |sin θ| + h * |cos θ|)
//! ```
//!
//! Exact quarter turns never go through the trig path, so 90/180/270/360
//! degree rotations produce exactly swapped or unchanged dimensions.

use thiserror::Error;

/// Errors for rotation operations.
#[derive(Debug, Error, PartialEq)]
pub enum RotateError {
    /// The angle was NaN or infinite; sin/cos are undefined there.
    #[error("Rotation angle must be finite, got {0}")]
    NonFiniteAngle(f64),

    /// Width or height is zero.
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

/// If the angle is an exact multiple of 90 degrees, return the number of
/// quarter turns in `0..4` (normalized into the positive direction).
pub(crate) fn quarter_turns(angle_degrees: f64) -> Option<u8> {
    if angle_degrees % 90.0 != 0.0 {
        return None;
    }
    let turns = (angle_degrees / 90.0) as i64 % 4;
    Some(((turns + 4) % 4) as u8)
}

/// Compute the dimensions of the bounding box for a rotated image.
///
/// The ceiling formula above is the contract the browser pages rely on: a
/// 1000x500 image rotated by 45 degrees lands on a 1061x1061 canvas.
///
/// # Arguments
///
/// * `width` - Original image width
/// * `height` - Original image height
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
///
/// # Errors
///
/// Returns [`RotateError::NonFiniteAngle`] for NaN or infinite angles.
/// Zero dimensions are the caller's problem; the formula itself is total
/// over well-formed numeric input.
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> Result<(u32, u32), RotateError> {
    if !angle_degrees.is_finite() {
        return Err(RotateError::NonFiniteAngle(angle_degrees));
    }

    // Exact quarter turns: swapped or unchanged dimensions, no trig.
    if let Some(turns) = quarter_turns(angle_degrees) {
        return Ok(if turns % 2 == 1 {
            (height, width)
        } else {
            (width, height)
        });
    }

    // Normalize before converting so angle and angle + 360 take the same path.
    let angle_rad = (angle_degrees % 360.0).to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    let new_w = (w * cos + h * sin).ceil() as u32;
    let new_h = (w * sin + h * cos).ceil() as u32;

    Ok((new_w.max(1), new_h.max(1)))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
