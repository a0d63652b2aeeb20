//! Image rotation: bounding-box geometry and rendering.
//!
//! The rotation tool rotates an uploaded image about its center by an
//! arbitrary angle. The math is split from the rendering:
//!
//! 1. [`rotated_bounds`] computes the expanded canvas that contains the
//!    rotated image without clipping.
//! 2. [`rotate_image`] fills the canvas with a background color and draws
//!    the source centered.
//!
//! Rotation angles are in degrees, positive = counter-clockwise. Exact
//! multiples of 90 degrees are lossless; other angles are resampled.

mod geometry;
mod render;

pub use geometry::{rotated_bounds, RotateError};
pub use render::rotate_image;
