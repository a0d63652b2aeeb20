//! WASM bindings for the image rotation tool.

use crate::types::JsRasterImage;
use quicktools_core::raster::WHITE;
use quicktools_core::{rotate_image as core_rotate, rotated_bounds as core_bounds, ImageDimensions};
use wasm_bindgen::prelude::*;

/// Compute the canvas size needed to hold a rotated image.
///
/// Returns `{ width, height }`. The page sizes its output canvas with this
/// before asking for the actual render.
#[wasm_bindgen]
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> Result<JsValue, JsValue> {
    let (w, h) = core_bounds(width, height, angle_degrees)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&ImageDimensions::new(w, h))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate an image about its center on a white canvas.
///
/// The output canvas is expanded so nothing is clipped; exact multiples of
/// 90 degrees are lossless.
#[wasm_bindgen]
pub fn rotate_image(image: &JsRasterImage, angle_degrees: f64) -> Result<JsRasterImage, JsValue> {
    let result = core_rotate(&image.to_raster(), angle_degrees, WHITE)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRasterImage::from_raster(result))
}

/// Rotate an image with an explicit background fill color.
#[wasm_bindgen]
pub fn rotate_image_with_background(
    image: &JsRasterImage,
    angle_degrees: f64,
    r: u8,
    g: u8,
    b: u8,
) -> Result<JsRasterImage, JsValue> {
    let result = core_rotate(&image.to_raster(), angle_degrees, [r, g, b])
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRasterImage::from_raster(result))
}
