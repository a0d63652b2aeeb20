//! Image encoding WASM bindings.
//!
//! The page turns the returned bytes into a `Blob` and hands the user a
//! download link.

use crate::types::JsRasterImage;
use quicktools_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image as PNG bytes (the rotation tool's default download).
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image as JPEG bytes with the given quality (1-100).
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRasterImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(&image.to_raster(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}
