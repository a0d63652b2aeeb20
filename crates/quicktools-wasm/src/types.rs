//! WASM-compatible wrapper types for image data.
//!
//! The rotation page works with canvas `ImageData`, which is RGBA; the core
//! works with packed RGB. [`JsRasterImage`] owns the RGB copy in WASM memory
//! and converts at the boundary.

use quicktools_core::RasterImage;
use wasm_bindgen::prelude::*;

/// A raster image wrapper for JavaScript.
///
/// Pixel data lives in WASM memory; `pixels()` copies it out as a
/// `Uint8Array`. The `free()` method releases the memory eagerly, though
/// wasm-bindgen's finalizer would get there eventually anyway.
#[wasm_bindgen]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            width,
            height,
            pixels,
        }
    }

    /// Create a JsRasterImage from canvas `ImageData` bytes (RGBA).
    ///
    /// The alpha channel is dropped; the canvas is already composited
    /// against its background by the time the page reads it back.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<JsRasterImage, JsValue> {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(JsValue::from_str(&format!(
                "Expected {} RGBA bytes for {}x{}, got {}",
                expected,
                width,
                height,
                rgba.len()
            )));
        }

        let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 3);
        for px in rgba.chunks_exact(4) {
            pixels.extend_from_slice(&px[0..3]);
        }

        Ok(JsRasterImage {
            width,
            height,
            pixels,
        })
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA bytes suitable for `ImageData`, with opaque alpha.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity((self.width as usize) * (self.height as usize) * 4);
        for px in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(px);
            rgba.push(255);
        }
        rgba
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRasterImage {
    /// Create a JsRasterImage from a core RasterImage.
    pub(crate) fn from_raster(img: RasterImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core RasterImage. Clones the pixel data.
    pub(crate) fn to_raster(&self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
