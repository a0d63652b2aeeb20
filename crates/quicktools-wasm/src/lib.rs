//! QuickTools WASM - WebAssembly bindings for QuickTools
//!
//! This crate exposes the quicktools-core tool logic to the
//! JavaScript/TypeScript tool pages.
//!
//! # Module Structure
//!
//! - `rotate` - Image rotation bindings (bounds, render)
//! - `encode` - Image encoding bindings (PNG, JPEG export)
//! - `types` - WASM-compatible wrapper types for image data
//! - `pages` - PDF page selection parsing for delete/merge
//! - `textcodec` - Base64 decode/encode bindings
//! - `password` - Password generator bindings
//! - `embed` - HTML embed snippet bindings
//! - `dns` - DNS lookup validation and formatting bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { rotate_image, JsRasterImage } from '@quicktools/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = JsRasterImage.from_rgba(w, h, imageData.data);
//! const rotated = rotate_image(image, 45.0);
//! ```

use wasm_bindgen::prelude::*;

mod dns;
mod embed;
mod encode;
mod pages;
mod password;
mod rotate;
mod textcodec;
mod types;

// Re-export public types
pub use dns::{check_batch_quota, format_records, parse_domain_list, parse_record_type, record_types};
pub use embed::{default_embed_options, embed_snippet, escape_attribute};
pub use encode::{encode_jpeg, encode_png};
pub use pages::{merge_order, pages_after_delete, parse_page_ranges};
pub use password::{default_password_options, generate_password, password_charset};
pub use rotate::{rotate_image, rotate_image_with_background, rotated_bounds};
pub use textcodec::{decode_base64, decode_base64_text, encode_base64};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
