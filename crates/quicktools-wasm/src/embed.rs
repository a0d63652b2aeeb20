//! WASM bindings for the HTML embed generator.

use quicktools_core::embed::{self, EmbedOptions};
use wasm_bindgen::prelude::*;

/// Build an embed snippet from
/// `{ kind, url, width, height, title? }` where kind is one of
/// `"iframe" | "image" | "video" | "audio"`.
#[wasm_bindgen]
pub fn embed_snippet(options: JsValue) -> Result<String, JsValue> {
    let options: EmbedOptions =
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    embed::embed_snippet(&options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Escape text for use inside a double-quoted HTML attribute.
#[wasm_bindgen]
pub fn escape_attribute(text: &str) -> String {
    embed::escape_attribute(text)
}

/// The embed form's default options.
#[wasm_bindgen]
pub fn default_embed_options() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&EmbedOptions::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
