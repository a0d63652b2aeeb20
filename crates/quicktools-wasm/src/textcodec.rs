//! WASM bindings for the Base64 tool.

use quicktools_core::textcodec;
use wasm_bindgen::prelude::*;

/// Decode Base64 input to raw bytes.
#[wasm_bindgen]
pub fn decode_base64(input: &str) -> Result<Vec<u8>, JsValue> {
    textcodec::decode_base64(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode Base64 input to UTF-8 text.
#[wasm_bindgen]
pub fn decode_base64_text(input: &str) -> Result<String, JsValue> {
    textcodec::decode_base64_text(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode bytes as standard Base64 with padding.
#[wasm_bindgen]
pub fn encode_base64(bytes: &[u8]) -> String {
    textcodec::encode_base64(bytes)
}
