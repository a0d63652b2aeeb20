//! WASM bindings for the PDF page tools.
//!
//! The page's PDF library does the document surgery; these bindings just
//! turn the user's selection text into validated page lists.

use quicktools_core::pages;
use wasm_bindgen::prelude::*;

/// Parse a selection like `"1-3, 5, 8-10"` into sorted unique 1-based
/// page numbers, validated against the document's page count.
#[wasm_bindgen]
pub fn parse_page_ranges(input: &str, page_count: u32) -> Result<Vec<u32>, JsValue> {
    pages::parse_page_ranges(input, page_count).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute the pages that survive deleting the selection.
#[wasm_bindgen]
pub fn pages_after_delete(page_count: u32, selection: &str) -> Result<Vec<u32>, JsValue> {
    pages::pages_after_delete(page_count, selection).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Flatten per-document page counts into the merged page order.
///
/// Returns an array of `[documentIndex, pageNumber]` pairs.
#[wasm_bindgen]
pub fn merge_order(page_counts: Vec<u32>) -> Result<JsValue, JsValue> {
    let order = pages::merge_order(&page_counts);
    serde_wasm_bindgen::to_value(&order).map_err(|e| JsValue::from_str(&e.to_string()))
}
