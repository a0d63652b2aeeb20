//! WASM bindings for the password generator.

use quicktools_core::password::{self, PasswordOptions};
use wasm_bindgen::prelude::*;

fn options_from_js(options: JsValue) -> Result<PasswordOptions, JsValue> {
    serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate a password from `{ length, lowercase, uppercase, digits, symbols }`.
///
/// Randomness comes from the OS entropy source via `getrandom`.
#[wasm_bindgen]
pub fn generate_password(options: JsValue) -> Result<String, JsValue> {
    let options = options_from_js(options)?;
    password::generate_password(&options, &mut rand::rng())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The union alphabet for the given options, for display in the UI.
#[wasm_bindgen]
pub fn password_charset(options: JsValue) -> Result<String, JsValue> {
    let options = options_from_js(options)?;
    Ok(password::charset(&options))
}

/// The generator's default options, for form initialization.
#[wasm_bindgen]
pub fn default_password_options() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PasswordOptions::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
