//! WASM bindings for jsonparse-core.
//!
//! Exposes `fromJson` and `describe` as `#[wasm_bindgen]` functions that can
//! be called from JavaScript/TypeScript. `fromJson` returns the tagged JSON
//! report rather than JS objects, so typed vectors and duplicate keys survive
//! the boundary unchanged.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p jsonparse-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/jsonparse_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Convert a JSON string and return the tagged report as a JSON string.
///
/// Throws a JS error if the input is not valid JSON.
#[wasm_bindgen(js_name = fromJson)]
pub fn from_json(json: &str) -> std::result::Result<String, JsValue> {
    let value = jsonparse_core::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a JSON string and return its structural summary.
///
/// Throws a JS error if the input is not valid JSON.
#[wasm_bindgen]
pub fn describe(json: &str) -> std::result::Result<String, JsValue> {
    jsonparse_core::from_json(json)
        .map(|value| jsonparse_core::describe(&value))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
