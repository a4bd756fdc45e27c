//! External service clients

pub mod gemini;
pub mod statistics;

use ewaste_ai_common::Error;
use wasm_bindgen::JsValue;

/// Carry a common Error across the JS boundary in its display form
pub(crate) fn js_error(error: Error) -> JsValue {
    JsValue::from_str(&error.to_string())
}
