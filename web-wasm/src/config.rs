//! Runtime configuration
//!
//! The inference API key is supplied externally through a `window` global so
//! no credential is compiled into the bundle. A missing or empty key is a
//! configuration error surfaced once at page load, not a silent failure.

use ewaste_ai_common::Error;
use wasm_bindgen::JsValue;

/// Name of the global the deployment sets, e.g. in index.html:
/// `window.EWASTE_API_KEY = "...";`
pub const API_KEY_GLOBAL: &str = "EWASTE_API_KEY";

/// Application configuration, loaded once at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: Option<String>,
}

impl AppConfig {
    pub fn load() -> Self {
        AppConfig {
            api_key: read_api_key(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// The key, or the configuration error shown in the shell banner
    pub fn require_api_key(&self) -> Result<&str, Error> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "no inference API key found; set window.{} before loading the app",
                API_KEY_GLOBAL
            ))
        })
    }
}

fn read_api_key() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(API_KEY_GLOBAL)).ok()?;
    let key = value.as_string()?;
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
