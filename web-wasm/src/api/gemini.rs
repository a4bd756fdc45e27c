//! Gemini API client for e-waste image analysis
//!
//! Sends one image plus the analysis instruction and returns the normalized
//! result. Transport failures and non-success statuses are errors; malformed
//! response text is not, it degrades inside the normalizer.

use super::js_error;
use ewaste_ai_common::{build_analysis_prompt, normalize_response, AnalysisResult, Error};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

/// Gemini API request
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Gemini API response
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// Extract the base64 payload from a data URL
///
/// # Arguments
/// * `data_url` - a "data:image/jpeg;base64,/9j/4AAQ..." style data URL
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Extract the MIME type from a data URL, defaulting to "image/jpeg"
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Send a request to the Gemini endpoint and return the first candidate text
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String, JsValue> {
    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let body = serde_json::to_string(request).map_err(|e| js_error(Error::Json(e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(js_error(Error::Api(format!("status {}", resp.status()))));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| js_error(Error::Api("empty response".to_string())))
}

/// Analyze one e-waste image
///
/// Exactly one network call per invocation. The response text is normalized
/// unconditionally, so an `Ok` is always a well-typed AnalysisResult.
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `data_url` - the selected image as a base64 data URL
pub async fn analyze_image(api_key: &str, data_url: &str) -> Result<AnalysisResult, JsValue> {
    let base64_data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| JsValue::from_str("Invalid data URL"))?;
    let mime_type = extract_mime_type_from_data_url(data_url);

    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: build_analysis_prompt(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: base64_data.to_string(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: 0.1,
            response_mime_type: "application/json".to_string(),
        },
    };

    let response_text = call_gemini_api(api_key, &request).await?;

    Ok(normalize_response(&response_text))
}
