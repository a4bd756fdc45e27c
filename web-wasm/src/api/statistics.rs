//! Statistics endpoint client
//!
//! Any failure (network, status, parse) is logged and replaced by the fixed
//! illustrative numbers, so the dashboard always has something to chart.

use super::js_error;
use ewaste_ai_common::{parse_statistics_response, Error, StatisticsData};
use gloo::console;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const STATISTICS_API_URL: &str = "https://api.gemini.ai/v1/ewaste-statistics";

/// Fetch aggregate statistics, substituting fallback numbers on any error
pub async fn fetch_statistics() -> StatisticsData {
    match try_fetch_statistics().await {
        Ok(data) => data,
        Err(e) => {
            console::warn!(format!(
                "statistics fetch failed, using fallback data: {:?}",
                e
            ));
            StatisticsData::fallback()
        }
    }
}

async fn try_fetch_statistics() -> Result<StatisticsData, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(STATISTICS_API_URL, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(js_error(Error::Api(format!("status {}", resp.status()))));
    }

    let text_value = JsFuture::from(resp.text()?).await?;
    let body = text_value
        .as_string()
        .ok_or_else(|| js_error(Error::Api("response body is not text".to_string())))?;

    parse_statistics_response(&body).map_err(js_error)
}
