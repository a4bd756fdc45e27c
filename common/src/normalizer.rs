//! AI response normalizer
//!
//! Converts the untrusted text returned by the inference endpoint into a
//! strictly-typed AnalysisResult. Malformed text never raises: every failure
//! degrades to a safe default shape so the UI always has something to show.

use crate::types::{
    AnalysisResult, Category, Recommendation, RecommendationDetail, Recyclability,
    NO_RECOMMENDATION,
};
use serde_json::Value;

/// Strip Markdown code-fence markers from a response and trim whitespace
///
/// The model frequently wraps its JSON in a ```json ... ``` block even when
/// asked for a JSON MIME type. An unterminated fence is tolerated: everything
/// after the opening marker is kept.
///
/// # Arguments
/// * `response` - raw response text from the inference endpoint
///
/// # Returns
/// The fenced content if a fence is present, otherwise the trimmed input
pub fn clean_response(response: &str) -> String {
    let trimmed = response.trim();

    if let Some(start_marker) = trimmed.find("```") {
        let after = &trimmed[start_marker + 3..];
        let after = after.strip_prefix("json").unwrap_or(after);
        if let Some(end) = after.find("```") {
            return after[..end].trim().to_string();
        }
        return after.trim().to_string();
    }

    trimmed.to_string()
}

/// Normalize an inference response into an AnalysisResult
///
/// Never fails. Text that is not a JSON object falls back to
/// `{ categories: [], recyclable: unknown, recommendation: <cleaned text> }`;
/// a JSON object is sanitized field by field, so a single mistyped key does
/// not discard the rest of the payload.
///
/// # Arguments
/// * `response` - raw response text from the inference endpoint
///
/// # Examples
/// ```
/// use ewaste_ai_common::{normalize_response, Recyclability};
///
/// let result = normalize_response("Sorry, I cannot process this image.");
/// assert!(result.categories.is_empty());
/// assert_eq!(result.recyclable, Recyclability::Unknown);
/// ```
pub fn normalize_response(response: &str) -> AnalysisResult {
    let cleaned = clean_response(response);

    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(v) => v,
        Err(_) => return AnalysisResult::fallback(cleaned),
    };

    let Some(map) = value.as_object() else {
        return AnalysisResult::fallback(cleaned);
    };

    AnalysisResult {
        categories: sanitize_categories(map.get("categories")),
        recyclable: sanitize_recyclable(map.get("recyclable")),
        recommendation: sanitize_recommendation(map.get("recommendation")),
    }
}

/// Non-array values force an empty sequence; order is preserved
fn sanitize_categories(value: Option<&Value>) -> Vec<Category> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items.iter().filter_map(sanitize_category).collect()
}

fn sanitize_category(item: &Value) -> Option<Category> {
    match item {
        // Bare strings are accepted as a name with no confidence
        Value::String(name) => Some(Category {
            name: name.clone(),
            confidence: None,
        }),
        Value::Object(map) => {
            let name = map.get("name")?.as_str()?.to_string();
            let confidence = map.get("confidence").and_then(Value::as_f64);
            Some(Category { name, confidence })
        }
        _ => None,
    }
}

/// Anything that is not a boolean becomes Unknown, never a guessed false
fn sanitize_recyclable(value: Option<&Value>) -> Recyclability {
    match value.and_then(Value::as_bool) {
        Some(b) => Recyclability::from_bool(b),
        None => Recyclability::Unknown,
    }
}

fn sanitize_recommendation(value: Option<&Value>) -> Recommendation {
    match value {
        Some(Value::String(text)) => Recommendation::Plain(text.clone()),
        Some(Value::Object(map)) => Recommendation::Structured(RecommendationDetail {
            general_advice: get_string(map, "generalAdvice"),
            disposal_methods: get_string_vec(map, "disposalMethods"),
            recycling_centers: get_string_vec(map, "recyclingCenters"),
            environmental_impact: get_string(map, "environmentalImpact"),
        }),
        _ => Recommendation::Plain(NO_RECOMMENDATION.to_string()),
    }
}

fn get_string(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)?.as_str().map(str::to_string)
}

fn get_string_vec(map: &serde_json::Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = map.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
    )
}
