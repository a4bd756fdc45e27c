//! Prompt construction for the inference endpoint
//!
//! The model is asked for a JSON-shaped answer with the keys `categories`,
//! `recyclable` and `recommendation`. The output is untyped text and is not
//! guaranteed to follow the format; the normalizer handles every deviation.

/// Build the e-waste analysis instruction sent alongside the image
pub fn build_analysis_prompt() -> String {
    r#"Analyze this photograph of electronic waste and respond with JSON in exactly this format:

{
  "categories": [
    {"name": "identified component or material", "confidence": 0.0}
  ],
  "recyclable": true,
  "recommendation": {
    "generalAdvice": "how to handle this item",
    "disposalMethods": ["suggested disposal method"],
    "recyclingCenters": ["type of facility that accepts this item"],
    "environmentalImpact": "impact of correct or incorrect disposal"
  }
}

Rules:
- "confidence" is a number between 0 and 1.
- "recyclable" must be a JSON boolean.
- "recommendation" may alternatively be a single plain-text string.
- Respond with the JSON only, no surrounding prose."#
        .to_string()
}
