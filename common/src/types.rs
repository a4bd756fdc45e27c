//! Analysis result types
//!
//! Shared between the normalizer and the Web(WASM) frontend:
//! - Category: one identified e-waste component with optional confidence
//! - Recyclability: tri-state verdict (true / false / unknown)
//! - Recommendation: plain text or structured disposal breakdown
//! - AnalysisResult: the full normalized response

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Placeholder used when a decoded payload carries no usable recommendation
pub const NO_RECOMMENDATION: &str = "No recommendation provided.";

/// One identified component, e.g. {"name": "battery", "confidence": 0.9}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Recyclability verdict
///
/// `Unknown` is an explicit value, distinct from a missing key: a payload
/// whose `recyclable` is not a boolean must never be guessed into `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recyclability {
    Recyclable,
    NotRecyclable,
    #[default]
    Unknown,
}

impl Recyclability {
    pub fn from_bool(value: bool) -> Self {
        if value {
            Recyclability::Recyclable
        } else {
            Recyclability::NotRecyclable
        }
    }
}

impl fmt::Display for Recyclability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recyclability::Recyclable => "Recyclable",
            Recyclability::NotRecyclable => "Not Recyclable",
            Recyclability::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

// Wire form: true / false / "unknown". Round-trips through the normalizer:
// the string form is not a boolean, so it sanitizes back to Unknown.
impl Serialize for Recyclability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Recyclability::Recyclable => serializer.serialize_bool(true),
            Recyclability::NotRecyclable => serializer.serialize_bool(false),
            Recyclability::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for Recyclability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecyclabilityVisitor;

        impl<'de> Visitor<'de> for RecyclabilityVisitor {
            type Value = Recyclability;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or the string \"unknown\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(Recyclability::from_bool(v))
            }

            fn visit_str<E: de::Error>(self, _v: &str) -> Result<Self::Value, E> {
                Ok(Recyclability::Unknown)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Recyclability::Unknown)
            }
        }

        deserializer.deserialize_any(RecyclabilityVisitor)
    }
}

/// Structured disposal breakdown (the richer upstream response variant)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_advice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposal_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycling_centers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_impact: Option<String>,
}

/// Disposal recommendation
///
/// The upstream service has been observed returning both a flat string and a
/// structured record. Both are valid concurrently; the variant is decided once
/// at normalization time and never re-inspected at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    Plain(String),
    Structured(RecommendationDetail),
}

impl Default for Recommendation {
    fn default() -> Self {
        Recommendation::Plain(NO_RECOMMENDATION.to_string())
    }
}

/// Normalized analysis result
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    /// Ordered, unique by position (duplicate names are preserved)
    pub categories: Vec<Category>,
    pub recyclable: Recyclability,
    pub recommendation: Recommendation,
}

impl AnalysisResult {
    /// Safe default shape used when a payload is not valid structured data.
    /// The cleaned text is kept as the recommendation so nothing is dropped.
    pub fn fallback(cleaned_text: impl Into<String>) -> Self {
        AnalysisResult {
            categories: Vec::new(),
            recyclable: Recyclability::Unknown,
            recommendation: Recommendation::Plain(cleaned_text.into()),
        }
    }
}

/// Confidence as a percentage with one decimal, e.g. 0.905 -> "90.5%"
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_default() {
        let result = AnalysisResult::default();
        assert!(result.categories.is_empty());
        assert_eq!(result.recyclable, Recyclability::Unknown);
        assert_eq!(
            result.recommendation,
            Recommendation::Plain(NO_RECOMMENDATION.to_string())
        );
    }

    #[test]
    fn test_category_serialize_with_confidence() {
        let category = Category {
            name: "battery".to_string(),
            confidence: Some(0.9),
        };

        let json = serde_json::to_string(&category).expect("serialize failed");
        assert_eq!(json, r#"{"name":"battery","confidence":0.9}"#);
    }

    #[test]
    fn test_category_serialize_without_confidence() {
        let category = Category {
            name: "cable".to_string(),
            confidence: None,
        };

        let json = serde_json::to_string(&category).expect("serialize failed");
        assert_eq!(json, r#"{"name":"cable"}"#);
    }

    #[test]
    fn test_recyclability_serialize() {
        assert_eq!(
            serde_json::to_string(&Recyclability::Recyclable).unwrap(),
            "true"
        );
        assert_eq!(
            serde_json::to_string(&Recyclability::NotRecyclable).unwrap(),
            "false"
        );
        assert_eq!(
            serde_json::to_string(&Recyclability::Unknown).unwrap(),
            "\"unknown\""
        );
    }

    #[test]
    fn test_recyclability_deserialize() {
        let r: Recyclability = serde_json::from_str("true").unwrap();
        assert_eq!(r, Recyclability::Recyclable);

        let r: Recyclability = serde_json::from_str("false").unwrap();
        assert_eq!(r, Recyclability::NotRecyclable);

        let r: Recyclability = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(r, Recyclability::Unknown);

        let r: Recyclability = serde_json::from_str("null").unwrap();
        assert_eq!(r, Recyclability::Unknown);
    }

    #[test]
    fn test_recyclability_display() {
        assert_eq!(Recyclability::Recyclable.to_string(), "Recyclable");
        assert_eq!(Recyclability::NotRecyclable.to_string(), "Not Recyclable");
        assert_eq!(Recyclability::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_recommendation_plain_roundtrip() {
        let rec = Recommendation::Plain("Take to hazardous waste center".to_string());
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, "\"Take to hazardous waste center\"");

        let back: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_recommendation_structured_roundtrip() {
        let rec = Recommendation::Structured(RecommendationDetail {
            general_advice: Some("Remove the battery first".to_string()),
            disposal_methods: Some(vec!["Certified e-waste drop-off".to_string()]),
            recycling_centers: None,
            environmental_impact: Some("Lead can leach into groundwater".to_string()),
        });

        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"generalAdvice\""));
        assert!(json.contains("\"disposalMethods\""));
        assert!(!json.contains("recyclingCenters"));

        let back: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_fallback_shape() {
        let result = AnalysisResult::fallback("Sorry, I cannot process this image.");
        assert!(result.categories.is_empty());
        assert_eq!(result.recyclable, Recyclability::Unknown);
        assert_eq!(
            result.recommendation,
            Recommendation::Plain("Sorry, I cannot process this image.".to_string())
        );
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.9), "90.0%");
        assert_eq!(format_confidence(0.905), "90.5%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }
}
