//! End-to-end normalization checks against observed inference responses

use ewaste_ai_common::{
    normalize_response, Recommendation, Recyclability, NO_RECOMMENDATION,
};

#[test]
fn fenced_payload_normalizes_to_typed_result() {
    let response = "```json\n{\"categories\":[{\"name\":\"battery\",\"confidence\":0.9}],\"recyclable\":true,\"recommendation\":\"Take to hazardous waste center\"}\n```";

    let result = normalize_response(response);
    assert_eq!(result.categories.len(), 1);
    assert_eq!(result.categories[0].name, "battery");
    assert_eq!(result.categories[0].confidence, Some(0.9));
    assert_eq!(result.recyclable, Recyclability::Recyclable);
    assert_eq!(
        result.recommendation,
        Recommendation::Plain("Take to hazardous waste center".to_string())
    );
}

#[test]
fn refusal_sentence_falls_back_without_losing_text() {
    let response = "Sorry, I cannot process this image.";

    let result = normalize_response(response);
    assert!(result.categories.is_empty());
    assert_eq!(result.recyclable, Recyclability::Unknown);
    assert_eq!(
        result.recommendation,
        Recommendation::Plain(response.to_string())
    );
}

#[test]
fn structured_recommendation_variant_is_preserved() {
    let response = r#"{
        "categories": [
            {"name": "smartphone", "confidence": 0.98},
            {"name": "lithium-ion battery", "confidence": 0.87}
        ],
        "recyclable": true,
        "recommendation": {
            "generalAdvice": "Remove the battery before recycling",
            "disposalMethods": ["Retailer take-back", "Municipal e-waste day"],
            "recyclingCenters": ["Certified WEEE facility"],
            "environmentalImpact": "Prevents lithium fires in landfill compactors"
        }
    }"#;

    let result = normalize_response(response);
    assert_eq!(result.categories.len(), 2);
    assert_eq!(result.recyclable, Recyclability::Recyclable);

    let Recommendation::Structured(detail) = result.recommendation else {
        panic!("expected structured recommendation");
    };
    assert_eq!(
        detail.disposal_methods.as_deref(),
        Some(&["Retailer take-back".to_string(), "Municipal e-waste day".to_string()][..])
    );
}

#[test]
fn mistyped_fields_degrade_independently() {
    let response = r#"{"categories": {"name": "oops"}, "recyclable": "probably", "recommendation": null}"#;

    let result = normalize_response(response);
    assert!(result.categories.is_empty());
    assert_eq!(result.recyclable, Recyclability::Unknown);
    assert_eq!(
        result.recommendation,
        Recommendation::Plain(NO_RECOMMENDATION.to_string())
    );
}

#[test]
fn normalization_is_idempotent_over_serialized_results() {
    let responses = [
        "```json\n{\"categories\":[{\"name\":\"battery\",\"confidence\":0.9}],\"recyclable\":true,\"recommendation\":\"Take to hazardous waste center\"}\n```",
        "Sorry, I cannot process this image.",
        r#"{"categories": [], "recyclable": false, "recommendation": {"generalAdvice": "Hazardous waste only"}}"#,
        "",
    ];

    for response in responses {
        let once = normalize_response(response);
        let serialized = serde_json::to_string(&once).expect("serialize failed");
        assert_eq!(normalize_response(&serialized), once);
    }
}
