//! Decoding of upstream signal documents.

use distrofit_core::{ExperienceLevel, Sentiment, Signals};
use rstest::rstest;

#[rstest]
fn decodes_full_document() {
    let json = r#"{
        "topics": ["infrastructure"],
        "sentiment": "positive",
        "experience_level": "senior",
        "keywords": ["kubernetes", "devops", "kubernetes"],
        "tech_stack": ["go", "terraform"]
    }"#;
    let signals: Signals = serde_json::from_str(json).expect("valid signals");
    assert_eq!(signals.experience_level, ExperienceLevel::Senior);
    assert_eq!(signals.sentiment, Sentiment::Positive);
    assert_eq!(signals.keywords.len(), 2);
    assert!(signals.tech_stack.contains("terraform"));
}

#[rstest]
#[case("{}")]
#[case(r#"{"keywords": []}"#)]
#[case(r#"{"topics": [], "tech_stack": []}"#)]
fn missing_fields_mean_no_evidence(#[case] json: &str) {
    let signals: Signals = serde_json::from_str(json).expect("partial signals are valid");
    assert_eq!(signals, Signals::new());
}

#[rstest]
fn rejects_unknown_experience_level() {
    let result = serde_json::from_str::<Signals>(r#"{"experience_level": "wizard"}"#);
    assert!(result.is_err());
}
