use onesheet_core::error::CoreError;
use onesheet_core::models::document::{Benefit, CallToAction, OnePagerDocument, Stat};
use onesheet_core::models::request::{GenerationRequest, InputMode, Tone};

fn complete_document() -> OnePagerDocument {
    OnePagerDocument {
        headline: "Transform Your Support Business".to_string(),
        subheadline: "Automate customer support without losing the human touch".to_string(),
        problem: "Support teams drown in repetitive tickets.".to_string(),
        solution: "AI triage routes and resolves the routine work.".to_string(),
        benefits: vec![
            Benefit {
                title: "Save Time".to_string(),
                description: "Automate 80% of manual tasks".to_string(),
            },
            Benefit {
                title: "Reduce Costs".to_string(),
                description: "Cut operational expenses by 50%".to_string(),
            },
            Benefit {
                title: "Scale Faster".to_string(),
                description: "Grow without adding headcount".to_string(),
            },
            Benefit {
                title: "Better Insights".to_string(),
                description: "Real-time analytics and reporting".to_string(),
            },
        ],
        features: vec![
            "Automated workflow management".to_string(),
            "Real-time collaboration tools".to_string(),
            "Advanced analytics dashboard".to_string(),
            "Seamless integrations".to_string(),
            "Enterprise-grade security".to_string(),
            "24/7 customer support".to_string(),
        ],
        cta: CallToAction {
            primary: "Start Free Trial".to_string(),
            secondary: "Schedule Demo".to_string(),
            text: "Join 10,000+ companies already on board".to_string(),
        },
        stats: vec![
            Stat {
                value: "10,000+".to_string(),
                label: "Active Users".to_string(),
            },
            Stat {
                value: "98%".to_string(),
                label: "Satisfaction Rate".to_string(),
            },
            Stat {
                value: "50%".to_string(),
                label: "Cost Reduction".to_string(),
            },
        ],
    }
}

#[test]
fn complete_document_validates() {
    assert!(complete_document().validate().is_ok());
}

#[test]
fn empty_scalar_field_is_rejected() {
    let mut doc = complete_document();
    doc.headline = "   ".to_string();
    match doc.validate() {
        Err(CoreError::EmptyField(field)) => assert_eq!(field, "headline"),
        other => panic!("expected EmptyField, got {other:?}"),
    }
}

#[test]
fn wrong_benefit_count_is_rejected() {
    let mut doc = complete_document();
    doc.benefits.pop();
    match doc.validate() {
        Err(CoreError::Cardinality {
            name,
            expected,
            actual,
        }) => {
            assert_eq!(name, "benefits");
            assert_eq!(expected, 4);
            assert_eq!(actual, 3);
        }
        other => panic!("expected Cardinality, got {other:?}"),
    }
}

#[test]
fn extra_feature_is_rejected_not_truncated() {
    let mut doc = complete_document();
    doc.features.push("One feature too many".to_string());
    assert!(doc.validate().is_err());
    // The caller must not have mutated the document to make it fit.
    assert_eq!(doc.features.len(), 7);
}

#[test]
fn empty_nested_field_names_its_path() {
    let mut doc = complete_document();
    doc.stats[1].label = String::new();
    match doc.validate() {
        Err(CoreError::EmptyField(field)) => assert_eq!(field, "stats[1].label"),
        other => panic!("expected EmptyField, got {other:?}"),
    }
}

#[test]
fn whitespace_only_input_fails_request_validation() {
    let request = GenerationRequest::new("  \n\t ", InputMode::Prompt, Tone::Marketing);
    assert!(matches!(request.validate(), Err(CoreError::EmptyInput)));
}

#[test]
fn non_empty_input_passes_request_validation() {
    let request = GenerationRequest::new(
        "A SaaS platform for e-commerce support automation",
        InputMode::Paste,
        Tone::Investor,
    );
    assert!(request.validate().is_ok());
}

#[test]
fn document_round_trips_through_json() {
    let doc = complete_document();
    let json = serde_json::to_string(&doc).unwrap();
    let back: OnePagerDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(doc, back);
}
