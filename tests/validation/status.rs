use record_rail::validation::{InvalidStatus, ValidationOutcome, ValidationStatus};

fn sample_tree() -> ValidationOutcome {
    ValidationOutcome::failed([
        InvalidStatus::field("name", "must not be empty"),
        InvalidStatus::nested(
            "address",
            vec![
                InvalidStatus::field("street", "must not be empty"),
                InvalidStatus::nested(
                    "country",
                    vec![InvalidStatus::field("code", "unknown country code")],
                ),
            ],
        ),
    ])
}

#[test]
fn test_status_accessors() {
    let leaf = InvalidStatus::field("name", "must not be empty");
    assert_eq!(leaf.field_name(), "name");
    assert_eq!(leaf.description(), Some("must not be empty"));
    assert!(leaf.caused_by().is_empty());

    let nested = InvalidStatus::nested("address", vec![leaf.clone()]);
    assert_eq!(nested.field_name(), "address");
    assert_eq!(nested.description(), None);
    assert_eq!(nested.caused_by(), &[leaf]);
}

#[test]
fn test_status_display() {
    let leaf = InvalidStatus::field("name", "must not be empty");
    assert_eq!(leaf.to_string(), "'name': must not be empty");

    let nested = InvalidStatus::nested("address", vec![leaf]);
    assert_eq!(nested.to_string(), "'address': 1 nested failure(s)");
}

#[test]
fn test_validation_status_extraction() {
    assert!(ValidationStatus::Valid.is_valid());
    assert_eq!(ValidationStatus::Valid.into_invalid(), None);

    let status = ValidationStatus::Invalid(InvalidStatus::field("a", "b"));
    assert!(!status.is_valid());
    assert_eq!(status.into_invalid(), Some(InvalidStatus::field("a", "b")));
}

#[test]
fn test_outcome_success_and_failed() {
    assert!(ValidationOutcome::success().is_successful());
    assert!(ValidationOutcome::default().is_successful());

    let outcome = sample_tree();
    assert!(!outcome.is_successful());
    assert_eq!(outcome.caused_by().len(), 2);
    assert_eq!(outcome.clone().into_causes().len(), 2);
}

#[test]
fn test_leaf_failures_use_dotted_paths() {
    let leaves = sample_tree().leaf_failures();

    assert_eq!(
        leaves,
        vec![
            ("name".to_string(), "must not be empty".to_string()),
            ("address.street".to_string(), "must not be empty".to_string()),
            (
                "address.country.code".to_string(),
                "unknown country code".to_string(),
            ),
        ],
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_outcome_serde_round_trip() {
    let outcome = sample_tree();

    let json = serde_json::to_string(&outcome).unwrap();
    let back: ValidationOutcome = serde_json::from_str(&json).unwrap();

    assert_eq!(back, outcome);
}

#[cfg(feature = "serde")]
#[test]
fn test_nested_status_json_shape() {
    let status = InvalidStatus::nested(
        "address",
        vec![InvalidStatus::field("zip", "must be 5 digits")],
    );

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Nested": {
                "field": "address",
                "caused_by": [
                    { "Field": { "field": "zip", "description": "must be 5 digits" } }
                ],
            }
        }),
    );
}
