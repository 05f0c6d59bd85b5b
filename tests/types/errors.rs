use std::error::Error;

use record_rail::types::{BuildError, InvalidValue, StageError};
use smallvec::smallvec;

#[test]
fn test_invalid_value_leaf() {
    let reason = InvalidValue::new("age must be positive");

    assert_eq!(reason.message(), "age must be positive");
    assert!(reason.reasons().is_empty());
    assert!(reason.cause().is_none());
    assert_eq!(reason.to_string(), "age must be positive");
}

#[test]
fn test_invalid_value_with_cause_and_reasons() {
    let reason = InvalidValue::new("record invalid")
        .with_cause(std::fmt::Error)
        .with_reasons([InvalidValue::new("a"), InvalidValue::new("b")]);

    assert_eq!(reason.reasons().len(), 2);
    assert!(reason.cause().is_some());
    assert_eq!(reason.to_string(), "record invalid (2 reasons)");
}

#[test]
fn test_stage_error_classification() {
    assert!(StageError::invalid("bad").is_validation());
    assert!(!StageError::unexpected(std::fmt::Error).is_validation());

    assert_eq!(
        StageError::invalid("bad").as_invalid().unwrap().message(),
        "bad"
    );
    assert!(StageError::unexpected(std::fmt::Error)
        .into_invalid()
        .is_none());
}

#[test]
fn test_stage_error_source_chain() {
    let error = StageError::invalid_caused_by("could not parse", std::fmt::Error);
    assert!(error.source().is_some());

    let plain = StageError::invalid("no cause");
    assert!(plain.source().is_none());
}

#[test]
fn test_build_error_display() {
    let duplicate = BuildError::DuplicateBinding { field: "age" };
    assert_eq!(duplicate.to_string(), "field 'age' is already bound");

    let missing = BuildError::MissingRequiredField { field: "name" };
    assert_eq!(missing.to_string(), "missing required field 'name'");

    let validation = BuildError::ValidationFailed {
        reasons: smallvec![InvalidValue::new("a"), InvalidValue::new("b")],
    };
    assert_eq!(validation.to_string(), "validation failed with 2 reason(s)");

    let conversion = BuildError::ConversionFailed {
        reasons: smallvec![StageError::invalid("a")],
    };
    assert_eq!(conversion.to_string(), "conversion failed with 1 reason(s)");
}

#[test]
fn test_validation_failed_escalates_to_validation_kind_stage_error() {
    let build_error = BuildError::ValidationFailed {
        reasons: smallvec![InvalidValue::new("first"), InvalidValue::new("second")],
    };

    let stage_error = StageError::from(build_error);
    assert!(stage_error.is_validation());

    let invalid = stage_error.into_invalid().unwrap();
    assert_eq!(invalid.reasons().len(), 2);
    assert_eq!(invalid.reasons()[0].message(), "first");
}

#[test]
fn test_other_build_errors_escalate_to_unexpected() {
    let stage_error = StageError::from(BuildError::MissingRequiredField { field: "id" });
    assert!(!stage_error.is_validation());

    let stage_error = StageError::from(BuildError::ConversionFailed {
        reasons: smallvec![StageError::invalid("still counts as conversion")],
    });
    assert!(!stage_error.is_validation());
}
