use record_rail::convert::{outcome_to_result, result_to_stage_result, stage_result_to_result};
use record_rail::types::{StageError, StageResult};
use record_rail::validation::{InvalidStatus, ValidationOutcome};

#[test]
fn test_stage_result_to_result() {
    assert_eq!(stage_result_to_result(StageResult::success(5)).unwrap(), 5);

    let failure: StageResult<i32> = StageResult::failure(StageError::invalid("bad"));
    assert!(stage_result_to_result(failure).is_err());
}

#[test]
fn test_result_to_stage_result() {
    assert!(result_to_stage_result(Ok(5)).is_success());
    assert!(result_to_stage_result::<i32>(Err(StageError::invalid("bad"))).is_failure());
}

#[test]
fn test_outcome_to_result() {
    assert!(outcome_to_result(ValidationOutcome::success()).is_ok());

    let failed = ValidationOutcome::failed([
        InvalidStatus::field("a", "first"),
        InvalidStatus::field("b", "second"),
    ]);
    let causes = outcome_to_result(failed).unwrap_err();
    assert_eq!(causes.len(), 2);
    assert_eq!(causes[0].field_name(), "a");
}
