//! Adapters between [`StageResult`], plain `Result`, and
//! [`ValidationOutcome`].
//!
//! These helpers flatten the crate's outcome types back into core types at
//! the edges, e.g. when a validation outcome should drive a `?`-style
//! control flow.

use crate::types::{ReasonVec, StageError, StageResult};
use crate::validation::{InvalidStatus, ValidationOutcome};

/// Converts a [`StageResult`] into a plain `Result`.
///
/// # Examples
///
/// ```
/// use record_rail::convert::stage_result_to_result;
/// use record_rail::types::StageResult;
///
/// assert_eq!(stage_result_to_result(StageResult::success(1)).unwrap(), 1);
/// ```
#[inline]
pub fn stage_result_to_result<T>(result: StageResult<T>) -> Result<T, StageError> {
    result.to_result()
}

/// Wraps a plain `Result` into a [`StageResult`].
#[inline]
pub fn result_to_stage_result<T>(result: Result<T, StageError>) -> StageResult<T> {
    StageResult::from_result(result)
}

/// Converts a [`ValidationOutcome`] into a `Result`, with the failure tree
/// on the error side.
///
/// # Examples
///
/// ```
/// use record_rail::convert::outcome_to_result;
/// use record_rail::validation::{InvalidStatus, ValidationOutcome};
///
/// assert!(outcome_to_result(ValidationOutcome::success()).is_ok());
///
/// let failed = ValidationOutcome::failed([InvalidStatus::field("id", "must be set")]);
/// assert_eq!(outcome_to_result(failed).unwrap_err().len(), 1);
/// ```
#[inline]
pub fn outcome_to_result(outcome: ValidationOutcome) -> Result<(), ReasonVec<InvalidStatus>> {
    if outcome.is_successful() {
        Ok(())
    } else {
        Err(outcome.into_causes())
    }
}
