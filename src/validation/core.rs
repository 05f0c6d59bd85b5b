//! The frozen validator tree and its two-policy evaluation.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::types::ReasonVec;
use crate::validation::status::{ValidationOutcome, ValidationStatus};

pub(crate) type FieldRule<T> = Box<dyn Fn(&T) -> ValidationStatus>;
pub(crate) type ChildRule<T> = Box<dyn Fn(&T, bool) -> ValidationStatus>;

/// Immutable tree of field checks and child-validator bindings.
///
/// Built once by a [`ValidatorBuilder`](crate::validation::ValidatorBuilder)
/// and frozen thereafter. Evaluation runs the field phase first, then the
/// child phase, each in binding order; child validators recurse with the
/// same policy, and their failures stay scoped under an
/// [`InvalidStatus::Nested`](crate::validation::InvalidStatus) node rather
/// than being flattened into the parent's list.
///
/// A validator with zero bindings accepts every value.
///
/// # Examples
///
/// ```
/// use record_rail::field;
/// use record_rail::validation::{matching, validator};
///
/// struct Account {
///     balance: i64,
/// }
///
/// let account_validator = validator(|v| {
///     v.should(field!(Account, balance), matching(|b: &i64| *b >= 0));
/// });
///
/// let outcome = account_validator.validate(&Account { balance: -3 }, false);
/// assert!(!outcome.is_successful());
/// ```
#[must_use]
pub struct Validator<T> {
    field_rules: Vec<FieldRule<T>>,
    child_rules: Vec<ChildRule<T>>,
}

impl<T> Validator<T> {
    pub(crate) fn new(field_rules: Vec<FieldRule<T>>, child_rules: Vec<ChildRule<T>>) -> Self {
        Self {
            field_rules,
            child_rules,
        }
    }

    /// Wraps the validator in an `Rc` so it can be bound as a child under
    /// several parents.
    #[must_use]
    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    /// Validates `value` under the chosen policy.
    ///
    /// With `fail_fast = false`, every field check and every child binding
    /// runs and every failure is collected, field phase first. With
    /// `fail_fast = true`, evaluation stops at the first failing status;
    /// a field-phase failure skips the entire child phase.
    pub fn validate(&self, value: &T, fail_fast: bool) -> ValidationOutcome {
        let mut failures: ReasonVec<_> = ReasonVec::new();

        for rule in &self.field_rules {
            if let ValidationStatus::Invalid(status) = rule(value) {
                failures.push(status);
                if fail_fast {
                    return ValidationOutcome::failed(failures);
                }
            }
        }

        for rule in &self.child_rules {
            if let ValidationStatus::Invalid(status) = rule(value, fail_fast) {
                failures.push(status);
                if fail_fast {
                    return ValidationOutcome::failed(failures);
                }
            }
        }

        if failures.is_empty() {
            ValidationOutcome::success()
        } else {
            ValidationOutcome::failed(failures)
        }
    }
}
