//! The field-binding builder and its two-policy aggregated evaluation.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use smallvec::smallvec;

use crate::mapping::factory::{DynValue, FieldValues, RecordFactory};
use crate::stage::Stage;
use crate::types::{BuildError, FieldName, InvalidValue, ReasonVec, StageError, StageResult};

/// Collects field→stage bindings and drives aggregated evaluation plus
/// record construction.
///
/// Binding order is significant and preserved: stages are evaluated in the
/// order they were bound, failures are reported in that order, and under
/// fail-fast the stages after the first failure are never evaluated.
/// Binding the same field twice is rejected immediately with
/// [`BuildError::DuplicateBinding`].
///
/// # Examples
///
/// ```
/// use record_rail::mapping::{Builder, FieldValues};
/// use record_rail::stage::Stage;
/// use record_rail::types::BuildError;
///
/// let mut builder = Builder::new(|values: &FieldValues| -> Result<u64, BuildError> {
///     values.required("answer")
/// });
/// builder.bind("answer", Stage::just(42_u64)).unwrap();
/// assert_eq!(builder.build(false).unwrap(), 42);
/// ```
#[must_use]
pub struct Builder<T> {
    factory: Box<dyn RecordFactory<T>>,
    bindings: Vec<(FieldName, Stage<DynValue>)>,
}

impl<T> core::fmt::Debug for Builder<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Builder")
            .field(
                "bindings",
                &self
                    .bindings
                    .iter()
                    .map(|(field, _)| *field)
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl<T> Builder<T> {
    /// Creates a builder around the factory that will construct the record.
    pub fn new<F>(factory: F) -> Self
    where
        F: RecordFactory<T> + 'static,
    {
        Self {
            factory: Box::new(factory),
            bindings: Vec::new(),
        }
    }

    /// Binds `field` to `stage`.
    ///
    /// The stage's value type is erased here; the factory recovers it with
    /// a typed read from [`FieldValues`]. Fails with
    /// [`BuildError::DuplicateBinding`] if `field` is already bound.
    pub fn bind<V>(&mut self, field: FieldName, stage: Stage<V>) -> Result<&mut Self, BuildError>
    where
        V: Clone + 'static,
    {
        if self.is_bound(field) {
            return Err(BuildError::DuplicateBinding { field });
        }
        let erased = stage.map_right(|value| Ok(Rc::new(value) as DynValue));
        self.bindings.push((field, erased));
        Ok(self)
    }

    /// Returns `true` if `field` already has a binding.
    #[must_use]
    pub fn is_bound(&self, field: FieldName) -> bool {
        self.bindings.iter().any(|(bound, _)| *bound == field)
    }

    /// Number of bound fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Evaluates all bound stages under the chosen policy and, when every
    /// one succeeded, feeds the values to the factory.
    ///
    /// With `fail_fast = true` stages are evaluated in binding order and the
    /// first failure stops the build: a validation-kind failure raises
    /// [`BuildError::ValidationFailed`] with that single reason, anything
    /// else raises [`BuildError::ConversionFailed`]. Stages after the
    /// failing one are never evaluated.
    ///
    /// With `fail_fast = false` every stage is evaluated. If all failures
    /// are validation-kind the build raises `ValidationFailed` with the
    /// ordered reasons; if any failure is not, the build raises
    /// `ConversionFailed` carrying all failures, validation ones included.
    pub fn build(self, fail_fast: bool) -> Result<T, BuildError> {
        let mut calculated: Vec<(FieldName, StageResult<DynValue>)> =
            Vec::with_capacity(self.bindings.len());

        for (field, stage) in &self.bindings {
            match stage.calculate() {
                StageResult::Failure(error) if fail_fast => return Err(escalate_single(error)),
                result => calculated.push((*field, result)),
            }
        }

        if calculated.iter().any(|(_, result)| result.is_failure()) {
            let failures: ReasonVec<StageError> = calculated
                .into_iter()
                .filter_map(|(_, result)| result.into_failure())
                .collect();

            if failures.iter().any(|error| !error.is_validation()) {
                return Err(BuildError::ConversionFailed { reasons: failures });
            }

            let reasons: ReasonVec<InvalidValue> = failures
                .into_iter()
                .filter_map(StageError::into_invalid)
                .collect();
            return Err(BuildError::ValidationFailed { reasons });
        }

        let values: Vec<(FieldName, DynValue)> = calculated
            .into_iter()
            .filter_map(|(field, result)| result.into_success().map(|value| (field, value)))
            .collect();

        self.factory.construct(&FieldValues::new(values))
    }
}

fn escalate_single(error: StageError) -> BuildError {
    match error {
        StageError::Invalid(reason) => BuildError::ValidationFailed {
            reasons: smallvec![reason],
        },
        other => BuildError::ConversionFailed {
            reasons: smallvec![other],
        },
    }
}
