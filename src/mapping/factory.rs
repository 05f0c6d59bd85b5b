//! The record factory seam and the name→value mapping it consumes.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::{type_name, Any};

use crate::types::{BuildError, FieldName};

/// Type-erased field value as stored by the builder.
pub type DynValue = Rc<dyn Any>;

/// Ordered name→value mapping handed to a [`RecordFactory`] after all bound
/// stages succeeded.
///
/// Values keep the binding order and are read back with a typed downcast.
/// A field that was never bound is simply absent: [`required`](Self::required)
/// reports it, [`optional`](Self::optional) yields `None`.
pub struct FieldValues {
    entries: Vec<(FieldName, DynValue)>,
}

impl FieldValues {
    pub(crate) fn new(entries: Vec<(FieldName, DynValue)>) -> Self {
        Self { entries }
    }

    /// Returns `true` if `field` is present in the mapping.
    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.raw(field).is_some()
    }

    /// Number of mapped fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no fields are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn raw(&self, field: FieldName) -> Option<&DynValue> {
        self.entries
            .iter()
            .find(|(bound, _)| *bound == field)
            .map(|(_, value)| value)
    }

    /// Reads a required field.
    ///
    /// Fails with [`BuildError::MissingRequiredField`] when the field was
    /// never bound, and with [`BuildError::FieldTypeMismatch`] when it was
    /// bound under a different type.
    pub fn required<V: Clone + 'static>(&self, field: FieldName) -> Result<V, BuildError> {
        let value = self
            .raw(field)
            .ok_or(BuildError::MissingRequiredField { field })?;
        value
            .downcast_ref::<V>()
            .cloned()
            .ok_or(BuildError::FieldTypeMismatch {
                field,
                expected: type_name::<V>(),
            })
    }

    /// Reads an optional field, yielding `None` when it was never bound.
    ///
    /// A bound field of the wrong type is still a
    /// [`BuildError::FieldTypeMismatch`].
    pub fn optional<V: Clone + 'static>(&self, field: FieldName) -> Result<Option<V>, BuildError> {
        match self.raw(field) {
            None => Ok(None),
            Some(value) => value
                .downcast_ref::<V>()
                .cloned()
                .map(Some)
                .ok_or(BuildError::FieldTypeMismatch {
                    field,
                    expected: type_name::<V>(),
                }),
        }
    }
}

/// Constructs a record from a name→value mapping.
///
/// This is the abstract collaborator that stands in for runtime reflection:
/// a manifest is usually just a closure reading fields out of
/// [`FieldValues`] and assembling the record.
///
/// # Examples
///
/// ```
/// use record_rail::mapping::{FieldValues, RecordFactory};
/// use record_rail::types::BuildError;
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let manifest = |values: &FieldValues| -> Result<Point, BuildError> {
///     Ok(Point {
///         x: values.required("x")?,
///         y: values.required("y")?,
///     })
/// };
/// ```
pub trait RecordFactory<T> {
    /// Builds the record, failing with [`BuildError::MissingRequiredField`]
    /// when a required field has no mapped value.
    fn construct(&self, values: &FieldValues) -> Result<T, BuildError>;
}

impl<T, F> RecordFactory<T> for F
where
    F: Fn(&FieldValues) -> Result<T, BuildError>,
{
    fn construct(&self, values: &FieldValues) -> Result<T, BuildError> {
        self(values)
    }
}
