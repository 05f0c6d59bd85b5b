//! Field accessors: a stable name plus a getter.

use alloc::string::String;
use core::fmt;

use crate::types::FieldName;
use crate::validation::status::{InvalidStatus, ValidationStatus};

/// Named accessor for one field of a record.
///
/// This is the hand-written stand-in for reflective property references: a
/// stable `name` plus a plain getter function. Fields are `Copy` and are
/// usually produced by the [`field!`](crate::field) macro.
///
/// The handle also mints [`ValidationStatus`] values for checks, so a
/// check's failure always carries the field it belongs to.
///
/// # Examples
///
/// ```
/// use record_rail::validation::Field;
///
/// struct Point {
///     x: i64,
/// }
///
/// let x: Field<Point, i64> = Field::new("x", |p| &p.x);
/// assert_eq!(x.name(), "x");
/// assert_eq!(*x.get(&Point { x: 3 }), 3);
/// ```
pub struct Field<T, V> {
    name: FieldName,
    get: fn(&T) -> &V,
}

impl<T, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Field<T, V> {}

impl<T, V> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

impl<T, V> Field<T, V> {
    /// Creates a field accessor from a name and a getter.
    pub const fn new(name: FieldName, get: fn(&T) -> &V) -> Self {
        Self { name, get }
    }

    /// The field's stable name.
    #[must_use]
    pub fn name(&self) -> FieldName {
        self.name
    }

    /// Reads the field's current value out of `record`.
    #[must_use]
    pub fn get<'a>(&self, record: &'a T) -> &'a V {
        (self.get)(record)
    }

    /// A passing status for this field.
    #[must_use]
    pub fn valid(&self) -> ValidationStatus {
        ValidationStatus::Valid
    }

    /// A failing status for this field with the given description.
    #[must_use]
    pub fn invalid<S: Into<String>>(&self, description: S) -> ValidationStatus {
        ValidationStatus::Invalid(InvalidStatus::field(self.name, description))
    }
}
