//! Declarative assembly of a validator tree.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::FieldName;
use crate::validation::core::{ChildRule, FieldRule, Validator};
use crate::validation::field::Field;
use crate::validation::status::{InvalidStatus, ValidationOutcome, ValidationStatus};

/// Binds checks and child validators to fields before the tree is frozen.
///
/// Binding order is preserved into evaluation order. A field may carry any
/// number of checks. [`build`](Self::build) freezes the bindings into an
/// immutable [`Validator`].
///
/// # Examples
///
/// ```
/// use record_rail::field;
/// use record_rail::validation::ValidatorBuilder;
///
/// struct User {
///     name: String,
///     email: Option<String>,
/// }
///
/// let mut builder = ValidatorBuilder::new();
/// builder
///     .should(field!(User, name), |f, name: &String| {
///         if name.is_empty() {
///             f.invalid("must not be empty")
///         } else {
///             f.valid()
///         }
///     })
///     .should_be_not_null(field!(User, email));
/// let user_validator = builder.build();
///
/// let outcome = user_validator.validate(
///     &User {
///         name: String::new(),
///         email: None,
///     },
///     false,
/// );
/// assert_eq!(outcome.caused_by().len(), 2);
/// ```
#[must_use]
pub struct ValidatorBuilder<T> {
    field_rules: Vec<FieldRule<T>>,
    child_rules: Vec<ChildRule<T>>,
}

impl<T> ValidatorBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            field_rules: Vec::new(),
            child_rules: Vec::new(),
        }
    }

    /// Freezes the bindings into an immutable [`Validator`].
    pub fn build(self) -> Validator<T> {
        Validator::new(self.field_rules, self.child_rules)
    }
}

impl<T> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> ValidatorBuilder<T> {
    /// Binds a check to a field.
    ///
    /// The check receives the field handle (for provenance-carrying
    /// [`valid`](Field::valid)/[`invalid`](Field::invalid) statuses) and the
    /// field's current value.
    pub fn should<V, C>(&mut self, field: Field<T, V>, check: C) -> &mut Self
    where
        V: 'static,
        C: Fn(&Field<T, V>, &V) -> ValidationStatus + 'static,
    {
        self.field_rules
            .push(Box::new(move |record: &T| check(&field, field.get(record))));
        self
    }

    /// Requires an `Option` field to be `Some`.
    pub fn should_be_not_null<V: 'static>(&mut self, field: Field<T, Option<V>>) -> &mut Self {
        self.should(field, |field, value| match value {
            Some(_) => field.valid(),
            None => field.invalid(not_null_description(field.name())),
        })
    }

    /// Requires an `Option` field to be `None`.
    pub fn should_be_null<V: 'static>(&mut self, field: Field<T, Option<V>>) -> &mut Self {
        self.should(field, |field, value| match value {
            None => field.valid(),
            Some(_) => field.invalid(format!("'{}' should be null", field.name())),
        })
    }

    /// Requires an `Option` field to be `Some` and then applies `check` to
    /// the inner value.
    pub fn should_be_not_null_and<V, C>(&mut self, field: Field<T, Option<V>>, check: C) -> &mut Self
    where
        V: 'static,
        C: Fn(&Field<T, Option<V>>, &V) -> ValidationStatus + 'static,
    {
        self.should(field, move |field, value| match value {
            Some(inner) => check(field, inner),
            None => field.invalid(not_null_description(field.name())),
        })
    }

    /// Binds a child validator to a non-optional nested field.
    ///
    /// The child validator recurses with the caller's policy; its failures
    /// are scoped under an [`InvalidStatus::Nested`] node for this field.
    pub fn should_be_valid_with<C: 'static>(
        &mut self,
        field: Field<T, C>,
        validator: Rc<Validator<C>>,
    ) -> &mut Self {
        self.child_rules
            .push(Box::new(move |record: &T, fail_fast: bool| {
                nested_status(field.name(), validator.validate(field.get(record), fail_fast))
            }));
        self
    }

    /// Binds a child validator to an `Option` nested field.
    ///
    /// A `None` child is valid when `allow_null` and an
    /// [`InvalidStatus::Field`] failure otherwise; a `Some` child recurses
    /// like [`should_be_valid_with`](Self::should_be_valid_with).
    pub fn should_be_valid_with_optional<C: 'static>(
        &mut self,
        field: Field<T, Option<C>>,
        allow_null: bool,
        validator: Rc<Validator<C>>,
    ) -> &mut Self {
        self.child_rules
            .push(Box::new(move |record: &T, fail_fast: bool| {
                match field.get(record) {
                    None if allow_null => ValidationStatus::Valid,
                    None => ValidationStatus::Invalid(InvalidStatus::field(
                        field.name(),
                        not_null_description(field.name()),
                    )),
                    Some(child) => nested_status(field.name(), validator.validate(child, fail_fast)),
                }
            }));
        self
    }
}

fn not_null_description(field: FieldName) -> String {
    format!("'{field}' should be not null")
}

fn nested_status(field: FieldName, outcome: ValidationOutcome) -> ValidationStatus {
    if outcome.is_successful() {
        ValidationStatus::Valid
    } else {
        ValidationStatus::Invalid(InvalidStatus::nested(
            field,
            outcome.into_causes().into_vec(),
        ))
    }
}

/// Builds a check from a predicate, with a default description naming the
/// field and the offending value.
///
/// # Examples
///
/// ```
/// use record_rail::field;
/// use record_rail::validation::{matching, validator};
///
/// struct Order {
///     quantity: u32,
/// }
///
/// let order_validator = validator(|v| {
///     v.should(field!(Order, quantity), matching(|q: &u32| *q > 0));
/// });
///
/// let outcome = order_validator.validate(&Order { quantity: 0 }, false);
/// assert_eq!(
///     outcome.caused_by()[0].description(),
///     Some("validation of field 'quantity' with value '0' failed"),
/// );
/// ```
pub fn matching<T, V, P>(predicate: P) -> impl Fn(&Field<T, V>, &V) -> ValidationStatus
where
    V: Debug,
    P: Fn(&V) -> bool,
{
    move |field, value| {
        if predicate(value) {
            field.valid()
        } else {
            field.invalid(format!(
                "validation of field '{}' with value '{:?}' failed",
                field.name(),
                value
            ))
        }
    }
}

/// Builds a check from a predicate with a fixed description.
pub fn matching_msg<T, V, P>(
    description: impl Into<String>,
    predicate: P,
) -> impl Fn(&Field<T, V>, &V) -> ValidationStatus
where
    P: Fn(&V) -> bool,
{
    let description = description.into();
    move |field, value| {
        if predicate(value) {
            field.valid()
        } else {
            field.invalid(description.clone())
        }
    }
}
