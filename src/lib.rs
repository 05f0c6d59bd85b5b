//! Declarative record construction and validation with two failure
//! aggregation policies: fail-fast (stop at the first failure) and
//! exhaustive (run everything, collect every failure).
//!
//! The building blocks are [`Stage`](stage::Stage), a lazily memoized
//! computation with a combinator algebra, [`Builder`](mapping::Builder),
//! which binds named fields to stages and drives aggregated evaluation, and
//! [`Validator`](validation::Validator), an immutable tree of field checks
//! and nested child validators that preserves failure provenance.
//!
//! # Examples
//!
//! ## Building a record
//!
//! ```
//! use record_rail::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person = convert(
//!     |values: &FieldValues| -> Result<Person, BuildError> {
//!         Ok(Person {
//!             name: values.required("name")?,
//!             age: values.required("age")?,
//!         })
//!     },
//!     false,
//!     |b| {
//!         b.bind("name", Stage::lazy(|| "Ada".to_string()))?;
//!         b.bind("age", Stage::just(36_u32))?;
//!         Ok(())
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(person, Person { name: "Ada".to_string(), age: 36 });
//! ```
//!
//! ## Validating a record
//!
//! ```
//! use record_rail::field;
//! use record_rail::prelude::*;
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person_validator = validator(|v| {
//!     v.should(field!(Person, name), |f, name: &String| {
//!         if name.is_empty() {
//!             f.invalid("name must not be empty")
//!         } else {
//!             f.valid()
//!         }
//!     });
//!     v.should(field!(Person, age), matching(|age: &u32| *age < 150));
//! });
//!
//! let outcome = person_validator.validate(
//!     &Person {
//!         name: "Ada".to_string(),
//!         age: 36,
//!     },
//!     false,
//! );
//! assert!(outcome.is_successful());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[doc(hidden)]
pub extern crate alloc as __alloc;

#[cfg(feature = "std")]
extern crate std;

/// Adapters between `StageResult`, `Result`, and `ValidationOutcome`
pub mod convert;
/// Macros for field accessors and validation failures
pub mod macros;
/// Field binding, aggregated evaluation, and record construction
pub mod mapping;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Lazily memoized computation stages and their combinator algebra
pub mod stage;
/// Core result and error types
pub mod types;
/// Validator tree, validation statuses, and the validator builder
pub mod validation;

pub use convert::*;
pub use mapping::{convert, lazy_convert, Builder, FieldValues, RecordFactory};
pub use stage::Stage;
pub use types::{
    BuildError, FieldName, InvalidValue, ReasonVec, SharedError, StageError, StageResult,
};
pub use validation::{
    matching, matching_msg, validator, Field, InvalidStatus, ValidationOutcome, ValidationStatus,
    Validator, ValidatorBuilder,
};
