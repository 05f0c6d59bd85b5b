//! Validator tree, validation statuses, and the validator builder.
//!
//! A [`Validator`] is an immutable tree of per-field checks and nested
//! child validators. Validating a value runs the field phase, then the
//! child phase, under the fail-fast or exhaustive policy, and returns a
//! [`ValidationOutcome`] whose failure tree preserves provenance: a nested
//! object's failures stay scoped under their own
//! [`InvalidStatus::Nested`] node.
//!
//! # Examples
//!
//! ```
//! use record_rail::field;
//! use record_rail::validation::validator;
//!
//! struct Address {
//!     zip: String,
//! }
//!
//! struct Customer {
//!     name: String,
//!     address: Address,
//! }
//!
//! let address_validator = validator(|v| {
//!     v.should(field!(Address, zip), |f, zip: &String| {
//!         if zip.len() == 5 {
//!             f.valid()
//!         } else {
//!             f.invalid("zip must be 5 characters")
//!         }
//!     });
//! })
//! .shared();
//!
//! let customer_validator = validator(|v| {
//!     v.should(field!(Customer, name), |f, name: &String| {
//!         if name.is_empty() {
//!             f.invalid("name must not be empty")
//!         } else {
//!             f.valid()
//!         }
//!     });
//!     v.should_be_valid_with(field!(Customer, address), address_validator);
//! });
//!
//! let bad = Customer {
//!     name: String::new(),
//!     address: Address {
//!         zip: "123".to_string(),
//!     },
//! };
//!
//! let outcome = customer_validator.validate(&bad, false);
//! assert_eq!(outcome.caused_by().len(), 2);
//! assert_eq!(outcome.leaf_failures()[1].0, "address.zip");
//! ```

pub mod builder;
pub mod core;
pub mod field;
pub mod status;

pub use self::builder::{matching, matching_msg, ValidatorBuilder};
pub use self::core::Validator;
pub use self::field::Field;
pub use self::status::{InvalidStatus, ValidationOutcome, ValidationStatus};

/// Runs `binding` against a fresh [`ValidatorBuilder`] and freezes the
/// result.
pub fn validator<T, B>(binding: B) -> Validator<T>
where
    B: FnOnce(&mut ValidatorBuilder<T>),
{
    let mut builder = ValidatorBuilder::new();
    binding(&mut builder);
    builder.build()
}
