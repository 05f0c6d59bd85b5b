//! Macros for field accessors and validation failures.
//!
//! - [`macro@crate::field`] - Builds a [`Field`](crate::validation::Field)
//!   accessor from a struct type and a field name, using `stringify!` for
//!   the stable name.
//! - [`macro@crate::invalid`] - Builds a validation-kind
//!   [`StageError`](crate::types::StageError) from a format string, for use
//!   inside stage initializers and mappings.
//!
//! # Examples
//!
//! ```
//! use record_rail::stage::Stage;
//! use record_rail::{field, invalid};
//!
//! struct Reading {
//!     celsius: f64,
//! }
//!
//! let celsius = field!(Reading, celsius);
//! assert_eq!(celsius.name(), "celsius");
//!
//! let raw = -300.0;
//! let stage: Stage<f64> = Stage::try_lazy(move || {
//!     if raw < -273.15 {
//!         Err(invalid!("{} is below absolute zero", raw))
//!     } else {
//!         Ok(raw)
//!     }
//! });
//! assert!(stage.calculate().unwrap_failure().is_validation());
//! ```

/// Builds a [`Field`](crate::validation::Field) accessor for one struct
/// field.
///
/// The field's stable name is the stringified identifier; the getter is a
/// plain borrow of the named field.
///
/// # Examples
///
/// ```
/// use record_rail::field;
///
/// struct User {
///     name: String,
/// }
///
/// let name = field!(User, name);
/// let user = User {
///     name: "ada".to_string(),
/// };
/// assert_eq!(name.get(&user), "ada");
/// ```
#[macro_export]
macro_rules! field {
    ($record:ty, $name:ident) => {
        $crate::validation::Field::<$record, _>::new(stringify!($name), |record: &$record| {
            &record.$name
        })
    };
}

/// Builds a validation-kind [`StageError`](crate::types::StageError) from a
/// format string.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use record_rail::invalid;
///
/// let error = invalid!("expected at most {} items", 8);
/// assert!(error.is_validation());
/// ```
#[macro_export]
macro_rules! invalid {
    ($($arg:tt)*) => {
        $crate::types::StageError::invalid($crate::__alloc::format!($($arg)*))
    };
}
