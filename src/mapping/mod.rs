//! Field binding, aggregated evaluation, and record construction.
//!
//! A build binds field names to [stages](crate::stage::Stage), evaluates
//! them under a fail-fast or exhaustive policy, and feeds the surviving
//! values to a [`RecordFactory`]. The entry points are free functions with
//! no process-wide state: [`convert`] runs a build eagerly, [`lazy_convert`]
//! wraps the whole build in an unevaluated stage.
//!
//! # Examples
//!
//! ```
//! use record_rail::mapping::{convert, FieldValues};
//! use record_rail::stage::Stage;
//! use record_rail::types::BuildError;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Credentials {
//!     user: String,
//!     token: Option<String>,
//! }
//!
//! let credentials = convert(
//!     |values: &FieldValues| -> Result<Credentials, BuildError> {
//!         Ok(Credentials {
//!             user: values.required("user")?,
//!             token: values.optional("token")?,
//!         })
//!     },
//!     false,
//!     |b| {
//!         b.bind("user", Stage::lazy(|| "ada".to_string()))?;
//!         Ok(())
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(credentials.user, "ada");
//! assert_eq!(credentials.token, None);
//! ```

pub mod builder;
pub mod factory;

pub use builder::Builder;
pub use factory::{DynValue, FieldValues, RecordFactory};

use crate::stage::Stage;
use crate::types::{BuildError, StageError};

/// Runs `binding` against a fresh [`Builder`], then builds under the chosen
/// policy.
///
/// Returns the constructed record, or the [`BuildError`] the build or the
/// binding block raised.
pub fn convert<T, F, B>(factory: F, fail_fast: bool, binding: B) -> Result<T, BuildError>
where
    F: RecordFactory<T> + 'static,
    B: FnOnce(&mut Builder<T>) -> Result<(), BuildError>,
{
    let mut builder = Builder::new(factory);
    binding(&mut builder)?;
    builder.build(fail_fast)
}

/// Like [`convert`], but wraps the whole build in an unevaluated
/// [`Stage`]: nothing runs until the stage is first calculated.
///
/// A failed build converts into a [`StageError`] with the escalation rule
/// of [`From<BuildError>`](crate::types::StageError): a pure validation
/// failure stays validation-kind, so lazy builds nest inside outer builders
/// without losing their classification.
///
/// # Examples
///
/// ```
/// use record_rail::mapping::{lazy_convert, FieldValues};
/// use record_rail::stage::Stage;
/// use record_rail::types::BuildError;
///
/// let staged = lazy_convert(
///     |values: &FieldValues| -> Result<u32, BuildError> { values.required("n") },
///     false,
///     |b| {
///         b.bind("n", Stage::just(7_u32))?;
///         Ok(())
///     },
/// );
///
/// assert!(!staged.is_settled());
/// assert_eq!(staged.calculate().unwrap_success(), 7);
/// ```
pub fn lazy_convert<T, F, B>(factory: F, fail_fast: bool, binding: B) -> Stage<T>
where
    T: Clone + 'static,
    F: RecordFactory<T> + 'static,
    B: FnOnce(&mut Builder<T>) -> Result<(), BuildError> + 'static,
{
    Stage::try_lazy(move || convert(factory, fail_fast, binding).map_err(StageError::from))
}
