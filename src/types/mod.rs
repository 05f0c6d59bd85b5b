//! Core value and error types.
//!
//! [`StageResult`] is the two-variant outcome of a single stage calculation.
//! [`StageError`] separates deliberately raised validation failures from
//! unexpected underlying errors, and [`BuildError`] is the exit surface of
//! aggregated builds.
//!
//! # Examples
//!
//! ```
//! use record_rail::types::{StageError, StageResult};
//!
//! let ok = StageResult::success(42);
//! assert!(ok.is_success());
//!
//! let bad: StageResult<i32> = StageResult::failure(StageError::invalid("out of range"));
//! assert!(bad.unwrap_failure().is_validation());
//! ```
use alloc::rc::Rc;
use core::error::Error;
use smallvec::SmallVec;

pub mod errors;
pub mod stage_result;

pub use errors::*;
pub use stage_result::*;

/// Reference-counted error handle.
///
/// Stage results are cloned out of the per-stage cache on every
/// `calculate()` call, so failures are shared rather than copied. `Rc` also
/// keeps the whole stage graph `!Send`, matching the single-threaded
/// evaluation model.
pub type SharedError = Rc<dyn Error>;

/// Identifier of a record field in manifests and bindings.
pub type FieldName = &'static str;

/// SmallVec-backed list used for aggregated failure reasons.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations in
/// the common case of a handful of failures.
pub type ReasonVec<T> = SmallVec<[T; 2]>;
