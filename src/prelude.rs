//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use record_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`field!`](crate::field), [`invalid!`](crate::invalid)
//! - **Building**: [`convert`], [`lazy_convert`], [`Builder`],
//!   [`FieldValues`], [`RecordFactory`], [`Stage`]
//! - **Validation**: [`validator`], [`Validator`], [`ValidatorBuilder`],
//!   [`Field`], [`matching`], [`matching_msg`]
//! - **Outcomes and errors**: [`StageResult`], [`StageError`],
//!   [`InvalidValue`], [`BuildError`], [`ValidationStatus`],
//!   [`InvalidStatus`], [`ValidationOutcome`]

// Macros
pub use crate::{field, invalid};

// Building
pub use crate::mapping::{convert, lazy_convert, Builder, FieldValues, RecordFactory};
pub use crate::stage::Stage;

// Validation
pub use crate::validation::{
    matching, matching_msg, validator, Field, InvalidStatus, ValidationOutcome, ValidationStatus,
    Validator, ValidatorBuilder,
};

// Outcomes and errors
pub use crate::types::{BuildError, InvalidValue, StageError, StageResult};
