//! Error types for stage calculation and aggregated builds.
//!
//! Two orthogonal taxonomies live here. [`StageError`] classifies a single
//! stage failure as either validation-kind (deliberately raised to flag
//! invalid input) or unexpected (any other underlying error).
//! [`BuildError`] is what a [`Builder`](crate::mapping::Builder) raises once
//! aggregation is done: all-validation failures escalate to
//! [`BuildError::ValidationFailed`], while the presence of even one
//! unexpected failure escalates everything to
//! [`BuildError::ConversionFailed`].

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::error::Error;
use core::fmt;

use crate::types::{FieldName, ReasonVec, SharedError};

/// A deliberately raised validation failure.
///
/// Carries a human-readable message, an optional underlying cause, and an
/// optional list of nested reasons. The nested list is how a failed lazy
/// build keeps its per-field reasons when it is itself used as a stage
/// inside an outer builder.
///
/// # Examples
///
/// ```
/// use record_rail::types::InvalidValue;
///
/// let reason = InvalidValue::new("age must be positive");
/// assert_eq!(reason.message(), "age must be positive");
/// assert!(reason.reasons().is_empty());
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct InvalidValue {
    message: String,
    reasons: Vec<InvalidValue>,
    cause: Option<SharedError>,
}

impl InvalidValue {
    /// Creates a leaf validation failure with the given message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            reasons: Vec::new(),
            cause: None,
        }
    }

    /// Attaches an underlying cause.
    #[inline]
    pub fn with_cause<E: Error + 'static>(mut self, cause: E) -> Self {
        self.cause = Some(Rc::new(cause));
        self
    }

    /// Attaches nested reasons, for failures that aggregate other failures.
    #[inline]
    pub fn with_reasons<I>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = InvalidValue>,
    {
        self.reasons = reasons.into_iter().collect();
        self
    }

    /// Returns the failure message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the nested reasons, empty for a leaf failure.
    #[must_use]
    #[inline]
    pub fn reasons(&self) -> &[InvalidValue] {
        &self.reasons
    }

    /// Returns the underlying cause, if any.
    #[must_use]
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reasons.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} ({} reasons)", self.message, self.reasons.len())
        }
    }
}

impl Error for InvalidValue {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref()
    }
}

/// The failure side of a stage calculation.
///
/// `Invalid` failures are raised on purpose by field initializers and
/// checks; `Unexpected` failures are everything else. The distinction
/// drives the escalation rule in [`Builder::build`](crate::mapping::Builder::build).
///
/// # Examples
///
/// ```
/// use record_rail::types::StageError;
///
/// assert!(StageError::invalid("bad input").is_validation());
///
/// let io = StageError::unexpected(core::fmt::Error);
/// assert!(!io.is_validation());
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub enum StageError {
    /// Validation-kind failure, deliberately raised.
    Invalid(InvalidValue),
    /// Any other underlying error.
    Unexpected(SharedError),
}

impl StageError {
    /// Creates a validation-kind failure from a message.
    #[inline]
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid(InvalidValue::new(message))
    }

    /// Creates a validation-kind failure with an underlying cause.
    #[inline]
    pub fn invalid_caused_by<S, E>(message: S, cause: E) -> Self
    where
        S: Into<String>,
        E: Error + 'static,
    {
        Self::Invalid(InvalidValue::new(message).with_cause(cause))
    }

    /// Wraps an unexpected underlying error.
    #[inline]
    pub fn unexpected<E: Error + 'static>(error: E) -> Self {
        Self::Unexpected(Rc::new(error))
    }

    /// Returns `true` for validation-kind failures.
    #[must_use]
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Borrows the validation failure, if this is one.
    #[must_use]
    #[inline]
    pub fn as_invalid(&self) -> Option<&InvalidValue> {
        match self {
            Self::Invalid(invalid) => Some(invalid),
            Self::Unexpected(_) => None,
        }
    }

    /// Extracts the validation failure, if this is one.
    #[must_use]
    #[inline]
    pub fn into_invalid(self) -> Option<InvalidValue> {
        match self {
            Self::Invalid(invalid) => Some(invalid),
            Self::Unexpected(_) => None,
        }
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(invalid) => write!(f, "invalid value: {invalid}"),
            Self::Unexpected(error) => write!(f, "unexpected error: {error}"),
        }
    }
}

impl Error for StageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(invalid) => invalid.cause(),
            Self::Unexpected(error) => Some(error.as_ref()),
        }
    }
}

impl From<InvalidValue> for StageError {
    #[inline]
    fn from(invalid: InvalidValue) -> Self {
        Self::Invalid(invalid)
    }
}

/// Errors raised by [`Builder`](crate::mapping::Builder) and record factories.
///
/// `DuplicateBinding` and `FieldTypeMismatch` are configuration errors and
/// surface eagerly; `ValidationFailed` and `ConversionFailed` are the two
/// aggregation outcomes; `MissingRequiredField` comes from the factory when
/// a required field was never bound.
#[must_use]
#[derive(Debug, Clone)]
pub enum BuildError {
    /// The same field identifier was bound twice. Raised at bind time.
    DuplicateBinding {
        /// The doubly bound field.
        field: FieldName,
    },
    /// Every contributing failure was validation-kind.
    ValidationFailed {
        /// The validation failures, in binding order.
        reasons: ReasonVec<InvalidValue>,
    },
    /// At least one contributing failure was not validation-kind.
    ///
    /// The reasons list carries *all* failures, validation ones included;
    /// once escalated they lose their distinguished type.
    ConversionFailed {
        /// All failures, in binding order.
        reasons: ReasonVec<StageError>,
    },
    /// The factory requested a required field that was never bound.
    MissingRequiredField {
        /// The absent field.
        field: FieldName,
    },
    /// The factory requested a field under a different type than it was
    /// bound with.
    FieldTypeMismatch {
        /// The wrongly typed field.
        field: FieldName,
        /// The type the factory asked for.
        expected: &'static str,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBinding { field } => {
                write!(f, "field '{field}' is already bound")
            }
            Self::ValidationFailed { reasons } => {
                write!(f, "validation failed with {} reason(s)", reasons.len())
            }
            Self::ConversionFailed { reasons } => {
                write!(f, "conversion failed with {} reason(s)", reasons.len())
            }
            Self::MissingRequiredField { field } => {
                write!(f, "missing required field '{field}'")
            }
            Self::FieldTypeMismatch { field, expected } => {
                write!(f, "field '{field}' is not a {expected}")
            }
        }
    }
}

impl Error for BuildError {}

impl From<BuildError> for StageError {
    /// Escalation rule for nested lazy builds: a pure validation failure
    /// stays validation-kind and keeps its per-field reasons, everything
    /// else becomes an unexpected error.
    fn from(error: BuildError) -> Self {
        match error {
            BuildError::ValidationFailed { reasons } => {
                Self::Invalid(InvalidValue::new("validation failed").with_reasons(reasons))
            }
            other => Self::Unexpected(Rc::new(other)),
        }
    }
}
