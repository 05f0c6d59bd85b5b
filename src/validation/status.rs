//! Validation statuses and the aggregated outcome tree.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::ReasonVec;

/// A single failed check, scoped to the field it belongs to.
///
/// The two variants are the concrete forms of an invalid status:
/// `Field` is a leaf failure on one field, `Nested` scopes the failures of
/// a child object under the field that holds it. Keeping the tree shape
/// (rather than flattening) is what lets a consumer reconstruct the exact
/// path to every failing leaf.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidStatus {
    /// One field failed one check.
    Field {
        /// The failing field's name.
        field: String,
        /// Human-readable description of the failure.
        description: String,
    },
    /// A nested object held by `field` failed its own validation.
    Nested {
        /// The field holding the nested object.
        field: String,
        /// The nested object's own failures, in their declaration order.
        caused_by: Vec<InvalidStatus>,
    },
}

impl InvalidStatus {
    /// Creates a leaf field failure.
    #[inline]
    pub fn field<F, D>(field: F, description: D) -> Self
    where
        F: Into<String>,
        D: Into<String>,
    {
        Self::Field {
            field: field.into(),
            description: description.into(),
        }
    }

    /// Creates a nested-object failure.
    #[inline]
    pub fn nested<F>(field: F, caused_by: Vec<InvalidStatus>) -> Self
    where
        F: Into<String>,
    {
        Self::Nested {
            field: field.into(),
            caused_by,
        }
    }

    /// The name of the field this status is scoped to.
    #[must_use]
    pub fn field_name(&self) -> &str {
        match self {
            Self::Field { field, .. } | Self::Nested { field, .. } => field,
        }
    }

    /// The failure description, for leaf failures.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Field { description, .. } => Some(description),
            Self::Nested { .. } => None,
        }
    }

    /// The scoped child failures; empty for leaf failures.
    #[must_use]
    pub fn caused_by(&self) -> &[InvalidStatus] {
        match self {
            Self::Field { .. } => &[],
            Self::Nested { caused_by, .. } => caused_by,
        }
    }
}

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { field, description } => write!(f, "'{field}': {description}"),
            Self::Nested { field, caused_by } => {
                write!(f, "'{field}': {} nested failure(s)", caused_by.len())
            }
        }
    }
}

/// Result of a single check: valid, or invalid with provenance.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationStatus {
    /// The check passed.
    Valid,
    /// The check failed.
    Invalid(InvalidStatus),
}

impl ValidationStatus {
    /// Returns `true` if the check passed.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Extracts the failure, if any.
    #[must_use]
    #[inline]
    pub fn into_invalid(self) -> Option<InvalidStatus> {
        match self {
            Self::Valid => None,
            Self::Invalid(status) => Some(status),
        }
    }
}

/// Aggregated result of validating one value: a success flag plus the
/// failure tree.
///
/// Never raised as an error; validation failures are data. Field-phase
/// failures come first, child-phase failures after, each phase in binding
/// order. Under fail-fast the tree has exactly one entry.
///
/// # Examples
///
/// ```
/// use record_rail::validation::{InvalidStatus, ValidationOutcome};
///
/// let outcome = ValidationOutcome::failed([InvalidStatus::field("age", "too large")]);
/// assert!(!outcome.is_successful());
/// assert_eq!(outcome.caused_by().len(), 1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    caused_by: ReasonVec<InvalidStatus>,
}

impl ValidationOutcome {
    /// A successful outcome with no failures.
    #[inline]
    pub fn success() -> Self {
        Self {
            caused_by: ReasonVec::new(),
        }
    }

    /// A failed outcome from the given failure statuses.
    #[inline]
    pub fn failed<I>(caused_by: I) -> Self
    where
        I: IntoIterator<Item = InvalidStatus>,
    {
        Self {
            caused_by: caused_by.into_iter().collect(),
        }
    }

    /// Returns `true` if no check failed.
    #[must_use]
    #[inline]
    pub fn is_successful(&self) -> bool {
        self.caused_by.is_empty()
    }

    /// The top-level failure statuses, in declaration order.
    #[must_use]
    pub fn caused_by(&self) -> &[InvalidStatus] {
        &self.caused_by
    }

    /// Consumes the outcome, returning the failure statuses.
    #[must_use]
    pub fn into_causes(self) -> ReasonVec<InvalidStatus> {
        self.caused_by
    }

    /// Flattens the failure tree into `(path, description)` pairs, one per
    /// failing leaf, with nested fields joined by `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_rail::validation::{InvalidStatus, ValidationOutcome};
    ///
    /// let outcome = ValidationOutcome::failed([InvalidStatus::nested(
    ///     "address",
    ///     vec![InvalidStatus::field("zip", "must be 5 digits")],
    /// )]);
    ///
    /// let leaves = outcome.leaf_failures();
    /// assert_eq!(leaves[0].0, "address.zip");
    /// assert_eq!(leaves[0].1, "must be 5 digits");
    /// ```
    #[must_use]
    pub fn leaf_failures(&self) -> Vec<(String, String)> {
        let mut leaves = Vec::new();
        for status in &self.caused_by {
            collect_leaves(status, None, &mut leaves);
        }
        leaves
    }
}

fn collect_leaves(status: &InvalidStatus, prefix: Option<&str>, out: &mut Vec<(String, String)>) {
    let path = match prefix {
        Some(prefix) => format!("{prefix}.{}", status.field_name()),
        None => String::from(status.field_name()),
    };
    match status {
        InvalidStatus::Field { description, .. } => out.push((path, description.clone())),
        InvalidStatus::Nested { caused_by, .. } => {
            for child in caused_by {
                collect_leaves(child, Some(&path), out);
            }
        }
    }
}
