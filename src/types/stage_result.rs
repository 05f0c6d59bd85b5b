//! The settled outcome of a single stage calculation.

use crate::types::errors::StageError;

/// Success-or-failure outcome of one computation.
///
/// Exactly one variant is ever populated, and a constructed value is
/// immutable. Stages cache a `StageResult` after their first calculation and
/// hand out clones of it on every later call.
///
/// # Examples
///
/// ```
/// use record_rail::types::{StageError, StageResult};
///
/// let ok = StageResult::success("ready");
/// assert_eq!(ok.unwrap_success(), "ready");
///
/// let bad: StageResult<&str> = StageResult::failure(StageError::invalid("nope"));
/// assert!(bad.is_failure());
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub enum StageResult<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(StageError),
}

impl<T> StageResult<T> {
    /// Creates a successful result.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed result.
    #[inline]
    pub fn failure(error: StageError) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the result holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the result holds an error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_rail::types::StageResult;
    ///
    /// assert_eq!(StageResult::success(7).unwrap_success(), 7);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_success(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("stage result was a failure: {error}"),
        }
    }

    /// Returns the failure error.
    ///
    /// # Panics
    ///
    /// Panics if the result is successful.
    #[must_use]
    #[inline]
    pub fn unwrap_failure(self) -> StageError {
        match self {
            Self::Success(_) => panic!("stage result was successful"),
            Self::Failure(error) => error,
        }
    }

    /// Extracts the value, if successful.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, if failed.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<StageError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the value, if successful.
    #[must_use]
    #[inline]
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the error, if failed.
    #[must_use]
    #[inline]
    pub fn as_failure(&self) -> Option<&StageError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a plain `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_rail::types::StageResult;
    ///
    /// let result: Result<i32, _> = StageResult::success(7).to_result();
    /// assert_eq!(result.unwrap(), 7);
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<T, StageError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps a plain `Result` into a `StageResult`.
    #[inline]
    pub fn from_result(result: Result<T, StageError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Result<T, StageError>> for StageResult<T> {
    #[inline]
    fn from(result: Result<T, StageError>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<StageResult<T>> for Result<T, StageError> {
    #[inline]
    fn from(result: StageResult<T>) -> Self {
        result.to_result()
    }
}
