//! Lazily memoized computation stages.
//!
//! A [`Stage`] owns a one-shot initializer and a cache holding at most one
//! [`StageResult`]. Nothing runs until the first [`Stage::calculate`] call;
//! after that the settled result is fixed for the stage's lifetime.
//! Combinators never evaluate anything — they return new unevaluated stages
//! whose initializers reference the *same* upstream nodes, so a stage shared
//! by several downstream combinators still runs exactly once.
//!
//! Stages are `Rc`-shared and therefore `!Send`: sharing an unevaluated
//! stage across threads is rejected by the compiler, which is the intended
//! evaluation model (single-threaded, synchronous, no suspension points).
//!
//! # Examples
//!
//! ```
//! use record_rail::stage::Stage;
//!
//! let base = Stage::lazy(|| 20);
//! let doubled = base.map_right(|v| Ok(v * 2));
//! let summed = base.combine(&doubled, |a, b| Ok(a + b));
//!
//! // `base` is evaluated once even though two stages depend on it.
//! assert_eq!(summed.calculate().unwrap_success(), 60);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::error::Error;
use core::fmt;

use crate::types::{StageError, StageResult};

type Init<T> = Box<dyn FnOnce() -> Result<T, StageError>>;

/// The initializer re-entered its own stage during calculation.
#[derive(Debug)]
struct RecursiveCalculation;

impl fmt::Display for RecursiveCalculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stage initializer recursively calculated its own stage")
    }
}

impl Error for RecursiveCalculation {}

struct Inner<T> {
    init: RefCell<Option<Init<T>>>,
    cache: RefCell<Option<StageResult<T>>>,
}

/// Lazily memoized computation yielding exactly one [`StageResult`] over its
/// lifetime.
///
/// Cloning a `Stage` clones the handle, not the computation: all clones
/// share one initializer and one cache cell.
#[must_use]
pub struct Stage<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Stage<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Stage<T> {
    /// Creates a pre-settled stage that just supplies `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_rail::stage::Stage;
    ///
    /// let stage = Stage::just("constant");
    /// assert!(stage.is_settled());
    /// ```
    pub fn just(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                init: RefCell::new(None),
                cache: RefCell::new(Some(StageResult::Success(value))),
            }),
        }
    }

    /// Creates a stage from an infallible initializer.
    ///
    /// The initializer runs at most once, on first [`calculate`](Self::calculate).
    pub fn lazy<F>(initializer: F) -> Self
    where
        F: FnOnce() -> T + 'static,
        T: 'static,
    {
        Self::try_lazy(move || Ok(initializer()))
    }

    /// Creates a stage from a fallible initializer.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_rail::stage::Stage;
    /// use record_rail::types::StageError;
    ///
    /// let stage: Stage<u32> = Stage::try_lazy(|| Err(StageError::invalid("no value")));
    /// assert!(stage.calculate().is_failure());
    /// ```
    pub fn try_lazy<F>(initializer: F) -> Self
    where
        F: FnOnce() -> Result<T, StageError> + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                init: RefCell::new(Some(Box::new(initializer))),
                cache: RefCell::new(None),
            }),
        }
    }

    /// Returns `true` once the stage has been calculated and its result is
    /// fixed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.inner.cache.borrow().is_some()
    }
}

impl<T: Clone> Stage<T> {
    /// Calculates the stage, running the initializer on the first call and
    /// returning the cached result on every later one.
    ///
    /// An initializer error settles the stage as a `Failure`; errors never
    /// escape `calculate` itself.
    pub fn calculate(&self) -> StageResult<T> {
        {
            let cache = self.inner.cache.borrow();
            if let Some(settled) = cache.as_ref() {
                return settled.clone();
            }
        }

        let initializer = self.inner.init.borrow_mut().take();
        let result = match initializer {
            Some(run) => StageResult::from_result(run()),
            // Cache empty but initializer already taken: the initializer
            // called back into its own stage. Settle as a failure.
            None => StageResult::Failure(StageError::unexpected(RecursiveCalculation)),
        };

        *self.inner.cache.borrow_mut() = Some(result.clone());
        result
    }
}

impl<T: Clone + 'static> Stage<T> {
    /// Returns a new stage that applies `mapping` to this stage's whole
    /// result, success or failure.
    ///
    /// The returned stage succeeds unless `mapping` itself fails.
    pub fn map<N, F>(&self, mapping: F) -> Stage<N>
    where
        F: FnOnce(StageResult<T>) -> Result<N, StageError> + 'static,
    {
        let upstream = self.clone();
        Stage::try_lazy(move || mapping(upstream.calculate()))
    }

    /// Returns a new stage that applies `mapping` to the success value and
    /// propagates an upstream failure unchanged, without invoking `mapping`.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_rail::stage::Stage;
    ///
    /// let stage = Stage::just(3).map_right(|v| Ok(v + 1));
    /// assert_eq!(stage.calculate().unwrap_success(), 4);
    /// ```
    pub fn map_right<N, F>(&self, mapping: F) -> Stage<N>
    where
        F: FnOnce(T) -> Result<N, StageError> + 'static,
    {
        let upstream = self.clone();
        Stage::try_lazy(move || match upstream.calculate() {
            StageResult::Success(value) => mapping(value),
            StageResult::Failure(error) => Err(error),
        })
    }

    /// Returns a new stage that passes a success through untouched and
    /// applies `mapping` to a failure to produce a replacement value.
    ///
    /// `mapping` may itself fail, producing a new failure.
    pub fn map_left<F>(&self, mapping: F) -> Stage<T>
    where
        F: FnOnce(StageError) -> Result<T, StageError> + 'static,
    {
        let upstream = self.clone();
        Stage::try_lazy(move || match upstream.calculate() {
            StageResult::Success(value) => Ok(value),
            StageResult::Failure(error) => mapping(error),
        })
    }

    /// Alias for [`map_left`](Self::map_left).
    ///
    /// # Examples
    ///
    /// ```
    /// use record_rail::stage::Stage;
    /// use record_rail::types::StageError;
    ///
    /// let stage: Stage<i32> = Stage::try_lazy(|| Err(StageError::invalid("bad")));
    /// let recovered = stage.recover(|_| Ok(0));
    /// assert_eq!(recovered.calculate().unwrap_success(), 0);
    /// ```
    pub fn recover<F>(&self, mapping: F) -> Stage<T>
    where
        F: FnOnce(StageError) -> Result<T, StageError> + 'static,
    {
        self.map_left(mapping)
    }

    /// Combines two stages, evaluating them left to right and
    /// short-circuiting at the first failing operand.
    ///
    /// `combining` runs only when both operands succeed, and may itself
    /// fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_rail::stage::Stage;
    ///
    /// let a = Stage::just(2);
    /// let b = Stage::just(5);
    /// let product = a.combine(&b, |a, b| Ok(a * b));
    /// assert_eq!(product.calculate().unwrap_success(), 10);
    /// ```
    pub fn combine<S, N, F>(&self, second: &Stage<S>, combining: F) -> Stage<N>
    where
        S: Clone + 'static,
        F: FnOnce(T, S) -> Result<N, StageError> + 'static,
    {
        let first = self.clone();
        let second = second.clone();
        Stage::try_lazy(move || {
            let a = first.calculate().to_result()?;
            let b = second.calculate().to_result()?;
            combining(a, b)
        })
    }

    /// Three-way [`combine`](Self::combine), same ordering and
    /// short-circuiting rules.
    pub fn combine3<S, U, N, F>(
        &self,
        second: &Stage<S>,
        third: &Stage<U>,
        combining: F,
    ) -> Stage<N>
    where
        S: Clone + 'static,
        U: Clone + 'static,
        F: FnOnce(T, S, U) -> Result<N, StageError> + 'static,
    {
        let first = self.clone();
        let second = second.clone();
        let third = third.clone();
        Stage::try_lazy(move || {
            let a = first.calculate().to_result()?;
            let b = second.calculate().to_result()?;
            let c = third.calculate().to_result()?;
            combining(a, b, c)
        })
    }

    /// Four-way [`combine`](Self::combine), same ordering and
    /// short-circuiting rules.
    pub fn combine4<S, U, V, N, F>(
        &self,
        second: &Stage<S>,
        third: &Stage<U>,
        fourth: &Stage<V>,
        combining: F,
    ) -> Stage<N>
    where
        S: Clone + 'static,
        U: Clone + 'static,
        V: Clone + 'static,
        F: FnOnce(T, S, U, V) -> Result<N, StageError> + 'static,
    {
        let first = self.clone();
        let second = second.clone();
        let third = third.clone();
        let fourth = fourth.clone();
        Stage::try_lazy(move || {
            let a = first.calculate().to_result()?;
            let b = second.calculate().to_result()?;
            let c = third.calculate().to_result()?;
            let d = fourth.calculate().to_result()?;
            combining(a, b, c, d)
        })
    }
}
