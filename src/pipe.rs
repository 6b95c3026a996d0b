use crate::absent::Absent;
use serde::{Deserialize, Serialize};
use std::any::type_name;
use tracing::trace;

/// An immutable value threaded through a chain of transformations.
///
/// Each stage consumes nothing shared and produces a new `Pipe` around the result.
/// Terminate the chain with [`Pipe::get`] (or [`Pipe::into_inner`]) to take the value out.
///
/// # Examples
///
/// ```rust
/// use pebble_pipe::pipe;
///
/// let v1 = pipe(1)
///     .then(|x| x + 1)
///     .then(|x| x * 2)
///     .get();
///
/// assert_eq!(v1, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pipe<T> {
    value: T,
}

/// Starts a pipeline holding `value`.
pub fn pipe<T>(value: T) -> Pipe<T> {
    Pipe::new(value)
}

/// Starts a pipeline with no value.
///
/// The first stage receives [`Absent`] and its result becomes the first real value.
///
/// ```rust
/// use pebble_pipe::empty;
///
/// let v1 = empty()
///     .then(|_| 5 + 1)
///     .then(|x| x * 2)
///     .get();
///
/// assert_eq!(v1, 12);
/// ```
pub fn empty() -> Pipe<Absent> {
    Pipe::empty()
}

impl Pipe<Absent> {
    pub fn empty() -> Self {
        Pipe { value: Absent }
    }
}

impl<T> Pipe<T> {
    pub fn new(value: T) -> Self {
        Pipe { value }
    }

    /// Applies `f` to the held value and wraps the result in the next pipe.
    ///
    /// `f` runs exactly once. A panic inside `f` unwinds straight through to the caller.
    pub fn then<S, F>(self, f: F) -> Pipe<S>
    where
        F: FnOnce(T) -> S,
    {
        trace!(from = type_name::<T>(), to = type_name::<S>(), "pipe stage");
        Pipe::new(f(self.value))
    }

    /// Like [`Pipe::then`], but borrows the held value so `self` stays usable.
    ///
    /// Calling it twice on the same pipe gives two independent chains.
    pub fn then_ref<S, F>(&self, f: F) -> Pipe<S>
    where
        F: FnOnce(&T) -> S,
    {
        trace!(from = type_name::<T>(), to = type_name::<S>(), "pipe stage (by ref)");
        Pipe::new(f(&self.value))
    }

    /// Applies a fallible stage.
    ///
    /// On `Err` the error is returned unchanged, so chaining with `?` skips every later stage.
    ///
    /// ```rust
    /// use pebble_pipe::pipe;
    ///
    /// fn parse(s: &str) -> Result<i32, std::num::ParseIntError> {
    ///     let n = pipe(s)
    ///         .try_then(str::parse::<i32>)?
    ///         .then(|n| n * 10)
    ///         .get();
    ///     Ok(n)
    /// }
    ///
    /// assert_eq!(parse("4"), Ok(40));
    /// assert!(parse("four").is_err());
    /// ```
    pub fn try_then<S, E, F>(self, f: F) -> Result<Pipe<S>, E>
    where
        F: FnOnce(T) -> Result<S, E>,
    {
        trace!(from = type_name::<T>(), to = type_name::<S>(), "pipe stage (fallible)");
        f(self.value).map(Pipe::new)
    }

    /// Calls `f` with a reference to the held value and passes the pipe on unchanged.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        f(&self.value);
        self
    }

    /// Returns a copy of the held value. Repeated calls give the same value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for Pipe<T> {
    fn from(value: T) -> Self {
        Pipe::new(value)
    }
}

impl<T> AsRef<T> for Pipe<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
