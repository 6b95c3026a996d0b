use crate::pipe::Pipe;

/// The PipeExt trait lets any value enter a pipeline from method position.
///
/// # Examples
///
/// ```rust
/// use pebble_pipe::PipeExt;
///
/// let result = 5i32.pipe(|x| x * 2);  // result is 10
/// let len = "ab".into_pipe().then(|s| s.len()).get();  // len is 2
///
/// assert_eq!(result, 10);
/// assert_eq!(len, 2);
/// ```
pub trait PipeExt: Sized {
    /// Applies `f` to the value directly, without building a [`Pipe`].
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Wraps the value in a [`Pipe`] so further stages can be chained.
    fn into_pipe(self) -> Pipe<Self> {
        Pipe::new(self)
    }
}

impl<T> PipeExt for T {}
