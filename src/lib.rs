//! Pipes a value through a chain of functions in succession.
//!
//! Start a pipeline with [`pipe`] (or with [`empty`] when there is no starting value),
//! add stages with [`Pipe::then`], and end it with [`Pipe::get`] to take the result.
//!
//! ```rust
//! use pebble_pipe::pipe;
//!
//! let v1 = pipe(1)
//!     .then(|x| x + 1)
//!     .then(|x| x * 2)
//!     .get();
//!
//! assert_eq!(v1, 4);
//! ```

mod macros;

pub mod absent;
pub mod pipe;
pub mod util;

// Scenario tests live under /src/tests so they can reach private items through `crate::`.
#[cfg(test)]
mod tests;

pub use absent::Absent;
pub use pipe::{empty, pipe, Pipe};
pub use util::fp::PipeExt;

/// Glob-importable set of everything needed to build and end a pipeline.
pub mod prelude {
    pub use crate::absent::Absent;
    pub use crate::pipe;
    pub use crate::pipe::{empty, Pipe};
    pub use crate::util::fp::PipeExt;
}
