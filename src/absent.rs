use serde::{Deserialize, Serialize};
use std::fmt;

/// The value held by a pipeline that was started without one.
///
/// An empty pipeline holds `Absent` until its first stage replaces it with a real value.
/// Terminating an empty pipeline before any stage ran hands `Absent` back instead of failing.
///
/// ```rust
/// use pebble_pipe::{empty, Absent};
///
/// assert_eq!(empty().get(), Absent);
///
/// let none: Option<i32> = empty().get().into_option();
/// assert_eq!(none, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Absent;

impl Absent {
    /// Converts the sentinel into `None` of whatever type the caller expects.
    pub fn into_option<T>(self) -> Option<T> {
        None
    }
}

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("absent")
    }
}
