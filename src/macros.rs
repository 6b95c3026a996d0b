/// Builds a pipeline in a single expression.
///
/// - `pipe!()` starts an empty pipeline.
/// - `pipe!(value)` starts a pipeline holding `value`.
/// - `pipe!(value => f1 => f2)` applies `f1` then `f2`.
/// - `pipe!(=> f1 => f2)` applies `f1` then `f2` to an empty pipeline.
///
/// The result is always a [`Pipe`](crate::Pipe); call `.get()` to end the chain.
///
/// ```rust
/// use pebble_pipe::pipe;
///
/// assert_eq!(pipe!(1 => |x| x + 1 => |x| x * 2).get(), 4);
/// assert_eq!(pipe!(=> |_| 5 + 1 => |x| x * 2).get(), 12);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::empty()
    };

    ($(=> $stage:expr)+ $(,)?) => {
        $crate::empty()$(.then($stage))+
    };

    ($value:expr $(=> $stage:expr)* $(,)?) => {
        $crate::Pipe::new($value)$(.then($stage))*
    };
}
