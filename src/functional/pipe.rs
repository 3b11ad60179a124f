/// Extends every type with [`pipe`](Pipe::pipe), passing the value through a function so calls can
/// be read left to right.
///
/// # Examples
/// ```
/// # use utility_lib::functional::Pipe;
/// let len = "hello".pipe(str::len).pipe(|n| n * 2);
/// assert_eq!(len, 10);
/// ```
pub trait Pipe: Sized {
    fn pipe<R, F: FnOnce(Self) -> R>(self, func: F) -> R {
        func(self)
    }
}

impl<T> Pipe for T {}

/// Passes a value through each of the provided functions in order, returning the final result.
///
/// # Examples
/// ```
/// # use utility_lib::pipe;
/// let result = pipe!(1, |v: i32| v.to_string(), |v: String| v + "0", |v: String| v.parse::<i32>());
/// assert_eq!(result, Ok(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $func:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($func)($value) $(, $rest)*)
    };
}

/// Composes the provided functions left to right into a single closure, which passes its argument
/// through each of them in turn.
///
/// # Examples
/// ```
/// # use utility_lib::flow;
/// let to_tens = flow!(|v: i32| v.to_string(), |v: String| v + "0", |v: String| v.parse::<i32>());
/// assert_eq!(to_tens(1), Ok(10));
/// assert_eq!(to_tens(2), Ok(20));
/// ```
#[macro_export]
macro_rules! flow {
    ($($func:expr),+ $(,)?) => {
        move |value| $crate::pipe!(value $(, $func)+)
    };
}
