use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Acts similarly to [`Result::unwrap`] but with [`unreachable!`] in the error branch, naming
    /// the error that was thought to be impossible.
    ///
    /// No panics section is given, using this indicates that the error can't occur.
    fn unreachable(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn unreachable(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => unreachable!("{}", error),
        }
    }
}
