use std::any::Any;
use std::panic::{self, UnwindSafe};

use derive_more::{Display, Error};

/// A panic caught by [`attempt`], holding the panic message if it had one.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("{message}")]
pub struct PanicError {
    #[error(not(source))]
    pub message: String,
}

impl PanicError {
    fn from_payload(payload: Box<dyn Any + Send>) -> PanicError {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_owned(),
                Err(_) => "panicked with a non-string payload".to_owned(),
            },
        };

        PanicError { message }
    }
}

/// Runs `func`, turning a panic into a [`PanicError`] rather than unwinding any further.
///
/// The panic hook still runs, so the panic is reported as usual. Panics in a crate compiled with
/// `panic = "abort"` can't be caught.
///
/// # Examples
/// ```
/// # use utility_lib::functional::attempt;
/// let checked = |n: u32| attempt(move || if n > 1 { panic!("n > 1") } else { n });
/// assert_eq!(checked(1), Ok(1));
/// assert_eq!(checked(2).unwrap_err().message, "n > 1");
/// ```
pub fn attempt<T, F: FnOnce() -> T + UnwindSafe>(func: F) -> Result<T, PanicError> {
    panic::catch_unwind(func).map_err(PanicError::from_payload)
}
