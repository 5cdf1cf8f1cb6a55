//! Error handling traits shared across the primitive crates

use super::types::{Error, Result};

/// Adapter methods for hoisting foreign error types into [`Error`]
pub trait ResultExt<T, E>: Sized {
    /// Convert the error into [`Error`] and stamp it with `context`
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;

    /// Convert the error into [`Error`] and attach a human-readable message
    #[cfg(feature = "std")]
    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>;

    /// Replace the error with one built by `f`
    fn wrap_err<F, E2>(self, f: F) -> core::result::Result<T, E2>
    where
        F: FnOnce() -> E2;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(Into::into)
            .map_err(|err: Error| err.with_context(context))
    }

    #[cfg(feature = "std")]
    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(Into::into)
            .map_err(|err: Error| err.with_message(message))
    }

    fn wrap_err<F, E2>(self, f: F) -> core::result::Result<T, E2>
    where
        F: FnOnce() -> E2,
    {
        self.map_err(|_| f())
    }
}
