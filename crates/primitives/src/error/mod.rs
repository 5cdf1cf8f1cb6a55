//! Error handling for the primitive implementations
//!
//! Operations return the crate-local [`Error`] so validation stays cheap
//! and allocation free on the hot path; [`to_core_result`] hoists a
//! failure into the engine-facing `tessera_api` error at the crate
//! boundary.

#[cfg(feature = "alloc")]
use alloc::borrow::Cow;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;

use core::fmt;

use tessera_api::{Error as CoreError, Result as CoreResult};

pub mod validate;

// Re-export core error handling traits for convenience
pub use tessera_api::error::ResultExt;

/// The error type for primitive operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Operation invoked before the instance reached the required state
    State {
        /// Operation that was mis-sequenced
        context: &'static str,
        /// What the operation was missing
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for [`Error::Parameter`] from borrowed or owned text
    pub fn param(
        name: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "parameter '{}' rejected: {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(f, "{}: expected {} bytes, got {}", context, expected, actual)
            }
            Error::State { context, details } => write!(f, "{}: {}", context, details),
            Error::Other(msg) => f.write_str(msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Context strings on the core error are 'static; owned parameter names
// from dynamic call sites are leaked into one.
fn static_name(name: Cow<'static, str>) -> &'static str {
    match name {
        Cow::Borrowed(s) => s,
        Cow::Owned(s) => Box::leak(s.into_boxed_str()),
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            #[cfg(feature = "std")]
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: static_name(name),
                message: reason.into_owned(),
            },
            #[cfg(not(feature = "std"))]
            Error::Parameter { name, .. } => CoreError::InvalidParameter {
                context: static_name(name),
            },

            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },

            #[cfg(feature = "std")]
            Error::State { context, details } => CoreError::InvalidState {
                context,
                message: details.to_string(),
            },
            #[cfg(not(feature = "std"))]
            Error::State { context, .. } => CoreError::InvalidState { context },

            #[cfg(feature = "std")]
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg.to_string(),
            },
            #[cfg(not(feature = "std"))]
            Error::Other(_) => CoreError::Other {
                context: "primitives",
            },
        }
    }
}

/// Hoist a primitives result into the engine-facing result, tagging
/// failures with the caller's context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}
