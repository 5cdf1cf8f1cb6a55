//! Error type definitions for the primitive layer

/// Primary error type surfaced to engine-level callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A buffer or parameter had the wrong length
    InvalidLength {
        /// Operation that rejected the length
        context: &'static str,
        /// Length the operation required
        expected: usize,
        /// Length it was given
        actual: usize,
    },

    /// A parameter failed validation
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Human-readable detail
        #[cfg(feature = "std")]
        message: String,
    },

    /// Operation invoked in the wrong state
    InvalidState {
        /// Operation that was mis-sequenced
        context: &'static str,
        /// Human-readable detail
        #[cfg(feature = "std")]
        message: String,
    },

    /// Anything the categories above do not cover
    Other {
        /// Originating operation
        context: &'static str,
        /// Human-readable detail
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for primitive-layer operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the stored context, dropping any message the error carried
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidState { .. } => Self::InvalidState {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Attach a human-readable message, keeping the context as is
    ///
    /// `InvalidLength` carries no message and passes through unchanged.
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            err @ Self::InvalidLength { .. } => err,
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::InvalidState { context, .. } => Self::InvalidState { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "invalid length in {}: expected {}, got {}",
                context, expected, actual
            ),
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "invalid parameter in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => write!(f, "invalid parameter in {}", context),
            #[cfg(feature = "std")]
            Self::InvalidState { context, message } => {
                write!(f, "invalid state in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidState { context } => write!(f, "invalid state in {}", context),
            #[cfg(feature = "std")]
            Self::Other { context, message } => write!(f, "error in {}: {}", context, message),
            #[cfg(not(feature = "std"))]
            Self::Other { context } => write!(f, "error in {}", context),
        }
    }
}
