//! Error handling for the tessera primitive layer

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Specialized result types for the three primitive categories
pub type DigestResult<T> = Result<T>;
pub type ModeResult<T> = Result<T>;
pub type PaddingResult<T> = Result<T>;
