//! Engine-facing API types for the tessera library
//!
//! This crate provides the public error surface for the tessera ecosystem:
//! the error and result types a cipher engine sees when it composes the
//! primitive crates, plus the extension traits used to attach context
//! while errors cross crate boundaries.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
