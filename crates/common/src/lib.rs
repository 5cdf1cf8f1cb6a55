//! Common implementations and shared functionality for the tessera library
//!
//! This crate provides the security utilities used across the tessera
//! primitive crates: zeroization wrappers for sensitive working buffers
//! plus constant-time comparison and memory barriers.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Crate-level shortcuts for the security module
pub use security::memory::{barrier, SecureCompare};
pub use security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};
