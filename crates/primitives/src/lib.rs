//! Symmetric cryptography primitives with interchangeable parts
//!
//! This crate provides the primitive layer of the tessera engine: streaming
//! hash functions, block cipher modes of operation, and padding schemes,
//! each behind a uniform contract so concrete algorithms stay swappable.
//! The library is designed to be usable in both `std` and `no_std`
//! environments.
//!
//! # Security Features
//!
//! Sensitive material is protected throughout:
//!
//! - Secure memory handling with automatic zeroization
//! - Constant-time comparison operations
//! - Memory barrier utilities around keystream and chaining state

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "hash")]
pub use hash::{HashAlgorithm, HashFunction, Sha224, Sha256};

// Block cipher capability and modes of operation
#[cfg(feature = "block")]
pub mod block;
#[cfg(feature = "block")]
pub use block::{BlockCipher, BlockCipherMode, Cbc, Ctr};

// Padding schemes
#[cfg(feature = "padding")]
pub mod padding;
#[cfg(feature = "padding")]
pub use padding::{PaddingScheme, Pkcs7Padding, TbcPadding};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest};

// Re-export security types from tessera-common
pub use tessera_common::security::{
    barrier, EphemeralSecret, SecureCompare, SecureZeroingType, ZeroizeGuard,
};
