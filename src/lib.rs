//! # tessera
//!
//! A modular library of interchangeable symmetric-cryptography primitives.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tessera = "0.2"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `primitives` (default): The primitive layer (digests, modes, padding)
//! - `rng`: Re-export the random number generation crate
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`tessera-api`]: Error surface shared across the ecosystem
//! - [`tessera-common`]: Security utilities and zeroization wrappers
//! - [`tessera-params`]: Algorithm constants
//! - [`tessera-primitives`]: Digest engines, cipher modes, padding schemes

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use tessera_api as api;
pub use tessera_common as common;
pub use tessera_params as params;

// Feature-gated re-exports
#[cfg(feature = "primitives")]
pub use tessera_primitives as primitives;

// Re-export the crates implementors build against
pub use subtle;
pub use zeroize;

#[cfg(feature = "rng")]
pub use rand;

/// Common imports for tessera users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export the primitive contracts
    #[cfg(feature = "primitives")]
    pub use crate::primitives::{
        BlockCipher, BlockCipherMode, HashAlgorithm, HashFunction, PaddingScheme,
    };

    // Re-export the reference implementations
    #[cfg(feature = "primitives")]
    pub use crate::primitives::{Cbc, Ctr, Digest, Pkcs7Padding, Sha224, Sha256, TbcPadding};

    // Re-export security types
    pub use crate::common::{
        EphemeralSecret, SecureCompare, SecureZeroingType, ZeroizeGuard,
    };
}
