//! Type-safe wrappers for primitive outputs
//!
//! Output types carry their size in the type and wipe themselves on
//! drop, so engine code cannot mix digests of different algorithms or
//! leak one in a working buffer.

pub mod digest;

pub use digest::Digest;

// Security types shared with tessera-common
pub use tessera_common::security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};

/// Equality that does not branch on the compared bytes
pub trait ConstantTimeEq {
    /// Compare `self` and `other` in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
