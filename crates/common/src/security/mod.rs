//! Shared security building blocks
//!
//! Zeroization wrappers plus the comparison and fence helpers the
//! primitive crates lean on when they handle sensitive material.

pub mod memory;
pub mod secret;

// Zeroization wrappers
pub use secret::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};

// Constant-time comparison
pub use memory::SecureCompare;

// Fence helpers
pub use memory::barrier;
