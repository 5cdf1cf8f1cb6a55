//! Memory safety patterns for cryptographic state
//!
//! Comparison helpers that do not branch on secret data, and the fences
//! the primitive implementations place around sensitive buffer handling.

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison for byte material
///
/// `secure_cmp` is the implementation hook; `secure_eq` is the form most
/// call sites read.
pub trait SecureCompare: Sized {
    /// Compare two values, yielding a constant-time [`Choice`]
    fn secure_cmp(&self, other: &Self) -> Choice;

    /// Compare two values in constant time
    fn secure_eq(&self, other: &Self) -> bool {
        bool::from(self.secure_cmp(other))
    }
}

impl<const N: usize> SecureCompare for [u8; N] {
    fn secure_cmp(&self, other: &Self) -> Choice {
        self.ct_eq(other)
    }
}

impl SecureCompare for &[u8] {
    fn secure_cmp(&self, other: &Self) -> Choice {
        self.ct_eq(other)
    }
}

/// Memory barrier helpers
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Compiler fence that keeps sensitive operations where they were written
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Run `f` between two compiler fences
    #[inline(always)]
    pub fn with_barriers<T, F: FnOnce() -> T>(f: F) -> T {
        compiler_fence_seq_cst();
        let out = f();
        compiler_fence_seq_cst();
        out
    }
}
