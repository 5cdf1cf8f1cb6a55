//! Wrappers that guarantee zeroization of sensitive values
//!
//! The primitive implementations route every intermediate buffer that may
//! hold key- or plaintext-derived material through the types in this
//! module, so that the material is overwritten on every exit path.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::Zeroize;

/// Trait for types that can be securely zeroed and cloned
pub trait SecureZeroingType: Zeroize + Clone {
    /// Create a zeroed instance
    fn zeroed() -> Self;

    /// Create a secure clone that preserves security properties
    ///
    /// Cloned instances must keep the same zeroization guarantees as
    /// the original.
    fn secure_clone(&self) -> Self {
        self.clone()
    }
}

/// Owned value that is overwritten when it goes out of scope
///
/// Used for short-lived working values such as staged digest
/// accumulators. The value is reachable only through `Deref`, and its
/// `Debug` output is redacted.
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Take ownership of `value` for the rest of its lifetime
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Zeroize + Clone> Clone for EphemeralSecret<T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: Zeroize + fmt::Debug> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralSecret([REDACTED])")
    }
}

/// Guard that zeroizes a borrowed value when dropped
///
/// Covers early returns and panics: however the scope exits, the
/// borrowed data is overwritten.
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Guard `value` until the end of the current scope
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeral_secret_reads_through_deref() {
        #[derive(Clone, Zeroize)]
        struct TestSecret(u64);

        let secret = EphemeralSecret::new(TestSecret(42));
        assert_eq!(secret.0, 42);

        let cloned = secret.clone();
        assert_eq!(cloned.0, 42);
    }

    #[test]
    fn test_ephemeral_secret_debug_redacts() {
        let secret = EphemeralSecret::new([0xAAu8; 16]);
        let shown = format!("{:?}", secret);
        assert!(!shown.contains("170"));
        assert!(shown.contains("REDACTED"));
    }

    #[test]
    fn test_zeroize_guard() {
        let mut value = vec![1u8, 2, 3, 4];
        {
            let guard = ZeroizeGuard::new(&mut value);
            // Simulate work with the value
            assert_eq!(&**guard, &[1, 2, 3, 4]);
        }
        // Guard should have zeroized the value (which clears the Vec)
        assert!(value.is_empty());
    }

    #[test]
    fn test_zeroize_guard_writes_through() {
        let mut words = [0u32; 4];
        {
            let mut guard = ZeroizeGuard::new(&mut words);
            guard[0] = 7;
            guard[3] = 9;
            assert_eq!(guard[0], 7);
        }
        assert_eq!(words, [0u32; 4]);
    }
}
