//! Type-safe digest output with size guarantees
//!
//! Provides the `Digest` type, representing the output of a
//! cryptographic hash function with compile-time size guarantees.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;
use core::ops::{Deref, DerefMut};
use hex;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::{ConstantTimeEq, SecureZeroingType};
use tessera_common::security::SecureCompare;

/// A cryptographic digest of exactly `N` bytes
///
/// Truncating algorithms pick their own `N`; a digest always fills its
/// buffer completely.
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice of exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Digest length in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the digest holds zero bytes
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Convert to a hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Parse from a hexadecimal string of exactly `2 * N` characters
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let mut data = [0u8; N];
        hex::decode_to_slice(hex_str, &mut data)
            .map_err(|_| crate::error::Error::param("hex_str", "Invalid hexadecimal string"))?;
        Ok(Self { data })
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for Digest<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for Digest<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Variable-time equality; use `ConstantTimeEq` when either side is secret.
impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({})", N, self.to_hex())
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        self.data.secure_eq(&other.data)
    }
}

impl<const N: usize> SecureZeroingType for Digest<N> {
    fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_hex_round_trip() {
        let digest = Digest::new([0xA1u8, 0xB2, 0xC3, 0xD4]);
        assert_eq!(digest.to_hex(), "a1b2c3d4");
        assert_eq!(format!("{}", digest), "a1b2c3d4");

        let parsed = Digest::<4>::from_hex("a1b2c3d4").unwrap();
        assert_eq!(parsed, digest);
        assert!(Digest::<4>::from_hex("a1b2").is_err());
        assert!(Digest::<4>::from_hex("not hex!").is_err());
    }

    #[test]
    fn test_digest_from_slice_requires_exact_length() {
        let digest = Digest::<4>::from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(digest.as_ref(), &[1, 2, 3, 4]);
        assert_eq!(digest.len(), 4);

        assert!(Digest::<4>::from_slice(&[1, 2, 3]).is_err());
        assert!(Digest::<4>::from_slice(&[1, 2, 3, 4, 5]).is_err());
    }

    #[test]
    fn test_digest_constant_time_equality() {
        let a = Digest::new([7u8; 8]);
        let b = Digest::new([7u8; 8]);
        let mut c = Digest::new([7u8; 8]);
        c.as_mut()[3] ^= 1;

        assert!(a.ct_eq(&b));
        assert!(!a.ct_eq(&c));
        assert_ne!(a, c);
    }
}
