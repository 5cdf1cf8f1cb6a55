//! Hash function traits and implementations
//!
//! All digests in this module are streaming state machines: bytes are
//! absorbed incrementally in any fragmentation, and finalization emits a
//! fixed-size digest and returns the engine to its freshly created state
//! so the same instance can be reused for the next message.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

use crate::error::{validate, Result};
use tessera_common::security::SecureCompare;

pub mod sha2;

pub use sha2::{Sha224, Sha256};

/// Marker trait describing the static parameters of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;
    /// Canonical algorithm name
    const ALGORITHM_ID: &'static str;
}

/// Streaming hash function
///
/// Implementations buffer partial input internally, so `update` may be
/// called with arbitrarily fragmented data. `finalize` consumes the
/// buffered state and resets the instance; an engine may therefore hash
/// a sequence of messages with a single instance.
pub trait HashFunction {
    /// Static parameters of the implemented algorithm
    type Algorithm: HashAlgorithm;
    /// Digest type produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh instance with the algorithm's initial constants
    fn new() -> Self;

    /// Absorb `data` into the running computation
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Absorb exactly one byte
    fn update_byte(&mut self, byte: u8) -> Result<&mut Self> {
        self.update(&[byte])?;
        Ok(self)
    }

    /// Absorb `len` bytes of `data` starting at `offset`
    ///
    /// Fails without touching the running computation when the window
    /// exceeds the supplied buffer.
    fn update_at(&mut self, data: &[u8], offset: usize, len: usize) -> Result<&mut Self> {
        validate::max_length(
            "hash update window",
            offset.saturating_add(len),
            data.len(),
        )?;
        self.update(&data[offset..offset + len])?;
        Ok(self)
    }

    /// Complete the computation and reset the instance
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Complete the computation, writing the digest into `output` at `offset`
    ///
    /// Returns the digest size. The capacity check happens before any
    /// state is consumed, so a failed call leaves the computation intact.
    fn finalize_into(&mut self, output: &mut [u8], offset: usize) -> Result<usize> {
        let size = Self::Algorithm::OUTPUT_SIZE;
        validate::min_length(
            "digest output window",
            output.len().saturating_sub(offset),
            size,
        )?;
        let digest = self.finalize()?;
        output[offset..offset + size].copy_from_slice(digest.as_ref());
        Ok(size)
    }

    /// Reinitialize without reading any pending state
    fn reset(&mut self);

    /// One-shot convenience: hash `data` in a single call
    fn digest(data: &[u8]) -> Result<Self::Output>
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Hash `data` and compare against an expected digest in constant time
    fn verify(data: &[u8], expected: &[u8]) -> Result<bool>
    where
        Self: Sized,
    {
        let digest = Self::digest(data)?;
        let actual: &[u8] = digest.as_ref();
        Ok(actual.secure_eq(&expected))
    }

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Internal block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Canonical algorithm name
    fn name() -> String {
        Self::Algorithm::ALGORITHM_ID.to_string()
    }
}
