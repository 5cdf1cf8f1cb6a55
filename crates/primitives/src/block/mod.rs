//! Block cipher capability and modes of operation
//!
//! The engine composes encryption out of three interchangeable parts, and
//! this module supplies two of them: the [`BlockCipher`] capability that a
//! concrete cipher implements, and the [`BlockCipherMode`] contract that
//! turns one keyed block transformation into a stream of block transforms.
//! Mode instances are created over an unkeyed cipher and must be
//! initialized with a direction, key, and starting vector before any data
//! moves through them.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

pub mod modes;

pub use modes::{Cbc, Ctr};

/// Opaque block cipher capability consumed by the modes
///
/// The cipher owns its key material; implementors are `Zeroize` so the
/// wrapping mode can clear them along with its own registers.
pub trait BlockCipher: Zeroize {
    /// Block length in bytes
    fn block_size(&self) -> usize;

    /// Whether `len` is a key length this cipher accepts
    fn is_valid_key_size(&self, len: usize) -> bool;

    /// Install `key`, replacing any previously installed key
    ///
    /// Fails with a parameter error when the length is not accepted.
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Encrypt exactly one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt exactly one block in place
    ///
    /// Ciphers consumed only through keystream modes may keep the
    /// default, which reports decryption as unsupported.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let _ = block;
        Err(Error::param(
            "decrypt_block",
            "not supported by this cipher",
        ))
    }

    /// Canonical cipher name
    fn name(&self) -> &'static str;
}

/// Uniform stateful contract for modes of operation
///
/// Every transform call consumes exactly one block of input and produces
/// one block of output; the vector register advances as a side effect and
/// is never rewound implicitly. Callers that need to replay a stream
/// reinstall the starting vector with [`set_vector`](Self::set_vector).
pub trait BlockCipherMode<C: BlockCipher> {
    /// Wrap `cipher` in an uninitialized mode instance
    fn new(cipher: C) -> Self
    where
        Self: Sized;

    /// Block length in bytes, equal to the wrapped cipher's
    fn block_size(&self) -> usize;

    /// Direction fixed at initialization, `None` before it
    fn is_encryption(&self) -> Option<bool>;

    /// Mode name including the wrapped cipher, e.g. `"AES-128/CTR"`
    fn name(&self) -> String;

    /// Current vector register, empty until one has been installed
    fn vector(&self) -> &[u8];

    /// Replace the vector register without re-keying
    fn set_vector(&mut self, vector: &[u8]) -> Result<()>;

    /// Key the wrapped cipher and install direction and starting vector
    fn initialize(&mut self, encryption: bool, key: &[u8], iv: &[u8]) -> Result<()>;

    /// Transform exactly one block from `input` into `output`
    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<()>;

    /// Transform one block at the given offsets
    ///
    /// Windows shorter than the block size are rejected before any state
    /// changes. Returns the number of bytes written.
    fn transform_at(
        &mut self,
        input: &[u8],
        in_offset: usize,
        output: &mut [u8],
        out_offset: usize,
    ) -> Result<usize> {
        let block_size = self.block_size();
        validate::min_length(
            "mode input window",
            input.len().saturating_sub(in_offset),
            block_size,
        )?;
        validate::min_length(
            "mode output window",
            output.len().saturating_sub(out_offset),
            block_size,
        )?;
        self.transform(
            &input[in_offset..in_offset + block_size],
            &mut output[out_offset..out_offset + block_size],
        )?;
        Ok(block_size)
    }

    /// Fill a fresh block-sized vector from `rng`
    fn generate_vector<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Vec<u8> {
        let mut vector = vec![0u8; self.block_size()];
        rng.fill_bytes(&mut vector);
        vector
    }
}

#[cfg(test)]
pub(crate) mod testutil;
