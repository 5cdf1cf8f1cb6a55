//! Counter (CTR) mode with proper error propagation and secure memory handling
//!
//! Counter mode turns a block cipher into a stream of block transforms by
//! encrypting successive values of the vector register and XORing the
//! result with the input. The register is treated as one big-endian
//! integer spanning the whole block and increments after every transform,
//! wrapping to zero when every byte is `0xFF`.
//!
//! Encryption and decryption are the same arithmetic; the direction flag
//! recorded at initialization only affects what the mode reports.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec, vec::Vec};

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::{BlockCipher, BlockCipherMode};
use crate::error::{validate, Result};

// Import security types for memory safety
use tessera_common::security::barrier;

/// Counter mode implementation with secure memory handling
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<C: BlockCipher> {
    cipher: C,
    vector: Zeroizing<Vec<u8>>,
    keystream: Zeroizing<Vec<u8>>,
    encryption: Option<bool>,
}

impl<C: BlockCipher> Ctr<C> {
    /// Advance the vector register by one, big-endian across the block
    fn increment_vector(&mut self) {
        for byte in self.vector.iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }
}

impl<C: BlockCipher> BlockCipherMode<C> for Ctr<C> {
    fn new(cipher: C) -> Self {
        Ctr {
            cipher,
            vector: Zeroizing::new(Vec::new()),
            keystream: Zeroizing::new(Vec::new()),
            encryption: None,
        }
    }

    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn is_encryption(&self) -> Option<bool> {
        self.encryption
    }

    fn name(&self) -> String {
        format!("{}/CTR", self.cipher.name())
    }

    fn vector(&self) -> &[u8] {
        &self.vector
    }

    fn set_vector(&mut self, vector: &[u8]) -> Result<()> {
        validate::parameter(
            vector.len() == self.cipher.block_size(),
            "CTR vector",
            "vector length must equal the cipher block size",
        )?;
        self.vector = Zeroizing::new(vector.to_vec());
        Ok(())
    }

    fn initialize(&mut self, encryption: bool, key: &[u8], iv: &[u8]) -> Result<()> {
        let block_size = self.cipher.block_size();
        validate::parameter(
            iv.len() == block_size,
            "CTR vector",
            "vector length must equal the cipher block size",
        )?;
        validate::parameter(
            self.cipher.is_valid_key_size(key.len()),
            "CTR key",
            "key size is not accepted by the wrapped cipher",
        )?;

        self.cipher.set_key(key)?;
        self.vector = Zeroizing::new(iv.to_vec());
        self.keystream = Zeroizing::new(vec![0u8; block_size]);
        self.encryption = Some(encryption);
        Ok(())
    }

    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        validate::state(
            self.encryption.is_some(),
            "CTR transform",
            "mode has not been initialized",
        )?;
        let block_size = self.cipher.block_size();
        validate::length("CTR input block", input.len(), block_size)?;
        validate::length("CTR output block", output.len(), block_size)?;

        // Use memory barrier before sensitive operations
        barrier::compiler_fence_seq_cst();

        self.keystream.copy_from_slice(&self.vector);
        self.cipher.encrypt_block(&mut self.keystream)?;

        for i in 0..block_size {
            output[i] = input[i] ^ self.keystream[i];
        }

        self.increment_vector();

        // Use memory barrier after sensitive operations
        barrier::compiler_fence_seq_cst();

        Ok(())
    }
}

#[cfg(test)]
mod tests;
