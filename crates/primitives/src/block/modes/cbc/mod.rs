//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC chains blocks through the vector register: each plaintext block is
//! XORed with the previous ciphertext block before encryption, and the
//! first block is XORed with the initialization vector. Decryption runs
//! the cipher backwards and XORs afterwards, so the wrapped cipher must
//! support block decryption for that direction.
//!
//! This implementation follows NIST SP 800-38A and provides secure memory
//! handling with automatic zeroization of sensitive data.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec, vec::Vec};

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::{BlockCipher, BlockCipherMode};
use crate::error::{validate, Result};

// Import security types for memory safety
use tessera_common::security::barrier;

/// CBC mode implementation with secure memory handling
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<C: BlockCipher> {
    cipher: C,
    vector: Zeroizing<Vec<u8>>,
    scratch: Zeroizing<Vec<u8>>,
    encryption: Option<bool>,
}

impl<C: BlockCipher> BlockCipherMode<C> for Cbc<C> {
    fn new(cipher: C) -> Self {
        Cbc {
            cipher,
            vector: Zeroizing::new(Vec::new()),
            scratch: Zeroizing::new(Vec::new()),
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
        format!("{}/CBC", self.cipher.name())
    }

    fn vector(&self) -> &[u8] {
        &self.vector
    }

    fn set_vector(&mut self, vector: &[u8]) -> Result<()> {
        validate::parameter(
            vector.len() == self.cipher.block_size(),
            "CBC vector",
            "vector length must equal the cipher block size",
        )?;
        self.vector = Zeroizing::new(vector.to_vec());
        Ok(())
    }

    fn initialize(&mut self, encryption: bool, key: &[u8], iv: &[u8]) -> Result<()> {
        let block_size = self.cipher.block_size();
        validate::parameter(
            iv.len() == block_size,
            "CBC vector",
            "vector length must equal the cipher block size",
        )?;
        validate::parameter(
            self.cipher.is_valid_key_size(key.len()),
            "CBC key",
            "key size is not accepted by the wrapped cipher",
        )?;

        self.cipher.set_key(key)?;
        self.vector = Zeroizing::new(iv.to_vec());
        self.scratch = Zeroizing::new(vec![0u8; block_size]);
        self.encryption = Some(encryption);
        Ok(())
    }

    fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        validate::state(
            self.encryption.is_some(),
            "CBC transform",
            "mode has not been initialized",
        )?;
        let block_size = self.cipher.block_size();
        validate::length("CBC input block", input.len(), block_size)?;
        validate::length("CBC output block", output.len(), block_size)?;
        let encrypting = self.encryption == Some(true);

        barrier::with_barriers(|| {
            if encrypting {
                // XOR with previous ciphertext block (or IV for the first block)
                for i in 0..block_size {
                    self.scratch[i] = input[i] ^ self.vector[i];
                }
                self.cipher.encrypt_block(&mut self.scratch)?;
                output.copy_from_slice(&self.scratch);
                // The register chains the ciphertext just produced.
                self.vector.copy_from_slice(&self.scratch);
            } else {
                self.scratch.copy_from_slice(input);
                self.cipher.decrypt_block(&mut self.scratch)?;
                // XOR with previous ciphertext block (or IV for the first block)
                for i in 0..block_size {
                    output[i] = self.scratch[i] ^ self.vector[i];
                }
                // The register chains the ciphertext just consumed.
                self.vector.copy_from_slice(input);
            }
            Ok(())
        })
    }
}
