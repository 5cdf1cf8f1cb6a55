//! Cipher doubles for exercising the mode contracts
//!
//! Nothing here has cryptographic value; the point is an invertible,
//! observable block transformation with a real key boundary.

use zeroize::Zeroize;

use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// Byte-rotation cipher with a 16-byte block and a 16-byte key
///
/// Each byte is XORed with the key and rotated by a position-dependent
/// amount, which is trivially invertible.
#[derive(Clone, Zeroize)]
pub(crate) struct RotorCipher {
    key: [u8; 16],
    keyed: bool,
}

impl RotorCipher {
    pub(crate) const BLOCK_SIZE: usize = 16;
    pub(crate) const KEY_SIZE: usize = 16;

    pub(crate) fn new() -> Self {
        RotorCipher {
            key: [0u8; 16],
            keyed: false,
        }
    }
}

impl BlockCipher for RotorCipher {
    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    fn is_valid_key_size(&self, len: usize) -> bool {
        len == Self::KEY_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        validate::parameter(
            self.is_valid_key_size(key.len()),
            "key",
            "rotor key must be 16 bytes",
        )?;
        self.key.copy_from_slice(key);
        self.keyed = true;
        Ok(())
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::state(self.keyed, "rotor encrypt", "no key installed")?;
        validate::length("rotor block", block.len(), Self::BLOCK_SIZE)?;
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = (*byte ^ self.key[i]).rotate_left((i % 7) as u32 + 1);
        }
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::state(self.keyed, "rotor decrypt", "no key installed")?;
        validate::length("rotor block", block.len(), Self::BLOCK_SIZE)?;
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = byte.rotate_right((i % 7) as u32 + 1) ^ self.key[i];
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ROTOR-128"
    }
}

/// Keystream-only variant that keeps the unsupported `decrypt_block`
/// default from the capability trait
#[derive(Clone, Zeroize)]
pub(crate) struct OneWayCipher {
    inner: RotorCipher,
}

impl OneWayCipher {
    pub(crate) fn new() -> Self {
        OneWayCipher {
            inner: RotorCipher::new(),
        }
    }
}

impl BlockCipher for OneWayCipher {
    fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    fn is_valid_key_size(&self, len: usize) -> bool {
        self.inner.is_valid_key_size(len)
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.inner.set_key(key)
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.inner.encrypt_block(block)
    }

    fn name(&self) -> &'static str {
        "ROTOR-128-E"
    }
}
