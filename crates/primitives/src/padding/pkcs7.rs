//! PKCS#7 byte padding
//!
//! Every pad byte carries the pad length, which bounds the scheme at 255
//! bytes of padding. Recovery reads the final byte and checks the whole
//! declared run in constant time before trusting it.

use subtle::{Choice, ConstantTimeEq};

use crate::error::{validate, Error, Result};

use super::PaddingScheme;

/// PKCS#7 padding scheme
#[derive(Clone, Copy, Debug, Default)]
pub struct Pkcs7Padding;

impl PaddingScheme for Pkcs7Padding {
    fn add_padding(&self, buffer: &mut [u8], offset: usize) -> Result<usize> {
        validate::max_length("PKCS7 padding offset", offset, buffer.len())?;
        let count = buffer.len() - offset;
        if count == 0 {
            return Ok(0);
        }
        validate::max_length("PKCS7 padding run", count, 255)?;

        let fill = count as u8;
        for byte in &mut buffer[offset..] {
            *byte = fill;
        }
        Ok(count)
    }

    fn padding_length(&self, buffer: &[u8]) -> Result<usize> {
        validate::min_length("PKCS7 padded buffer", buffer.len(), 1)?;
        let fill = buffer[buffer.len() - 1];
        let count = fill as usize;
        if count == 0 || count > buffer.len() {
            return Err(Error::param(
                "PKCS7 padding",
                "declared padding run does not fit the buffer",
            ));
        }

        // Walk the whole declared run without branching on its bytes.
        let mut consistent = Choice::from(1u8);
        for byte in &buffer[buffer.len() - count..] {
            consistent &= byte.ct_eq(&fill);
        }
        if bool::from(consistent) {
            Ok(count)
        } else {
            Err(Error::param(
                "PKCS7 padding",
                "padding bytes are inconsistent",
            ))
        }
    }

    fn name(&self) -> &'static str {
        "PKCS7"
    }
}
