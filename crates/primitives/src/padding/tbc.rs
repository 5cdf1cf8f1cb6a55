//! Trailing Bit Complement (TBC) padding
//!
//! TBC fills the pad region with a constant byte whose low bit complements
//! the low bit of the last data byte: `0xFF` after an even byte and `0x00`
//! after an odd one. Recovery counts the run of trailing bytes equal to
//! the final byte, and the complemented bit guarantees that run stops at
//! the data byte that chose the fill.
//!
//! Recovery is exact for any buffer this scheme padded with at least one
//! byte. A buffer whose data already ends in a run of its final byte is
//! indistinguishable from a padded one; callers that request zero bytes
//! of padding accept that ambiguity.

use crate::error::{validate, Result};

use super::PaddingScheme;

/// Trailing Bit Complement padding scheme
#[derive(Clone, Copy, Debug, Default)]
pub struct TbcPadding;

impl PaddingScheme for TbcPadding {
    fn add_padding(&self, buffer: &mut [u8], offset: usize) -> Result<usize> {
        validate::max_length("TBC padding offset", offset, buffer.len())?;
        let count = buffer.len() - offset;
        if count == 0 {
            return Ok(0);
        }

        // The byte before the pad region picks the fill; a pad covering
        // the whole buffer falls back to the buffer's first byte.
        let chooser = if offset == 0 {
            buffer[0]
        } else {
            buffer[offset - 1]
        };
        let fill = if chooser & 0x01 == 0 { 0xFF } else { 0x00 };

        for byte in &mut buffer[offset..] {
            *byte = fill;
        }
        Ok(count)
    }

    fn padding_length(&self, buffer: &[u8]) -> Result<usize> {
        validate::min_length("TBC padded buffer", buffer.len(), 1)?;
        let fill = buffer[buffer.len() - 1];
        let run = buffer.iter().rev().take_while(|&&byte| byte == fill).count();
        Ok(run)
    }

    fn name(&self) -> &'static str {
        "TBC"
    }
}
