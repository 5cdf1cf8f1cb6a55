//! Padding schemes for aligning data to cipher block boundaries
//!
//! A padding scheme fills the tail of a caller-supplied buffer and later
//! recovers how many bytes it filled. Schemes are stateless and work in
//! place over borrowed buffers; sizing the buffer stays with the caller.

use crate::error::Result;

pub mod pkcs7;
pub mod tbc;

pub use pkcs7::Pkcs7Padding;
pub use tbc::TbcPadding;

/// Stateless padding scheme contract
///
/// `add_padding` fills `buffer[offset..]` and reports how many bytes it
/// wrote; `padding_length` reads a padded buffer back and reports how many
/// trailing bytes are padding. When the padded region ends before the
/// allocation does, narrow the buffer with slicing before recovery.
pub trait PaddingScheme {
    /// Fill `buffer[offset..]` with padding, returning the byte count
    ///
    /// An offset equal to the buffer length requests zero bytes of
    /// padding and succeeds without touching the buffer.
    fn add_padding(&self, buffer: &mut [u8], offset: usize) -> Result<usize>;

    /// Number of trailing padding bytes in a padded buffer
    fn padding_length(&self, buffer: &[u8]) -> Result<usize>;

    /// Canonical scheme name
    fn name(&self) -> &'static str;
}
