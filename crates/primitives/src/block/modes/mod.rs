//! Block cipher modes of operation
//!
//! Both modes implement the [`BlockCipherMode`](super::BlockCipherMode)
//! contract and can be swapped freely by the composing engine.

pub mod cbc;
pub mod ctr;

// Re-exports
pub use cbc::Cbc;
pub use ctr::Ctr;
