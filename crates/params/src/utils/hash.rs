//! Constants for hash functions

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Word size of the 32-bit SHA-2 family in bytes
pub const SHA256_WORD_SIZE: usize = 4;

/// Words per SHA-256 input block
pub const SHA256_BLOCK_WORDS: usize = 16;

/// Length of the expanded SHA-256 message schedule in words
pub const SHA256_SCHEDULE_WORDS: usize = 64;
