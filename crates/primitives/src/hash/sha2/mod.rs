//! SHA-2 family hash engines with hardened state handling
//!
//! The engines here are word oriented: incoming bytes are staged into a
//! small word buffer, packed big-endian into the low half of the message
//! schedule, and compressed in place once sixteen words accumulate. All
//! working state is wiped on drop and again by every finalization, which
//! leaves the engine ready for the next message.

use byteorder::{BigEndian, ByteOrder};
use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::Zeroize;

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

use tessera_common::security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};
use tessera_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, SHA256_BLOCK_WORDS, SHA256_OUTPUT_SIZE,
    SHA256_SCHEDULE_WORDS, SHA256_WORD_SIZE,
};

// SHA-256 round constants
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Marker type binding the SHA-256 parameters
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
}

/// Marker type binding the SHA-224 parameters
pub enum Sha224Algorithm {}

impl HashAlgorithm for Sha224Algorithm {
    const OUTPUT_SIZE: usize = SHA224_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-224";
}

/// Streaming SHA-256 engine
///
/// The running block lives in the low sixteen words of the schedule;
/// `filled` counts how many of them hold data and `pending` stages the
/// bytes of a word still being assembled.
#[derive(Clone, Zeroize)]
pub struct Sha256 {
    state: [u32; 8],
    schedule: [u32; SHA256_SCHEDULE_WORDS],
    filled: usize,
    pending: [u8; SHA256_WORD_SIZE],
    pending_len: usize,
    total_bytes: u64,
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Streaming SHA-224 engine
///
/// Runs the SHA-256 core with its own initial constants and truncates
/// the result to 28 bytes.
#[derive(Clone, Zeroize)]
pub struct Sha224 {
    inner: Sha256,
}

// --- SHA-256 core ---
impl Sha256 {
    fn init_state() -> [u32; 8] {
        [
            0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
            0x5be0cd19,
        ]
    }

    fn with_state(state: [u32; 8]) -> Self {
        Sha256 {
            state,
            schedule: [0u32; SHA256_SCHEDULE_WORDS],
            filled: 0,
            pending: [0u8; SHA256_WORD_SIZE],
            pending_len: 0,
            total_bytes: 0,
        }
    }

    fn new() -> Self {
        Self::with_state(Self::init_state())
    }

    fn absorb_byte(&mut self, byte: u8) {
        self.pending[self.pending_len] = byte;
        self.pending_len += 1;
        self.total_bytes = self.total_bytes.wrapping_add(1);
        if self.pending_len == SHA256_WORD_SIZE {
            self.schedule[self.filled] = BigEndian::read_u32(&self.pending);
            self.pending.zeroize();
            self.pending_len = 0;
            self.filled += 1;
            if self.filled == SHA256_BLOCK_WORDS {
                self.compress_block();
            }
        }
    }

    fn absorb(&mut self, mut input: &[u8]) {
        // Drain a partially assembled word before taking the word path.
        while self.pending_len != 0 && !input.is_empty() {
            self.absorb_byte(input[0]);
            input = &input[1..];
        }

        let mut words = input.chunks_exact(SHA256_WORD_SIZE);
        for word in words.by_ref() {
            self.schedule[self.filled] = BigEndian::read_u32(word);
            self.filled += 1;
            self.total_bytes = self.total_bytes.wrapping_add(SHA256_WORD_SIZE as u64);
            if self.filled == SHA256_BLOCK_WORDS {
                self.compress_block();
            }
        }

        for &byte in words.remainder() {
            self.absorb_byte(byte);
        }
    }

    fn compress_block(&mut self) {
        // Barrier before touching sensitive state
        compiler_fence(Ordering::SeqCst);

        for i in SHA256_BLOCK_WORDS..SHA256_SCHEDULE_WORDS {
            let s0 = self.schedule[i - 15].rotate_right(7)
                ^ self.schedule[i - 15].rotate_right(18)
                ^ (self.schedule[i - 15] >> 3);
            let s1 = self.schedule[i - 2].rotate_right(17)
                ^ self.schedule[i - 2].rotate_right(19)
                ^ (self.schedule[i - 2] >> 10);
            self.schedule[i] = self.schedule[i - 16]
                .wrapping_add(s0)
                .wrapping_add(self.schedule[i - 7])
                .wrapping_add(s1);
        }

        // Working variables are wiped however this scope exits
        let mut working_vars = self.state;
        let mut guard = ZeroizeGuard::new(&mut working_vars);

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *guard;

        for i in 0..SHA256_SCHEDULE_WORDS {
            let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
            let ch = (e & f) ^ ((!e) & g);
            let temp1 = h
                .wrapping_add(s1)
                .wrapping_add(ch)
                .wrapping_add(K256[i])
                .wrapping_add(self.schedule[i]);
            let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
            let maj = (a & b) ^ (a & c) ^ (b & c);
            let temp2 = s0.wrapping_add(maj);

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(temp1);
            d = c;
            c = b;
            b = a;
            a = temp1.wrapping_add(temp2);
        }

        *guard = [a, b, c, d, e, f, g, h];
        for (word, add) in self.state.iter_mut().zip(guard.iter()) {
            *word = word.wrapping_add(*add);
        }

        // The schedule must read all zero between blocks: finalization
        // writes only the two length words into its tail block and the
        // untouched slots serve as that block's zero padding.
        self.schedule.zeroize();
        self.filled = 0;

        // Barrier after the state update
        compiler_fence(Ordering::SeqCst);
    }

    fn finalize_and_reset(&mut self, fresh: [u32; 8]) -> [u8; SHA256_OUTPUT_SIZE] {
        // The length words cover the message only, not the padding that
        // is absorbed below.
        let bit_len = self.total_bytes.wrapping_mul(8);

        self.absorb_byte(0x80);
        while self.pending_len != 0 {
            self.absorb_byte(0x00);
        }
        if self.filled > SHA256_BLOCK_WORDS - 2 {
            self.compress_block();
        }
        self.schedule[SHA256_BLOCK_WORDS - 2] = (bit_len >> 32) as u32;
        self.schedule[SHA256_BLOCK_WORDS - 1] = bit_len as u32;
        self.compress_block();

        // Stage the final accumulators so the engine can be rewound to a
        // fresh state before the digest leaves it.
        let staged = EphemeralSecret::new(self.state);
        self.zeroize();
        self.state = fresh;

        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        for (chunk, &word) in out.chunks_exact_mut(SHA256_WORD_SIZE).zip(staged.iter()) {
            BigEndian::write_u32(chunk, word);
        }
        out
    }
}

// SHA-224 shares the compression core and differs only in its constants
impl Sha224 {
    fn init_state() -> [u32; 8] {
        [
            0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7,
            0xbefa4fa4,
        ]
    }

    fn new() -> Self {
        Sha224 {
            inner: Sha256::with_state(Self::init_state()),
        }
    }
}

// --- Trait wiring ---
impl SecureZeroingType for Sha256 {
    fn zeroed() -> Self {
        Self::new()
    }
}

impl HashFunction for Sha256 {
    type Algorithm = Sha256Algorithm;
    type Output = Digest<SHA256_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha256::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.absorb(data);
        Ok(self)
    }

    fn update_byte(&mut self, byte: u8) -> Result<&mut Self> {
        self.absorb_byte(byte);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let out = self.finalize_and_reset(Self::init_state());
        Ok(Digest::new(out))
    }

    fn reset(&mut self) {
        self.zeroize();
        self.state = Self::init_state();
    }
}

impl SecureZeroingType for Sha224 {
    fn zeroed() -> Self {
        Self::new()
    }
}

impl HashFunction for Sha224 {
    type Algorithm = Sha224Algorithm;
    type Output = Digest<SHA224_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha224::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.inner.absorb(data);
        Ok(self)
    }

    fn update_byte(&mut self, byte: u8) -> Result<&mut Self> {
        self.inner.absorb_byte(byte);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let mut full = self.inner.finalize_and_reset(Self::init_state());
        let mut out = [0u8; SHA224_OUTPUT_SIZE];
        out.copy_from_slice(&full[..SHA224_OUTPUT_SIZE]);
        full.zeroize();
        Ok(Digest::new(out))
    }

    fn reset(&mut self) {
        self.inner.zeroize();
        self.inner.state = Self::init_state();
    }
}
