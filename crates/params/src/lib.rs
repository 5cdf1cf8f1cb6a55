//! Constant values for tessera cryptographic primitives
//!
//! This crate collects the fixed sizes shared by the primitive
//! implementations and their callers, so that a cipher engine composing
//! digests, modes, and padding schemes can size its buffers without
//! depending on any concrete implementation crate.

#![no_std]
#![forbid(unsafe_code)]

pub mod utils;
