//! Constant values for tessera cryptographic operations
//!
//! This module provides common constants used across the tessera project.

pub mod hash;
