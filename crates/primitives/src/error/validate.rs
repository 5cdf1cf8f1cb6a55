//! Validation helpers shared by the primitive implementations
//!
//! Each helper returns `Ok(())` when the requirement holds, so call
//! sites read as a list of preconditions followed by `?`.

use super::{Error, Result};

/// Require a parameter predicate to hold
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::param(name, reason))
    }
}

/// Require an exact length in bytes
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected,
            actual,
        })
    }
}

/// Require at least `min` bytes
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual >= min {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected: min,
            actual,
        })
    }
}

/// Require at most `max` bytes
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual <= max {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected: max,
            actual,
        })
    }
}

/// Require that an instance reached the state an operation needs
#[inline(always)]
pub fn state(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::State { context, details })
    }
}
