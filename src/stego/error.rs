// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the codec.

use core::fmt;

/// Errors that can occur during steganographic encoding.
///
/// Decoding cannot fail: a grid with no terminator is reported through
/// [`crate::DecodeOutcome`], not through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The scan order was exhausted before the payload plus terminator was
    /// fully written. The grid's contents are unspecified after this error;
    /// callers must not persist it.
    CapacityExceeded {
        /// Bits the payload plus terminator needs.
        required_bits: usize,
        /// Bits the grid provides (one per sample).
        available_bits: usize,
    },
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                required_bits,
                available_bits,
            } => write!(
                f,
                "out of space in image: payload needs {required_bits} bits, image holds {available_bits}"
            ),
        }
    }
}

impl std::error::Error for StegoError {}
