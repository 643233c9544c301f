// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! Payload recovery.
//!
//! Reads the grid's parity bits in scan order, packing them MSB-first into
//! bytes. A completed zero byte is the terminator and is not part of the
//! payload. A grid that runs out before any zero byte appears yields the
//! accumulated bytes as a distinct "no terminator" outcome, since such a
//! grid was probably never encoded by this scheme (or was truncated) and
//! the bytes may be garbage.

use crate::grid::PixelGrid;
use crate::stego::TERMINATOR;

/// Result of a decode pass.
///
/// Decoding cannot fail outright; the two variants distinguish a clean
/// terminator from grid exhaustion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The zero-byte terminator was found; the payload is complete.
    Complete(Vec<u8>),
    /// The grid was exhausted without a terminator. The recovered bytes may
    /// be truncated or not steganographic content at all. Any trailing
    /// partial byte (fewer than 8 bits) is discarded.
    NoTerminator(Vec<u8>),
}

impl DecodeOutcome {
    /// The recovered bytes, regardless of how decoding stopped.
    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Complete(p) | Self::NoTerminator(p) => p,
        }
    }

    /// Consume the outcome, keeping only the recovered bytes.
    pub fn into_payload(self) -> Vec<u8> {
        match self {
            Self::Complete(p) | Self::NoTerminator(p) => p,
        }
    }

    /// Whether the terminator was found.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Recover the payload embedded in `grid`.
///
/// The grid is read-only; decode has no side effects and is safe to repeat.
pub fn decode(grid: &PixelGrid) -> DecodeOutcome {
    let mut payload = Vec::new();
    let mut acc = 0u8;
    let mut weight = 0x80u8;

    for (row, col, chan) in grid.scan() {
        if grid.get(row, col, chan) % 2 == 1 {
            acc |= weight;
        }

        if weight == 1 {
            if acc == TERMINATOR {
                return DecodeOutcome::Complete(payload);
            }
            payload.push(acc);
            acc = 0;
            weight = 0x80;
        } else {
            weight >>= 1;
        }
    }

    DecodeOutcome::NoTerminator(payload)
}
