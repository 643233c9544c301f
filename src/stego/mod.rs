// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! The LSB steganographic codec.
//!
//! Three operations, each a full pass over the grid in the shared scan
//! order (see [`scan`]):
//!
//! - [`encode`]: writes the payload's bits (MSB first, one bit per channel
//!   sample) into the grid's parity, followed by a zero terminator byte.
//! - [`decode`]: reads parity bits back into bytes until the terminator.
//! - [`capacity`]: the maximum payload size a grid of given dimensions can
//!   hold.
//!
//! The scan order is the implicit shared secret of the format: encoder and
//! decoder must traverse coordinates identically, so it is fixed and not
//! configurable.

pub mod capacity;
pub mod decode;
pub mod encode;
pub mod error;
pub mod scan;

pub use capacity::capacity;
pub use decode::{decode, DecodeOutcome};
pub use encode::encode;
pub use error::StegoError;

/// End-of-payload sentinel: one byte whose 8 bits are all zero.
///
/// Written after the last payload byte by the encoder; a completed zero
/// byte stops the decoder. Consequence: the codec cannot carry a payload
/// that contains a zero byte — decode returns the prefix before it. This
/// is an accepted limitation of the format, not a defect.
pub const TERMINATOR: u8 = 0;
