// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! Payload embedding.
//!
//! Writes each payload byte MSB-first, one bit per channel sample in scan
//! order, by forcing the sample's parity to the bit value. A sample whose
//! parity already matches is left untouched; otherwise the value moves by
//! exactly 1 toward the middle of the range (values > 127 decrement, the
//! rest increment), so no sample ever leaves [0, 255] and the visual
//! perturbation is minimal.

use crate::grid::PixelGrid;
use crate::stego::error::StegoError;
use crate::stego::TERMINATOR;

/// Embed `payload` into `grid`, mutating it in place.
///
/// The bit sequence written is the payload's bytes MSB-first followed by
/// the 8 zero bits of the [`TERMINATOR`]. Samples past the terminator are
/// left untouched.
///
/// # Errors
/// [`StegoError::CapacityExceeded`] if the grid has fewer samples than the
/// payload plus terminator needs bits. The grid's contents are then
/// partially overwritten and must not be persisted.
pub fn encode(grid: &mut PixelGrid, payload: &[u8]) -> Result<(), StegoError> {
    let required_bits = (payload.len() + 1) * 8;
    let available_bits = grid.total_samples();

    let mut scan = grid.scan();
    for byte in payload.iter().copied().chain(std::iter::once(TERMINATOR)) {
        let mut weight = 0x80u8;
        while weight != 0 {
            let bit = byte & weight != 0;
            let (row, col, chan) = scan.next().ok_or(StegoError::CapacityExceeded {
                required_bits,
                available_bits,
            })?;

            let value = grid.get(row, col, chan);
            if (value % 2 == 1) != bit {
                let adjusted = if value > 127 { value - 1 } else { value + 1 };
                grid.set(row, col, chan, adjusted);
            }
            weight >>= 1;
        }
    }
    Ok(())
}
