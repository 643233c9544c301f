// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! Embedding capacity calculation.

/// Maximum payload size, in bytes, for a grid of the given dimensions:
/// `floor(height * width * channels / 8)`.
///
/// A pure function of the dimensions — grid content never matters. One bit
/// fits per channel sample, so the sample count divided by 8 is the byte
/// count.
///
/// Caveat: the result does NOT reserve space for the 8-bit terminator the
/// encoder appends. A payload of exactly `capacity` bytes will therefore
/// fail with `CapacityExceeded`; callers planning a payload must subtract
/// one byte. This mirrors the long-standing public contract ("capacity"
/// means raw embeddable bits) and is kept rather than silently changed.
pub fn capacity(height: usize, width: usize, channels: usize) -> usize {
    height * width * channels / 8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PixelGrid;

    #[test]
    fn known_values() {
        // 2×2×3 = 12 samples → 1 byte
        assert_eq!(capacity(2, 2, 3), 1);
        // 100×50×3 = 15000 samples → 1875 bytes
        assert_eq!(capacity(100, 50, 3), 1875);
        // RGBA counts the alpha channel
        assert_eq!(capacity(10, 10, 4), 50);
    }

    #[test]
    fn floors_partial_bytes() {
        // 3 samples can't hold a whole byte
        assert_eq!(capacity(1, 1, 3), 0);
        // 15 samples → 1 byte, 7 bits wasted
        assert_eq!(capacity(1, 5, 3), 1);
    }

    #[test]
    fn independent_of_content() {
        let zeros = PixelGrid::new(4, 4, 3);
        let filled = PixelGrid::from_samples(4, 4, 3, vec![0xAB; 48]);
        assert_eq!(zeros.capacity(), filled.capacity());
        assert_eq!(zeros.capacity(), capacity(4, 4, 3));
    }
}
