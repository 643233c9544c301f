// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! The fixed coordinate traversal shared by encoder and decoder.
//!
//! Coordinates are visited with the channel index varying fastest, then the
//! column, then the row — the natural raster order of the flat sample
//! buffer. Encoder and decoder derive the same sequence independently from
//! the grid dimensions alone; there is no seed and no state to carry
//! between operations.

/// Lazy iterator over `(row, col, chan)` coordinates in scan order.
///
/// Finite (`height * width * channels` items) and re-derivable: two
/// instances built from the same dimensions yield identical sequences.
#[derive(Debug, Clone)]
pub struct ScanOrder {
    height: usize,
    width: usize,
    channels: usize,
    row: usize,
    col: usize,
    chan: usize,
}

impl ScanOrder {
    /// Start a fresh traversal over a grid of the given dimensions.
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        // A zero dimension means there is nothing to visit; park the cursor
        // past the last row so `next` returns None immediately.
        let row = if width == 0 || channels == 0 { height } else { 0 };
        Self {
            height,
            width,
            channels,
            row,
            col: 0,
            chan: 0,
        }
    }

    /// Coordinates not yet yielded.
    fn remaining(&self) -> usize {
        if self.row >= self.height {
            return 0;
        }
        let consumed = (self.row * self.width + self.col) * self.channels + self.chan;
        self.height * self.width * self.channels - consumed
    }
}

impl Iterator for ScanOrder {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.height {
            return None;
        }
        let coord = (self.row, self.col, self.chan);

        self.chan += 1;
        if self.chan == self.channels {
            self.chan = 0;
            self.col += 1;
            if self.col == self.width {
                self.col = 0;
                self.row += 1;
            }
        }
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for ScanOrder {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_varies_fastest() {
        let coords: Vec<_> = ScanOrder::new(2, 2, 2).collect();
        assert_eq!(
            coords,
            vec![
                (0, 0, 0),
                (0, 0, 1),
                (0, 1, 0),
                (0, 1, 1),
                (1, 0, 0),
                (1, 0, 1),
                (1, 1, 0),
                (1, 1, 1),
            ]
        );
    }

    #[test]
    fn visits_every_sample_once() {
        let mut coords: Vec<_> = ScanOrder::new(3, 4, 3).collect();
        assert_eq!(coords.len(), 36);
        coords.sort();
        coords.dedup();
        assert_eq!(coords.len(), 36);
    }

    #[test]
    fn re_derivable() {
        let a: Vec<_> = ScanOrder::new(5, 7, 4).collect();
        let b: Vec<_> = ScanOrder::new(5, 7, 4).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn exact_size() {
        let mut scan = ScanOrder::new(2, 3, 3);
        assert_eq!(scan.len(), 18);
        scan.next();
        scan.next();
        assert_eq!(scan.len(), 16);
        let rest: Vec<_> = scan.collect();
        assert_eq!(rest.len(), 16);
    }

    #[test]
    fn zero_dimension_is_empty() {
        assert_eq!(ScanOrder::new(0, 4, 3).count(), 0);
        assert_eq!(ScanOrder::new(4, 0, 3).count(), 0);
        assert_eq!(ScanOrder::new(4, 3, 0).count(), 0);
    }
}
