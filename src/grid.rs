// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! Pixel sample storage.
//!
//! Provides [`PixelGrid`], a height × width × channel-count grid of `u8`
//! samples in flat row-major storage. This is the only structure the codec
//! operates on; how samples get in and out of it is the `io` module's
//! concern.

use crate::stego::scan::ScanOrder;

/// Grid of channel samples for one raster image.
///
/// Samples are stored flat in scan order: `index = (row * width + col) *
/// channels + chan`. The channel count is typically 3 (RGB) or 4 (RGBA)
/// but the codec places no upper bound on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Number of pixel rows.
    height: usize,
    /// Number of pixel columns.
    width: usize,
    /// Samples per pixel.
    channels: usize,
    /// Flat storage: height * width * channels samples.
    samples: Vec<u8>,
}

impl PixelGrid {
    /// Create a new grid with all samples zero.
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            height,
            width,
            channels,
            samples: vec![0u8; height * width * channels],
        }
    }

    /// Wrap an existing flat sample buffer.
    ///
    /// The buffer length must equal `height * width * channels`; this is a
    /// caller invariant (the image loader always satisfies it).
    pub fn from_samples(height: usize, width: usize, channels: usize, samples: Vec<u8>) -> Self {
        assert_eq!(
            samples.len(),
            height * width * channels,
            "sample buffer length does not match dimensions"
        );
        Self {
            height,
            width,
            channels,
            samples,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Total number of samples, i.e. the number of embeddable bits.
    pub fn total_samples(&self) -> usize {
        self.samples.len()
    }

    /// Get a sample value.
    /// - `row`, `col`: pixel position (0-based)
    /// - `chan`: channel index within the pixel
    pub fn get(&self, row: usize, col: usize, chan: usize) -> u8 {
        self.samples[self.index(row, col, chan)]
    }

    /// Set a sample value.
    pub fn set(&mut self, row: usize, col: usize, chan: usize, val: u8) {
        let idx = self.index(row, col, chan);
        self.samples[idx] = val;
    }

    /// Iterate the grid's coordinates in the codec's fixed scan order.
    pub fn scan(&self) -> ScanOrder {
        ScanOrder::new(self.height, self.width, self.channels)
    }

    /// Maximum embeddable payload size in bytes. See [`crate::capacity`]
    /// for the terminator caveat.
    pub fn capacity(&self) -> usize {
        crate::stego::capacity(self.height, self.width, self.channels)
    }

    /// Raw read-only access to all samples in scan order.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Raw mutable access to all samples in scan order.
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    fn index(&self, row: usize, col: usize, chan: usize) -> usize {
        debug_assert!(row < self.height, "row {row} >= {}", self.height);
        debug_assert!(col < self.width, "col {col} >= {}", self.width);
        debug_assert!(chan < self.channels, "chan {chan} >= {}", self.channels);
        (row * self.width + col) * self.channels + chan
    }
}
