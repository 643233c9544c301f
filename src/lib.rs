// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! # lsbsteg
//!
//! Least-significant-bit image steganography: hides an arbitrary byte
//! sequence in the parity of the channel samples of a raster image, and
//! recovers it again. The codec walks the pixel grid in a fixed scan order
//! (channel fastest, then column, then row), writes one payload bit per
//! sample by nudging the sample's value by at most ±1 to force its parity,
//! and marks end-of-data with a single zero byte.
//!
//! The codec operates on a [`PixelGrid`] and knows nothing about file
//! formats; the [`io`] module loads and saves grids through the `image`
//! crate. Use a lossless output format (PNG) — recompression destroys the
//! parity channel.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lsbsteg::{decode, encode, io};
//!
//! let mut grid = io::read_image("photo.png".as_ref()).unwrap();
//! encode(&mut grid, b"secret message").unwrap();
//! io::write_image(&grid, "stego.png".as_ref()).unwrap();
//!
//! let grid = io::read_image("stego.png".as_ref()).unwrap();
//! assert_eq!(decode(&grid).payload(), b"secret message");
//! ```

pub mod grid;
pub mod io;
pub mod stego;

pub use grid::PixelGrid;
pub use io::ImageIoError;
pub use stego::{capacity, decode, encode, DecodeOutcome, StegoError, TERMINATOR};
