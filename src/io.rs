// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! Image source and sink.
//!
//! Bridges between image files and [`PixelGrid`] via the `image` crate.
//! Carriers with an alpha channel keep it (C=4, alpha samples carry bits
//! too); everything else is normalized to RGB (C=3). Persisting must be
//! lossless for the parity channel to survive — PNG is the intended
//! format, and `write_image` writes whatever format the destination
//! extension names, so callers should stick to lossless ones.

use std::fmt;
use std::path::Path;

use crate::grid::PixelGrid;

/// Errors from the image collaborator.
#[derive(Debug)]
pub enum ImageIoError {
    /// The input file could not be read or parsed as an image.
    Open(image::ImageError),
    /// The output file could not be encoded or written.
    Write(image::ImageError),
    /// The grid's channel count has no matching pixel layout (only 3 and 4
    /// are persistable).
    UnsupportedChannels(usize),
}

impl fmt::Display for ImageIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(e) => write!(f, "cannot open input image: {e}"),
            Self::Write(e) => write!(f, "cannot write output image: {e}"),
            Self::UnsupportedChannels(c) => {
                write!(f, "no pixel layout for {c}-channel grid (expected 3 or 4)")
            }
        }
    }
}

impl std::error::Error for ImageIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open(e) | Self::Write(e) => Some(e),
            Self::UnsupportedChannels(_) => None,
        }
    }
}

/// Load an image file into a [`PixelGrid`].
///
/// Alpha-carrying images become 4-channel grids, all others 3-channel.
///
/// # Errors
/// [`ImageIoError::Open`] if the path is unreadable, the format is
/// unsupported, or the file is corrupt.
pub fn read_image(path: &Path) -> Result<PixelGrid, ImageIoError> {
    let img = image::open(path).map_err(ImageIoError::Open)?;

    let grid = if img.color().has_alpha() {
        let rgba = img.into_rgba8();
        let (w, h) = rgba.dimensions();
        PixelGrid::from_samples(h as usize, w as usize, 4, rgba.into_raw())
    } else {
        let rgb = img.into_rgb8();
        let (w, h) = rgb.dimensions();
        PixelGrid::from_samples(h as usize, w as usize, 3, rgb.into_raw())
    };
    Ok(grid)
}

/// Persist a [`PixelGrid`] to an image file.
///
/// The format is chosen from the destination extension. Sample values are
/// written exactly; whether they survive depends on the format being
/// lossless.
///
/// # Errors
/// - [`ImageIoError::UnsupportedChannels`] if the grid is neither 3- nor
///   4-channel.
/// - [`ImageIoError::Write`] on encoding or filesystem failure.
pub fn write_image(grid: &PixelGrid, path: &Path) -> Result<(), ImageIoError> {
    let w = grid.width() as u32;
    let h = grid.height() as u32;
    match grid.channels() {
        3 => {
            let buf: image::RgbImage = image::ImageBuffer::from_raw(w, h, grid.samples().to_vec())
                .expect("grid buffer length matches its dimensions");
            buf.save(path).map_err(ImageIoError::Write)
        }
        4 => {
            let buf: image::RgbaImage = image::ImageBuffer::from_raw(w, h, grid.samples().to_vec())
                .expect("grid buffer length matches its dimensions");
            buf.save(path).map_err(ImageIoError::Write)
        }
        other => Err(ImageIoError::UnsupportedChannels(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_channel_count_rejected() {
        let grid = PixelGrid::new(2, 2, 5);
        match write_image(&grid, Path::new("/nonexistent/out.png")) {
            Err(ImageIoError::UnsupportedChannels(5)) => {}
            other => panic!("expected UnsupportedChannels, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_open_error() {
        match read_image(Path::new("/nonexistent/input.png")) {
            Err(ImageIoError::Open(_)) => {}
            other => panic!("expected Open error, got {other:?}"),
        }
    }
}
