// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end tests through real image files: load, encode, save as PNG,
//! reload, decode.

use std::path::Path;

use lsbsteg::{decode, encode, io};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Write a deterministic pseudo-random RGB PNG carrier.
fn make_carrier(path: &Path, width: u32, height: u32, seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let img = image::RgbImage::from_fn(width, height, |_, _| image::Rgb(rng.gen()));
    img.save(path).unwrap();
}

/// Write an RGBA carrier with non-opaque alpha.
fn make_rgba_carrier(path: &Path, width: u32, height: u32, seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let img = image::RgbaImage::from_fn(width, height, |_, _| image::Rgba(rng.gen()));
    img.save(path).unwrap();
}

#[test]
fn png_roundtrip_preserves_payload() {
    let dir = tempfile::tempdir().unwrap();
    let carrier = dir.path().join("carrier.png");
    let stego = dir.path().join("stego.png");
    make_carrier(&carrier, 40, 30, 11);

    let mut grid = io::read_image(&carrier).unwrap();
    encode(&mut grid, b"meet at the usual place").unwrap();
    io::write_image(&grid, &stego).unwrap();

    let reloaded = io::read_image(&stego).unwrap();
    let outcome = decode(&reloaded);
    assert!(outcome.is_complete());
    assert_eq!(outcome.payload(), b"meet at the usual place");
}

#[test]
fn png_save_load_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let carrier = dir.path().join("carrier.png");
    let copy = dir.path().join("copy.png");
    make_carrier(&carrier, 16, 16, 12);

    let grid = io::read_image(&carrier).unwrap();
    io::write_image(&grid, &copy).unwrap();
    let reloaded = io::read_image(&copy).unwrap();
    assert_eq!(grid, reloaded);
}

#[test]
fn rgba_carrier_keeps_alpha_channel() {
    let dir = tempfile::tempdir().unwrap();
    let carrier = dir.path().join("carrier.png");
    let stego = dir.path().join("stego.png");
    make_rgba_carrier(&carrier, 20, 20, 13);

    let mut grid = io::read_image(&carrier).unwrap();
    assert_eq!(grid.channels(), 4);

    encode(&mut grid, b"alpha carries bits too").unwrap();
    io::write_image(&grid, &stego).unwrap();

    let reloaded = io::read_image(&stego).unwrap();
    assert_eq!(reloaded.channels(), 4);
    assert_eq!(decode(&reloaded).payload(), b"alpha carries bits too");
}

#[test]
fn capacity_matches_file_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let carrier = dir.path().join("carrier.png");
    make_carrier(&carrier, 100, 50, 14);

    let grid = io::read_image(&carrier).unwrap();
    // 50 rows × 100 cols × 3 channels / 8
    assert_eq!(grid.capacity(), 1875);
}

#[test]
fn write_to_bad_path_fails() {
    let grid = lsbsteg::PixelGrid::new(4, 4, 3);
    let err = io::write_image(&grid, Path::new("/nonexistent-dir/out.png"));
    assert!(matches!(err, Err(io::ImageIoError::Write(_))));
}
