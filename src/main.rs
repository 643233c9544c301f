// Copyright (c) 2026 the lsbsteg developers
// SPDX-License-Identifier: GPL-3.0-only

//! Command-line front end for the LSB codec.
//!
//! One positional image path; `-s` queries capacity, `-o` selects encode
//! mode (payload from `-d` or stdin), and plain invocation decodes to
//! stdout. Exit codes: 0 success, 1 usage error, 2 image-open failure,
//! 3 encode/decode/write failure.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use lsbsteg::{decode, encode, io, DecodeOutcome};

const EXIT_USAGE: u8 = 1;
const EXIT_OPEN: u8 = 2;
const EXIT_CODEC: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "lsbsteg",
    version,
    about = "Image steganography tool: hide data in pixel parity, or recover it"
)]
struct Args {
    /// Input image file
    input: PathBuf,

    /// Show capacity of the image in bytes and exit
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Output file; if set, encode mode is selected
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Data to encode; read from stdin when omitted
    #[arg(short, long)]
    data: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    ExitCode::from(run(args))
}

fn run(args: Args) -> u8 {
    if args.data.is_some() && args.output.is_none() {
        eprintln!("no output filename specified (-o is required with -d)");
        return EXIT_USAGE;
    }

    let mut grid = match io::read_image(&args.input) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return EXIT_OPEN;
        }
    };
    log::debug!(
        "loaded {}x{}x{} grid, capacity {} bytes",
        grid.height(),
        grid.width(),
        grid.channels(),
        grid.capacity()
    );

    if args.size {
        println!("{}", grid.capacity());
        return 0;
    }

    match args.output {
        Some(output) => {
            let payload = match args.data {
                Some(data) => data.into_bytes(),
                None => {
                    let mut buf = Vec::new();
                    if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
                        eprintln!("failed to read data from stdin: {e}");
                        return EXIT_CODEC;
                    }
                    buf
                }
            };

            if matches!(
                output.extension().and_then(|e| e.to_str()),
                Some("jpg") | Some("jpeg")
            ) {
                log::warn!("JPEG output recompresses pixels and will destroy the hidden data; use PNG");
            }

            if let Err(e) = encode(&mut grid, &payload) {
                eprintln!("failed to encode data: {e}");
                return EXIT_CODEC;
            }
            if let Err(e) = io::write_image(&grid, &output) {
                eprintln!("failed to write encoded image: {e}");
                return EXIT_CODEC;
            }
            0
        }
        None => {
            let outcome = decode(&grid);
            if let DecodeOutcome::NoTerminator(_) = &outcome {
                log::warn!("no terminator found; recovered data may be truncated or not encoded by this tool");
            }
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if out.write_all(outcome.payload()).is_err() || out.write_all(b"\n").is_err() {
                eprintln!("failed to write decoded data to stdout");
                return EXIT_CODEC;
            }
            0
        }
    }
}
