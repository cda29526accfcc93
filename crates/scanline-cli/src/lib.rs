//! CLI front end wiring `scanline-png` to `scanline-bmp`.
//!
//! Two positional arguments, `<input.png> <output.bmp>`, parsed with
//! `clap`, with `log`/`env_logger` for diagnostics.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use scanline_png::{DecoderOptions, PngDecoder};

fn command() -> Command {
    Command::new("scanline")
        .about("Decode a PNG image and write it out as a 24-bit BMP")
        .arg(Arg::new("input").help("Path to the source PNG file").required(true))
        .arg(Arg::new("output").help("Path to write the decoded BMP file").required(true))
        .arg(
            Arg::new("info")
                .long("info")
                .help("Log IHDR metadata before decoding")
                .action(ArgAction::SetTrue)
        )
}

/// Parse arguments, decode the input PNG, and write the output BMP.
/// Returns a non-zero [`ExitCode`] on any failure instead of panicking.
pub fn run() -> ExitCode {
    env_logger::init();

    let matches = command().get_matches();
    let input = PathBuf::from(matches.get_one::<String>("input").expect("required"));
    let output = PathBuf::from(matches.get_one::<String>("output").expect("required"));
    let show_info = matches.get_flag("info");

    match decode_and_write(&input, &output, show_info) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("scanline: {message}");
            ExitCode::FAILURE
        }
    }
}

fn decode_and_write(input: &std::path::Path, output: &std::path::Path, show_info: bool) -> Result<(), String> {
    let bytes = std::fs::read(input).map_err(|e| format!("failed to read {input:?}: {e}"))?;

    let mut decoder = PngDecoder::new_with_options(&bytes, DecoderOptions::default());
    let image = decoder.decode().map_err(|e| format!("failed to decode {input:?}: {e:?}"))?;

    if show_info {
        log::info!(
            "{:?}: {}x{}, {} channels",
            input,
            image.width,
            image.height,
            image.channels
        );
    }

    let rgb_pixels = match image.channels {
        3 => image.pixels,
        4 => drop_alpha(&image.pixels),
        other => return Err(format!("unsupported channel count for BMP output: {other}"))
    };

    scanline_bmp::write_bmp(image.width, image.height, &rgb_pixels, output)
        .map_err(|e| format!("failed to write {output:?}: {e:?}"))
}

/// BMP output is always 24-bit RGB; RGBA input has its alpha channel
/// dropped rather than composited (no blending model is in scope).
fn drop_alpha(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect()
}
