/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use eigentile::eigentile_core::options::CodecOptions;
use eigentile::{decode_frame, encode_frame, Basis, EigenTileEncodeErrors, EncodedFrame};
use log::{debug, info, warn};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{load_rgb8, save_rgb8, RgbImage};
use crate::serde::{BasisFile, Stats};

pub(crate) fn run_workflow_from_cmd(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or_else(|| CliErrors::Generic("No input file".to_string()))?;
    let out_file = args
        .get_one::<PathBuf>("out")
        .ok_or_else(|| CliErrors::Generic("No output file".to_string()))?;

    let basis = match &cmd_opts.basis_file {
        Some(path) => {
            info!("Loading basis from {:?}", path);
            BasisFile::open(path)?.into_basis()?
        }
        None => Basis::default()
    };

    let image = load_rgb8(in_file)?;

    let frame = match encode_image(&image, &basis, cmd_opts.codec)? {
        Some(frame) => frame,
        None => return Ok(())
    };
    let (tiles_x, tiles_y) = frame.tiles();
    info!(
        "Encoded {} tiles into {} bytes",
        tiles_x * tiles_y,
        frame.total_bytes()
    );

    let decoded = decode_frame(&frame, &basis, cmd_opts.codec)?;
    let (out_width, out_height) = frame.output_dimensions();

    save_rgb8(out_file, &decoded, out_width, out_height)?;

    if cmd_opts.show_stats {
        let (mae, psnr) = compare(&image.pixels, image.width, &decoded, out_width, out_height);
        debug!("MAE: {}, PSNR: {}", mae, psnr);

        let stats = Stats {
            width: image.width,
            height: image.height,
            out_width,
            out_height,
            tiles_x,
            tiles_y,
            packet_size: frame.packets().first().map_or(0, Vec::len),
            packet_bytes: frame.total_bytes(),
            mae,
            psnr
        };
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}

/// Encode the whole image, or return `None` when not a single tile fits
///
/// An image smaller than one tile is not a failure, the divisibility
/// warning is all that is reported and no output is written.
fn encode_image(
    image: &RgbImage, basis: &Basis, options: CodecOptions
) -> Result<Option<EncodedFrame>, CliErrors> {
    match encode_frame(&image.pixels, image.width, image.height, basis, options) {
        Ok(frame) => Ok(Some(frame)),
        Err(EigenTileEncodeErrors::FrameTooSmall(width, height)) => {
            warn!(
                "Image size ({}x{}) holds no complete {}x{} tile, no output written",
                width,
                height,
                options.get_tile_width(),
                options.get_tile_height()
            );
            Ok(None)
        }
        Err(e) => Err(e.into())
    }
}

/// Mean absolute error and PSNR of `decoded` against the top left
/// `out_width x out_height` region of `source`
fn compare(
    source: &[u8], source_width: usize, decoded: &[u8], out_width: usize, out_height: usize
) -> (f64, f64) {
    let mut abs_sum = 0_u64;
    let mut sq_sum = 0_u64;

    let src_stride = source_width * 3;
    let out_stride = out_width * 3;

    for (src_row, out_row) in source
        .chunks_exact(src_stride)
        .zip(decoded.chunks_exact(out_stride))
        .take(out_height)
    {
        for (a, b) in src_row[..out_stride].iter().zip(out_row) {
            let diff = u64::from(a.abs_diff(*b));
            abs_sum += diff;
            sq_sum += diff * diff;
        }
    }
    let count = (out_stride * out_height) as f64;

    if count == 0.0 {
        return (0.0, f64::INFINITY);
    }
    let mae = abs_sum as f64 / count;
    let mse = sq_sum as f64 / count;

    let psnr = if mse == 0.0 {
        f64::INFINITY
    } else {
        10.0 * (255.0 * 255.0 / mse).log10()
    };
    (mae, psnr)
}
