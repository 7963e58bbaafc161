/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use eigentile::eigentile_core::options::CodecOptions;
use eigentile::{EigenTileEncodeErrors, TileLayout};
use log::{info, Level, SetLoggerError};

use crate::errors::CliErrors;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub codec:      CodecOptions,
    pub basis_file: Option<PathBuf>,
    pub show_stats: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            codec:      CodecOptions::default(),
            basis_file: None,
            show_stats: false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, CliErrors> {
    let mut cmd_options = CmdOptions::new();

    let width = options
        .get_one::<usize>("tile-width")
        .copied()
        .unwrap_or(cmd_options.codec.get_tile_width());
    let height = options
        .get_one::<usize>("tile-height")
        .copied()
        .unwrap_or(cmd_options.codec.get_tile_height());

    cmd_options.codec = cmd_options
        .codec
        .set_tile_width(width)
        .set_tile_height(height)
        .set_strict_mode(options.get_flag("strict"));

    let layout = TileLayout::from_options(&cmd_options.codec)
        .ok_or(EigenTileEncodeErrors::InvalidGeometry(width, height))?;

    info!("Tile size: {}x{}", width, height);
    info!("Packet size: {} bytes", layout.packet_size());

    if options.value_source("basis") == Some(ValueSource::CommandLine) {
        let file = options.get_one::<PathBuf>("basis").cloned();
        info!("Using basis from {:?}", file);
        cmd_options.basis_file = file;
    }
    if options.get_flag("strict") {
        info!("Strict mode enabled");
    }
    cmd_options.show_stats = options.get_flag("stats");

    Ok(cmd_options)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) -> Result<(), SetLoggerError> {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level)?;

    info!("Initialized logger");
    info!("Log level :{}", log_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn tile_flags_reach_codec_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "eigentile",
                "in.png",
                "--tile-width",
                "64",
                "--tile-height",
                "32",
                "--strict"
            ])
            .unwrap();
        let options = parse_options(&matches).unwrap();

        assert_eq!(options.codec.get_tile_width(), 64);
        assert_eq!(options.codec.get_tile_height(), 32);
        assert!(options.codec.get_strict_mode());
        assert!(options.basis_file.is_none());
        assert!(!options.show_stats);
    }

    #[test]
    fn bad_tile_geometry_is_rejected() {
        let matches = create_cmd_args()
            .try_get_matches_from(["eigentile", "in.png", "--tile-width", "20"])
            .unwrap();

        assert!(parse_options(&matches).is_err());
    }
}
