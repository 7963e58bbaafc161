/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("eigentile")
        .about("Squeeze an image through the eigen tile codec and write back what survives")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("in")
            .help("Input file to read data from")
            .value_name("INPUT")
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .help("Output to write the decoded image to")
            .value_name("OUTPUT")
            .value_parser(value_parser!(std::path::PathBuf))
            .default_value("result.png"))
        .arg(Arg::new("basis")
            .long("basis")
            .value_name("FILE")
            .help_heading("CODEC")
            .value_parser(value_parser!(std::path::PathBuf))
            .help("JSON file with the mean and eigen vectors to use")
            .long_help("JSON file with the basis to project blocks on.\nThe file is an object with a `mean` array of 192 numbers and a `vectors` array of 8 arrays of 192 numbers each.\nWhen absent the built in basis is used."))
        .arg(Arg::new("tile-width")
            .long("tile-width")
            .value_name("N")
            .help_heading("CODEC")
            .help("Width of a tile in pixels, a multiple of 8")
            .value_parser(value_parser!(usize))
            .default_value("160"))
        .arg(Arg::new("tile-height")
            .long("tile-height")
            .value_name("N")
            .help_heading("CODEC")
            .help("Height of a tile in pixels, a multiple of 8")
            .value_parser(value_parser!(usize))
            .default_value("120"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("CODEC")
            .help("Treat non finite packet headers as errors"))
        .arg(Arg::new("stats")
            .long("stats")
            .action(ArgAction::SetTrue)
            .help_heading("CODEC")
            .help("Print a JSON summary of packet sizes and reconstruction error"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the coding options"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::create_cmd_args;

    #[test]
    fn output_defaults_to_result_png() {
        let matches = create_cmd_args()
            .try_get_matches_from(["eigentile", "in.png"])
            .unwrap();

        assert_eq!(
            matches.get_one::<PathBuf>("out"),
            Some(&PathBuf::from("result.png"))
        );
        assert_eq!(matches.get_one::<usize>("tile-width"), Some(&160));
        assert_eq!(matches.get_one::<usize>("tile-height"), Some(&120));
    }

    #[test]
    fn input_is_required() {
        assert!(create_cmd_args()
            .try_get_matches_from(["eigentile"])
            .is_err());
    }
}
