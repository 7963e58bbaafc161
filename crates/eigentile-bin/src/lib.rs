/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use clap::error::ErrorKind;
use log::error;

use crate::workflow::run_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches() {
        Ok(options) => options,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                exit(1);
            }
        }
    };

    if let Err(e) = cmd_parsers::global_options::setup_logger(&options) {
        eprintln!("Could not initialize logger, reason {e:?}");
        exit(1);
    }

    let parsed_opts = match cmd_parsers::global_options::parse_options(&options) {
        Ok(opts) => opts,
        Err(e) => {
            error!("Invalid options, reason {:?}", e);
            exit(1);
        }
    };

    if let Err(e) = run_workflow_from_cmd(&options, &parsed_opts) {
        println!();
        error!(" Could not complete workflow, reason {:?}", e);
        println!();
        exit(1);
    }
}
