/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use eigentile::{BasisError, EigenTileEncodeErrors, EigenTileErrors};
use zune_image::errors::ImageErrors;

/// Everything that can stop the command line workflow
pub enum CliErrors {
    /// Reading the input or writing the output image failed
    ImageErrors(ImageErrors),
    /// Basis file parsing or stats output failed
    Json(serde_json::Error),
    Basis(BasisError),
    Encode(EigenTileEncodeErrors),
    Decode(EigenTileErrors),
    Io(std::io::Error),
    Generic(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::ImageErrors(err) => writeln!(f, "{err:?}"),
            CliErrors::Json(err) => writeln!(f, "JSON error: {err}"),
            CliErrors::Basis(err) => writeln!(f, "Invalid basis: {err:?}"),
            CliErrors::Encode(err) => writeln!(f, "Encoding failed: {err:?}"),
            CliErrors::Decode(err) => writeln!(f, "Decoding failed: {err:?}"),
            CliErrors::Io(err) => writeln!(f, "{err}"),
            CliErrors::Generic(err) => writeln!(f, "{err}")
        }
    }
}

impl From<ImageErrors> for CliErrors {
    fn from(value: ImageErrors) -> Self {
        CliErrors::ImageErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::Json(value)
    }
}

impl From<BasisError> for CliErrors {
    fn from(value: BasisError) -> Self {
        CliErrors::Basis(value)
    }
}

impl From<EigenTileEncodeErrors> for CliErrors {
    fn from(value: EigenTileEncodeErrors) -> Self {
        CliErrors::Encode(value)
    }
}

impl From<EigenTileErrors> for CliErrors {
    fn from(value: EigenTileErrors) -> Self {
        CliErrors::Decode(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::Io(value)
    }
}
