/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use eigentile::{Basis, BasisError, BLOCK_VECTOR_LEN, NUM_COEFFICIENTS};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::CliErrors;

/// On disk layout of a basis
///
/// ```json
/// { "mean": [192 numbers], "vectors": [[192 numbers], ...8 times] }
/// ```
#[derive(Deserialize)]
pub struct BasisFile {
    mean:    Vec<f32>,
    vectors: Vec<Vec<f32>>
}

impl BasisFile {
    pub fn open(path: &Path) -> Result<BasisFile, CliErrors> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    pub fn into_basis(self) -> Result<Basis, BasisError> {
        if self.vectors.len() != NUM_COEFFICIENTS {
            return Err(BasisError::WrongVectorsLength(
                NUM_COEFFICIENTS * BLOCK_VECTOR_LEN,
                self.vectors.iter().map(Vec::len).sum()
            ));
        }
        if let Some(vector) = self.vectors.iter().find(|x| x.len() != BLOCK_VECTOR_LEN) {
            return Err(BasisError::WrongVectorsLength(
                NUM_COEFFICIENTS * BLOCK_VECTOR_LEN,
                NUM_COEFFICIENTS * vector.len()
            ));
        }
        let flat: Vec<f32> = self.vectors.concat();

        Basis::from_slices(&self.mean, &flat)
    }
}

/// Summary printed by `--stats`
pub struct Stats {
    pub width:        usize,
    pub height:       usize,
    pub out_width:    usize,
    pub out_height:   usize,
    pub tiles_x:      usize,
    pub tiles_y:      usize,
    pub packet_size:  usize,
    pub packet_bytes: usize,
    pub mae:          f64,
    pub psnr:         f64
}

impl Stats {
    /// Size of the raw RGB tiles that were coded over the size of their packets
    pub fn compression_ratio(&self) -> f64 {
        if self.packet_bytes == 0 {
            return 0.0;
        }
        (self.out_width * self.out_height * 3) as f64 / self.packet_bytes as f64
    }
}

impl Serialize for Stats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Stats", 7)?;

        state.serialize_field("input", &(self.width, self.height))?;
        state.serialize_field("output", &(self.out_width, self.out_height))?;
        state.serialize_field("tiles", &(self.tiles_x, self.tiles_y))?;
        state.serialize_field("packet_size", &self.packet_size)?;
        state.serialize_field("packet_bytes", &self.packet_bytes)?;
        state.serialize_field("compression_ratio", &self.compression_ratio())?;
        state.serialize_field("mae", &self.mae)?;
        // serde_json turns infinity into null, identical images have no finite PSNR
        state.serialize_field("psnr", &self.psnr)?;

        state.end()
    }
}
