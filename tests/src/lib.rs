/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use eigentile::{Basis, EncodedFrame};
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod basis;
mod frame;
mod packet;

/// A basis table as stored in the fixtures directory
#[derive(Clone, Deserialize, Debug)]
pub struct BasisEntry {
    pub mean:    Vec<f32>,
    pub vectors: Vec<Vec<f32>>,
    pub comment: Option<String>
}

impl BasisEntry {
    pub fn to_basis(&self) -> Basis {
        let flat: Vec<f32> = self.vectors.concat();
        Basis::from_slices(&self.mean, &flat).unwrap()
    }
}

pub fn basis_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("basis")
}

pub fn load_basis(name: &str) -> BasisEntry {
    let file = read(basis_path().join(name)).unwrap();
    serde_json::from_slice(&file).unwrap()
}

/// Interleaved RGB frame where every channel is a different smooth ramp
pub fn gradient_frame(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = vec![0; width * height * 3];

    for (i, pixel) in pixels.chunks_exact_mut(3).enumerate() {
        let (x, y) = (i % width, i / width);
        pixel[0] = (64 + x / 4 + y / 4) as u8;
        pixel[1] = (32 + x / 3) as u8;
        pixel[2] = (200 - y / 2) as u8;
    }
    pixels
}

/// Deterministic pseudo random frame
pub fn noise_frame(width: usize, height: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;

    (0..width * height * 3)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

pub fn mean_abs_error(a: &[u8], b: &[u8]) -> f64 {
    assert_eq!(a.len(), b.len());
    let total: u64 = a.iter().zip(b).map(|(x, y)| u64::from(x.abs_diff(*y))).sum();
    total as f64 / a.len() as f64
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}

fn hash_frame(frame: &EncodedFrame) -> u128 {
    hash(&frame.packets().concat())
}
