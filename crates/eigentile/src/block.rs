/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion between interleaved RGB blocks and planar block vectors
//!
//! A block is addressed by a slice starting at its top left pixel and
//! the row stride, in bytes, of the buffer it lives in.
//! The vector holds 64 red samples, then 64 green, then 64 blue, each
//! row major. This order is part of the wire contract since the basis
//! vectors are laid out the same way.

use crate::constants::{BLOCK_PIXELS, BLOCK_SIZE, BLOCK_VECTOR_LEN, NUM_CHANNELS};

/// Bytes covered by one row of a block
const BLOCK_ROW_BYTES: usize = BLOCK_SIZE * NUM_CHANNELS;

#[inline(always)]
fn u8_to_f32(x: u8) -> f32 {
    f32::from(x) / 255.0
}

#[inline(always)]
fn f32_to_u8(x: f32) -> u8 {
    // NaN survives the clamp and saturates to zero in the cast
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Read an 8x8 RGB block into a planar vector with samples in `[0, 1]`
///
/// # Panics
/// If `pixels` does not cover `7 * stride + 24` bytes
pub fn block_to_vector(pixels: &[u8], stride: usize, vector: &mut [f32; BLOCK_VECTOR_LEN]) {
    let (r, rest) = vector.split_at_mut(BLOCK_PIXELS);
    let (g, b) = rest.split_at_mut(BLOCK_PIXELS);

    for y in 0..BLOCK_SIZE {
        let line = &pixels[y * stride..y * stride + BLOCK_ROW_BYTES];
        let row = y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE;

        for (((pixel, r_out), g_out), b_out) in line
            .chunks_exact(NUM_CHANNELS)
            .zip(&mut r[row.clone()])
            .zip(&mut g[row.clone()])
            .zip(&mut b[row])
        {
            *r_out = u8_to_f32(pixel[0]);
            *g_out = u8_to_f32(pixel[1]);
            *b_out = u8_to_f32(pixel[2]);
        }
    }
}

/// Write a planar vector back as an 8x8 RGB block
///
/// Samples are scaled by 255, rounded and clamped to the u8 range.
///
/// # Panics
/// If `pixels` does not cover `7 * stride + 24` bytes
pub fn vector_to_block(vector: &[f32; BLOCK_VECTOR_LEN], pixels: &mut [u8], stride: usize) {
    let (r, rest) = vector.split_at(BLOCK_PIXELS);
    let (g, b) = rest.split_at(BLOCK_PIXELS);

    for y in 0..BLOCK_SIZE {
        let line = &mut pixels[y * stride..y * stride + BLOCK_ROW_BYTES];
        let row = y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE;

        for (((pixel, r_in), g_in), b_in) in line
            .chunks_exact_mut(NUM_CHANNELS)
            .zip(&r[row.clone()])
            .zip(&g[row.clone()])
            .zip(&b[row])
        {
            pixel[0] = f32_to_u8(*r_in);
            pixel[1] = f32_to_u8(*g_in);
            pixel[2] = f32_to_u8(*b_in);
        }
    }
}
