/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::mem::size_of;

/// Width and height of a block, the unit of projection
pub const BLOCK_SIZE: usize = 8;
/// Pixels in a single block
pub const BLOCK_PIXELS: usize = BLOCK_SIZE * BLOCK_SIZE;
/// Interleaved components per pixel, always RGB
pub const NUM_CHANNELS: usize = 3;
/// Length of a block once flattened into planar R, G, B samples
pub const BLOCK_VECTOR_LEN: usize = BLOCK_PIXELS * NUM_CHANNELS;
/// Number of basis vectors a block is projected on
pub const NUM_COEFFICIENTS: usize = 8;
/// Size of the tile range header, min then max for every coefficient
pub const RANGE_HEADER_SIZE: usize = 2 * NUM_COEFFICIENTS * size_of::<f32>();
