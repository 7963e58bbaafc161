/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use eigentile_core::options::CodecOptions;

use crate::constants::{BLOCK_SIZE, NUM_CHANNELS, RANGE_HEADER_SIZE};
use crate::quantize::BLOCK_RECORD_SIZE;

/// Validated tile geometry
///
/// Every size the codec works with is derived from here, nothing about
/// the default 160x120 tile is hard coded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileLayout {
    tile_width:  usize,
    tile_height: usize,
    blocks_x:    usize,
    blocks_y:    usize,
    packet_size: usize
}

impl TileLayout {
    /// Derive the layout from codec options
    ///
    /// Returns `None` if either tile dimension is zero or not a multiple
    /// of the block size, or if the packet size overflows.
    pub fn from_options(options: &CodecOptions) -> Option<TileLayout> {
        let tile_width = options.get_tile_width();
        let tile_height = options.get_tile_height();

        if tile_width == 0
            || tile_height == 0
            || tile_width % BLOCK_SIZE != 0
            || tile_height % BLOCK_SIZE != 0
        {
            return None;
        }
        let blocks_x = tile_width / BLOCK_SIZE;
        let blocks_y = tile_height / BLOCK_SIZE;

        let packet_size = blocks_x
            .checked_mul(blocks_y)?
            .checked_mul(BLOCK_RECORD_SIZE)?
            .checked_add(RANGE_HEADER_SIZE)?;

        // tile buffers must be addressable too
        tile_width
            .checked_mul(tile_height)?
            .checked_mul(NUM_CHANNELS)?;

        Some(TileLayout {
            tile_width,
            tile_height,
            blocks_x,
            blocks_y,
            packet_size
        })
    }

    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }

    pub const fn tile_height(&self) -> usize {
        self.tile_height
    }

    /// Blocks in a tile row
    pub const fn blocks_x(&self) -> usize {
        self.blocks_x
    }

    /// Block rows in a tile
    pub const fn blocks_y(&self) -> usize {
        self.blocks_y
    }

    pub const fn num_blocks(&self) -> usize {
        self.blocks_x * self.blocks_y
    }

    /// Exact size of a packet for this geometry
    pub const fn packet_size(&self) -> usize {
        self.packet_size
    }

    /// Bytes in one row of a tile
    pub const fn row_bytes(&self) -> usize {
        self.tile_width * NUM_CHANNELS
    }

    /// Bytes of a contiguous tile
    pub const fn tile_bytes(&self) -> usize {
        self.row_bytes() * self.tile_height
    }

    /// Smallest buffer holding a whole tile when rows are `stride` bytes apart
    ///
    /// The last row need not be padded out to the full stride.
    pub fn min_buffer_len(&self, stride: usize) -> Option<usize> {
        (self.tile_height - 1)
            .checked_mul(stride)?
            .checked_add(self.row_bytes())
    }

    /// Offset of the top left pixel of the `index`-th block, blocks
    /// counted row major
    #[inline]
    pub const fn block_offset(&self, index: usize, stride: usize) -> usize {
        let block_x = index % self.blocks_x;
        let block_y = index / self.blocks_x;

        block_y * BLOCK_SIZE * stride + block_x * BLOCK_SIZE * NUM_CHANNELS
    }
}
