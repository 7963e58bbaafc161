/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Tile codec options
//!
//! This module exposes a struct for which the tile encoder and decoder
//! get shared options.
//!
//! Encoder and decoder of a stream must agree on the tile geometry,
//! since it is not stored in the packets, so the same `CodecOptions`
//! should be used on both ends.

/// Default tile width, in pixels
pub const DEFAULT_TILE_WIDTH: usize = 160;
/// Default tile height, in pixels
pub const DEFAULT_TILE_HEIGHT: usize = 120;

/// Options shared by the tile encoder and decoder
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Width of a single tile in pixels
    ///
    /// Must be a non-zero multiple of the block size
    ///
    /// - Default value: 160
    tile_width:  usize,
    /// Height of a single tile in pixels
    ///
    /// Must be a non-zero multiple of the block size
    ///
    /// - Default value: 120
    tile_height: usize,
    /// Treat some warnings as errors
    ///
    /// When set to false, suspicious packet headers
    /// are logged via the log crate and decoded anyway.
    ///
    /// When set to true, this will return an `Err` instead.
    ///
    /// - Default value: false
    strict_mode: bool,
    /// Whether frame level routines may spread tiles over threads
    ///
    /// Only respected when the `threads` feature is enabled
    ///
    /// - Default value: true
    use_threads: bool
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            tile_width:  DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            strict_mode: false,
            use_threads: true
        }
    }
}

impl CodecOptions {
    /// Create options for tiles of `tile_width` x `tile_height` pixels
    ///
    /// Other options take their default values
    pub fn new(tile_width: usize, tile_height: usize) -> CodecOptions {
        CodecOptions::default()
            .set_tile_width(tile_width)
            .set_tile_height(tile_height)
    }

    /// Get the configured tile width
    pub const fn get_tile_width(&self) -> usize {
        self.tile_width
    }

    /// Get the configured tile height
    pub const fn get_tile_height(&self) -> usize {
        self.tile_height
    }

    /// Return true if the decoder should reject suspicious
    /// packet headers instead of warning about them
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Return true if frame level routines may use threads
    pub const fn get_use_threads(&self) -> bool {
        self.use_threads
    }

    /// Set the tile width
    ///
    /// # Arguments
    ///
    /// * `width`: Tile width in pixels
    ///
    /// returns: CodecOptions
    pub fn set_tile_width(mut self, width: usize) -> Self {
        self.tile_width = width;
        self
    }

    /// Set the tile height
    ///
    /// # Arguments
    ///
    /// * `height`: Tile height in pixels
    ///
    /// returns: CodecOptions
    pub fn set_tile_height(mut self, height: usize) -> Self {
        self.tile_height = height;
        self
    }

    /// Set whether the decoder rejects suspicious packet headers
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Set whether frame level routines may use threads
    pub fn set_use_threads(mut self, yes: bool) -> Self {
        self.use_threads = yes;
        self
    }
}
