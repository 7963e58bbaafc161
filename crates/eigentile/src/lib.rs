/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Encoding and decoding fixed size eigen space tiles
//!
//! A tile is cut into 8x8 RGB blocks, every block is projected onto a
//! small set of basis vectors and the coefficients are quantized against
//! a per tile range. Every tile of a given geometry becomes a packet of the
//! same size, 1264 bytes for the default 160x120 tile, which makes the
//! codec a fit for links with a fixed, tiny payload.
//!
//! # Features
//! - Tile and frame encoding and decoding
//! - Bring your own basis, or use the built in one
//! - Multithreaded frame coding with `threads`
//!
//! # Example
//! ```
//! use eigentile::{decode_frame, encode_frame, Basis};
//! use eigentile::eigentile_core::options::CodecOptions;
//!
//! let basis = Basis::default();
//! let options = CodecOptions::new(16, 16);
//! let pixels = vec![200_u8; 32 * 16 * 3];
//!
//! let frame = encode_frame(&pixels, 32, 16, &basis, options).unwrap();
//! assert_eq!(frame.packets().len(), 2);
//!
//! let decoded = decode_frame(&frame, &basis, options).unwrap();
//! assert_eq!(decoded.len(), pixels.len());
//! ```
#![macro_use]
extern crate alloc;
extern crate core;

pub use basis::Basis;
pub use block::*;
pub use constants::*;
pub use decoder::*;
pub use eigentile_core;
pub use encoder::*;
pub use errors::*;
pub use frame::*;
pub use layout::TileLayout;
pub use quantize::*;
pub use range::TileRange;

mod basis;
mod block;
mod constants;
mod decoder;
mod encoder;
mod errors;
mod frame;
mod layout;
mod projection;
mod quantize;
mod range;
