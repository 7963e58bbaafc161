/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use eigentile_core::bytestream::ZByteWriter;
use eigentile_core::log::trace;
use eigentile_core::options::CodecOptions;

use crate::basis::Basis;
use crate::block::block_to_vector;
use crate::constants::{BLOCK_VECTOR_LEN, NUM_COEFFICIENTS};
use crate::errors::EigenTileEncodeErrors;
use crate::layout::TileLayout;
use crate::quantize::{pack_codes, quantize_coefficients};
use crate::range::TileRange;

/// Eigen tile encoder
///
/// Turns one RGB tile into a fixed size packet. The encoder only borrows
/// its basis and holds no state between calls, so one encoder can be
/// shared by every thread of a frame.
///
/// # Example
/// - Encode a flat grey 160 by 120 tile
///
/// ```
/// use eigentile::{Basis, TileEncoder};
/// use eigentile::eigentile_core::options::CodecOptions;
/// use eigentile::EigenTileEncodeErrors;
///
/// const W: usize = 160;
/// const H: usize = 120;
///
/// fn main() -> Result<(), EigenTileEncodeErrors> {
///     let basis = Basis::default();
///     let pixels = vec![128_u8; W * H * 3];
///
///     let encoder = TileEncoder::new(&basis, CodecOptions::new(W, H))?;
///     let packet = encoder.encode(&pixels, W * 3)?;
///     assert_eq!(packet.len(), 1264);
///     Ok(())
/// }
/// ```
pub struct TileEncoder<'a> {
    basis:  &'a Basis,
    layout: TileLayout
}

impl<'a> TileEncoder<'a> {
    /// Create a new encoder
    ///
    /// # Arguments
    /// - basis: The basis blocks are projected on, the decoder must use the same
    /// - options: Tile geometry, must match the decoder's
    ///
    /// # Errors
    /// If the tile geometry is not a whole number of blocks
    pub fn new(
        basis: &'a Basis, options: CodecOptions
    ) -> Result<TileEncoder<'a>, EigenTileEncodeErrors> {
        let layout = TileLayout::from_options(&options).ok_or(
            EigenTileEncodeErrors::InvalidGeometry(
                options.get_tile_width(),
                options.get_tile_height()
            )
        )?;

        Ok(TileEncoder { basis, layout })
    }

    /// Size of every packet this encoder produces
    pub const fn packet_size(&self) -> usize {
        self.layout.packet_size()
    }

    pub const fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Encode a tile into a newly allocated packet
    ///
    /// # Arguments
    /// - pixels: Interleaved RGB pixels starting at the top left pixel of the tile
    /// - stride: Distance in bytes between the starts of two rows
    pub fn encode(&self, pixels: &[u8], stride: usize) -> Result<Vec<u8>, EigenTileEncodeErrors> {
        let mut packet = vec![0; self.packet_size()];
        self.encode_into(pixels, stride, &mut packet)?;

        Ok(packet)
    }

    /// Encode a tile into a pre-allocated buffer and error out if
    /// the buffer provided is too small
    ///
    /// # Arguments
    /// - pixels: Interleaved RGB pixels starting at the top left pixel of the tile
    /// - stride: Distance in bytes between the starts of two rows
    /// - packet: Output buffer, at least [`packet_size`](Self::packet_size) bytes
    ///
    /// # Returns
    /// - Ok(size): Bytes written, always the packet size
    /// - Err: The error encountered during encoding
    pub fn encode_into(
        &self, pixels: &[u8], stride: usize, packet: &mut [u8]
    ) -> Result<usize, EigenTileEncodeErrors> {
        let layout = &self.layout;

        if stride < layout.row_bytes() {
            return Err(EigenTileEncodeErrors::InvalidStride(
                stride,
                layout.row_bytes()
            ));
        }
        let needed = layout
            .min_buffer_len(stride)
            .ok_or(EigenTileEncodeErrors::Generic("Tile size overflows usize"))?;

        if pixels.len() < needed {
            return Err(EigenTileEncodeErrors::TooShortInput(needed, pixels.len()));
        }
        if packet.len() < layout.packet_size() {
            return Err(EigenTileEncodeErrors::TooSmallOutput(
                layout.packet_size(),
                packet.len()
            ));
        }

        // first pass, project every block and find the range
        let mut coefficients = vec![[0.0_f32; NUM_COEFFICIENTS]; layout.num_blocks()];
        let mut block = [0.0; BLOCK_VECTOR_LEN];
        let mut range = TileRange::new();

        for (index, block_coefficients) in coefficients.iter_mut().enumerate() {
            let offset = layout.block_offset(index, stride);

            block_to_vector(&pixels[offset..], stride, &mut block);
            *block_coefficients = self.basis.project(&block);
            range.expand(block_coefficients);
        }
        trace!("Tile range min: {:?}", range.min);
        trace!("Tile range max: {:?}", range.max);

        // second pass, quantize against the range
        let mut writer = ZByteWriter::new(&mut packet[..layout.packet_size()]);

        range.write(&mut writer)?;

        for block_coefficients in &coefficients {
            let codes = quantize_coefficients(block_coefficients, &range);
            writer.write_const_bytes(&pack_codes(&codes))?;
        }

        Ok(writer.position())
    }
}
