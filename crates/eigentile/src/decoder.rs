/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use eigentile_core::bytestream::ZByteReader;
use eigentile_core::log::{trace, warn};
use eigentile_core::options::CodecOptions;

use crate::basis::Basis;
use crate::block::vector_to_block;
use crate::constants::{BLOCK_VECTOR_LEN, RANGE_HEADER_SIZE};
use crate::errors::EigenTileErrors;
use crate::layout::TileLayout;
use crate::quantize::{dequantize_coefficients, unpack_codes, BLOCK_RECORD_SIZE};
use crate::range::TileRange;

/// Eigen tile decoder
///
/// The decoder is initialized by calling `new` with the same basis and
/// options the packets were encoded with, and then
/// [`decode`] or [`decode_into`] is called once per packet.
///
/// Packets carry no geometry, a packet whose length differs from
/// [`packet_size`] is rejected.
///
/// [`decode`]:TileDecoder::decode
/// [`decode_into`]:TileDecoder::decode_into
/// [`packet_size`]:TileDecoder::packet_size
pub struct TileDecoder<'a> {
    basis:   &'a Basis,
    layout:  TileLayout,
    options: CodecOptions
}

impl<'a> TileDecoder<'a> {
    /// Create a new tile decoder
    ///
    /// # Arguments
    /// - basis: The basis the packets were encoded with
    /// - options: Tile geometry and strictness
    ///
    /// # Example
    ///
    /// ```
    /// use eigentile::{Basis, TileDecoder};
    /// use eigentile::eigentile_core::options::CodecOptions;
    ///
    /// let basis = Basis::default();
    /// let decoder = TileDecoder::new(&basis, CodecOptions::default()).unwrap();
    /// assert_eq!(decoder.packet_size(), 1264);
    /// ```
    pub fn new(basis: &'a Basis, options: CodecOptions) -> Result<TileDecoder<'a>, EigenTileErrors> {
        let layout = TileLayout::from_options(&options).ok_or(EigenTileErrors::InvalidGeometry(
            options.get_tile_width(),
            options.get_tile_height()
        ))?;

        Ok(TileDecoder {
            basis,
            layout,
            options
        })
    }

    /// Size of the packets this decoder accepts
    pub const fn packet_size(&self) -> usize {
        self.layout.packet_size()
    }

    pub const fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Return the number of bytes required to hold a decoded tile
    /// with rows packed back to back
    pub const fn output_buffer_size(&self) -> usize {
        self.layout.tile_bytes()
    }

    /// Read the range header of a packet
    ///
    /// # Errors
    /// - If the packet size doesn't match the geometry
    /// - In strict mode, if the header holds non finite values
    pub fn read_range(&self, packet: &[u8]) -> Result<TileRange, EigenTileErrors> {
        if packet.len() != self.packet_size() {
            return Err(EigenTileErrors::WrongPacketSize(
                self.packet_size(),
                packet.len()
            ));
        }
        let range = TileRange::read(&mut ZByteReader::new(packet))?;

        if !range.is_finite() {
            if self.options.get_strict_mode() {
                return Err(EigenTileErrors::NonFiniteRange);
            }
            warn!("Packet range header contains non finite values, decoding anyway");
        }
        Ok(range)
    }

    /// Decode a packet, returning the tile with rows packed back to back
    ///
    /// # Returns
    /// - On success: `tile_width * tile_height * 3` bytes of RGB pixels
    /// - On error: The reason the packet could not be decoded
    pub fn decode(&self, packet: &[u8]) -> Result<Vec<u8>, EigenTileErrors> {
        let mut output = vec![0; self.output_buffer_size()];

        self.decode_into(packet, &mut output, self.layout.row_bytes())?;

        Ok(output)
    }

    /// Decode a packet into a caller owned buffer
    ///
    /// Only the pixels of the tile are written, bytes between the end of a
    /// tile row and the next stride are left as they are.
    ///
    /// # Arguments
    /// - packet: Exactly [`packet_size`](Self::packet_size) bytes
    /// - pixels: Buffer starting at the top left pixel of the tile
    /// - stride: Distance in bytes between the starts of two rows
    pub fn decode_into(
        &self, packet: &[u8], pixels: &mut [u8], stride: usize
    ) -> Result<(), EigenTileErrors> {
        let layout = &self.layout;

        if stride < layout.row_bytes() {
            return Err(EigenTileErrors::InvalidStride(stride, layout.row_bytes()));
        }
        let needed = layout
            .min_buffer_len(stride)
            .ok_or(EigenTileErrors::GenericStatic("Tile size overflows usize"))?;

        if pixels.len() < needed {
            return Err(EigenTileErrors::TooSmallOutput(needed, pixels.len()));
        }

        let range = self.read_range(packet)?;
        trace!("Decoding {} blocks", layout.num_blocks());

        let mut block = [0.0; BLOCK_VECTOR_LEN];

        for (index, record) in packet[RANGE_HEADER_SIZE..]
            .chunks_exact(BLOCK_RECORD_SIZE)
            .enumerate()
        {
            let coefficients = dequantize_coefficients(&unpack_codes(record), &range);
            self.basis.reconstruct(&coefficients, &mut block);

            let offset = layout.block_offset(index, stride);
            vector_to_block(&block, &mut pixels[offset..], stride);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use eigentile_core::options::CodecOptions;

    use crate::{Basis, EigenTileErrors, TileDecoder, TileEncoder};

    fn gradient_tile(width: usize, height: usize) -> Vec<u8> {
        let mut pixels = vec![0; width * height * 3];

        for (i, pixel) in pixels.chunks_exact_mut(3).enumerate() {
            let (x, y) = (i % width, i / width);
            let v = (64 + x / 2 + y / 2) as u8;
            pixel.copy_from_slice(&[v, v, v]);
        }
        pixels
    }

    #[test]
    fn flat_grey_tile_survives() {
        let basis = Basis::default();
        let options = CodecOptions::default();
        let pixels = vec![128_u8; 160 * 120 * 3];

        let packet = TileEncoder::new(&basis, options)
            .unwrap()
            .encode(&pixels, 160 * 3)
            .unwrap();
        assert_eq!(packet.len(), 1264);

        let decoded = TileDecoder::new(&basis, options)
            .unwrap()
            .decode(&packet)
            .unwrap();

        assert_eq!(decoded.len(), pixels.len());
        assert!(decoded.iter().all(|x| x.abs_diff(128) <= 1));
    }

    #[test]
    fn gradient_tile_error_is_small() {
        let basis = Basis::default();
        let options = CodecOptions::default();
        let pixels = gradient_tile(160, 120);

        let packet = TileEncoder::new(&basis, options)
            .unwrap()
            .encode(&pixels, 160 * 3)
            .unwrap();
        let decoded = TileDecoder::new(&basis, options)
            .unwrap()
            .decode(&packet)
            .unwrap();

        let total: u64 = pixels
            .iter()
            .zip(&decoded)
            .map(|(a, b)| u64::from(a.abs_diff(*b)))
            .sum();
        let mae = total as f64 / pixels.len() as f64;

        assert!(mae <= 12.0, "mean absolute error {mae} too large");
    }

    #[test]
    fn only_exact_packet_sizes_decode() {
        let basis = Basis::default();
        let decoder = TileDecoder::new(&basis, CodecOptions::default()).unwrap();

        for size in [0, 63, 1263, 1265, 2528] {
            let packet = vec![0; size];
            assert!(matches!(
                decoder.decode(&packet),
                Err(EigenTileErrors::WrongPacketSize(1264, found)) if found == size
            ));
        }
        assert!(decoder.decode(&[0; 1264]).is_ok());
    }

    #[test]
    fn strided_output_leaves_padding_alone() {
        let basis = Basis::default();
        let options = CodecOptions::new(16, 16);
        let pixels = gradient_tile(16, 16);

        let packet = TileEncoder::new(&basis, options)
            .unwrap()
            .encode(&pixels, 48)
            .unwrap();
        let decoder = TileDecoder::new(&basis, options).unwrap();

        let stride = 48 + 7;
        let mut canvas = vec![0xEE; stride * 16];
        decoder.decode_into(&packet, &mut canvas, stride).unwrap();

        let packed = decoder.decode(&packet).unwrap();
        for y in 0..16 {
            assert_eq!(&canvas[y * stride..y * stride + 48], &packed[y * 48..(y + 1) * 48]);
            assert!(canvas[y * stride + 48..(y + 1) * stride]
                .iter()
                .all(|x| *x == 0xEE));
        }
    }

    #[test]
    fn non_finite_header_in_strict_mode() {
        let basis = Basis::default();
        let mut packet = vec![0_u8; 64 + 4];
        packet[0..4].copy_from_slice(&f32::NAN.to_le_bytes());

        let lenient = TileDecoder::new(&basis, CodecOptions::new(8, 8)).unwrap();
        assert!(lenient.decode(&packet).is_ok());

        let strict =
            TileDecoder::new(&basis, CodecOptions::new(8, 8).set_strict_mode(true)).unwrap();
        assert!(matches!(
            strict.decode(&packet),
            Err(EigenTileErrors::NonFiniteRange)
        ));
    }
}
