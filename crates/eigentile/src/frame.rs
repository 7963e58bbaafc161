/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whole frame coding
//!
//! A frame is cut into a grid of tiles, each tile becomes one packet.
//! Frames whose size is not a multiple of the tile size lose the partial
//! tiles on the right and bottom edges.
use alloc::vec;
use alloc::vec::Vec;

use eigentile_core::log::{trace, warn};
use eigentile_core::options::CodecOptions;

use crate::basis::Basis;
use crate::constants::NUM_CHANNELS;
use crate::decoder::TileDecoder;
use crate::encoder::TileEncoder;
use crate::errors::{EigenTileEncodeErrors, EigenTileErrors};
use crate::layout::TileLayout;

/// Packets of a whole frame, row major over the tile grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedFrame {
    width:       usize,
    height:      usize,
    tile_width:  usize,
    tile_height: usize,
    tiles_x:     usize,
    tiles_y:     usize,
    packets:     Vec<Vec<u8>>
}

impl EncodedFrame {
    /// Rebuild a frame from packets received over a link
    ///
    /// # Arguments
    /// - width, height: Dimensions of the source frame
    /// - options: Tile geometry the packets were encoded with
    /// - packets: One packet per tile, row major over the tile grid
    ///
    /// # Errors
    /// - Tile geometry not a whole number of blocks
    /// - Frame smaller than a single tile
    /// - Packet count not matching the tile grid
    /// - A packet whose size differs from the geometry's packet size
    pub fn from_packets(
        width: usize, height: usize, options: &CodecOptions, packets: Vec<Vec<u8>>
    ) -> Result<EncodedFrame, EigenTileErrors> {
        let (tile_width, tile_height) = (options.get_tile_width(), options.get_tile_height());

        let layout = TileLayout::from_options(options)
            .ok_or(EigenTileErrors::InvalidGeometry(tile_width, tile_height))?;

        let tiles_x = width / tile_width;
        let tiles_y = height / tile_height;

        if tiles_x == 0 || tiles_y == 0 {
            return Err(EigenTileErrors::GenericStatic(
                "Frame is smaller than a single tile"
            ));
        }
        if packets.len() != tiles_x * tiles_y {
            return Err(EigenTileErrors::Generic(format!(
                "Expected {} packets for a {}x{} tile grid, found {}",
                tiles_x * tiles_y,
                tiles_x,
                tiles_y,
                packets.len()
            )));
        }
        if let Some(packet) = packets.iter().find(|x| x.len() != layout.packet_size()) {
            return Err(EigenTileErrors::WrongPacketSize(
                layout.packet_size(),
                packet.len()
            ));
        }
        Ok(EncodedFrame {
            width,
            height,
            tile_width,
            tile_height,
            tiles_x,
            tiles_y,
            packets
        })
    }

    /// Dimensions of the source frame
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of tiles across and down
    pub const fn tiles(&self) -> (usize, usize) {
        (self.tiles_x, self.tiles_y)
    }

    /// Dimensions of the decoded frame, the source without partial edge tiles
    pub const fn output_dimensions(&self) -> (usize, usize) {
        (self.tiles_x * self.tile_width, self.tiles_y * self.tile_height)
    }

    pub fn packets(&self) -> &[Vec<u8>] {
        &self.packets
    }

    /// Total size of every packet in the frame
    pub fn total_bytes(&self) -> usize {
        self.packets.iter().map(Vec::len).sum()
    }
}

/// Number of tile rows each worker handles
fn rows_per_worker(tiles_y: usize, options: &CodecOptions) -> usize {
    #[cfg(feature = "threads")]
    {
        if options.get_use_threads() {
            let workers = std::thread::available_parallelism()
                .map(|x| x.get())
                .unwrap_or(1);
            return tiles_y.div_ceil(workers).max(1);
        }
    }
    let _ = options;
    tiles_y.max(1)
}

/// Encode an interleaved RGB frame into one packet per tile
///
/// # Arguments
/// - pixels: `width * height * 3` bytes, rows packed back to back
/// - width, height: Frame dimensions in pixels
/// - basis: Basis every tile is projected on
/// - options: Tile geometry
///
/// # Errors
/// - Pixel buffer too short for the frame
/// - Frame smaller than a single tile
/// - Tile geometry not a whole number of blocks
pub fn encode_frame(
    pixels: &[u8], width: usize, height: usize, basis: &Basis, options: CodecOptions
) -> Result<EncodedFrame, EigenTileEncodeErrors> {
    let encoder = TileEncoder::new(basis, options)?;

    let (tile_width, tile_height) = (options.get_tile_width(), options.get_tile_height());

    let expected = width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(NUM_CHANNELS))
        .ok_or(EigenTileEncodeErrors::Generic("Frame size overflows usize"))?;

    if pixels.len() < expected {
        return Err(EigenTileEncodeErrors::TooShortInput(expected, pixels.len()));
    }
    let tiles_x = width / tile_width;
    let tiles_y = height / tile_height;

    if width % tile_width != 0 || height % tile_height != 0 {
        warn!(
            "Image size ({}x{}) is not divisible into tile size ({}x{}), edge pixels are dropped",
            width,
            height,
            tile_width,
            tile_height
        );
    }
    if tiles_x == 0 || tiles_y == 0 {
        return Err(EigenTileEncodeErrors::FrameTooSmall(width, height));
    }
    trace!("Encoding {}x{} tiles", tiles_x, tiles_y);

    let stride = width * NUM_CHANNELS;
    let band = tile_height * stride;
    let rows = rows_per_worker(tiles_y, &options);

    let mut packets = vec![Vec::new(); tiles_x * tiles_y];

    let encode_rows = |first_row: usize, packets: &mut [Vec<u8>]| -> Result<(), EigenTileEncodeErrors> {
        for (row, row_packets) in packets.chunks_exact_mut(tiles_x).enumerate() {
            let band_start = (first_row + row) * band;

            for (tile_x, packet) in row_packets.iter_mut().enumerate() {
                let start = band_start + tile_x * tile_width * NUM_CHANNELS;
                *packet = encoder.encode(&pixels[start..], stride)?;
            }
        }
        Ok(())
    };

    #[cfg(feature = "threads")]
    {
        if rows < tiles_y {
            trace!("Encoding tiles in multithreaded mode");

            std::thread::scope(|s| {
                let workers: Vec<_> = packets
                    .chunks_mut(rows * tiles_x)
                    .enumerate()
                    .map(|(i, chunk)| {
                        let encode_rows = &encode_rows;
                        s.spawn(move || encode_rows(i * rows, chunk))
                    })
                    .collect();

                workers
                    .into_iter()
                    .map(|x| {
                        x.join().unwrap_or(Err(EigenTileEncodeErrors::Generic(
                            "Tile encoding thread panicked"
                        )))
                    })
                    .collect::<Result<Vec<()>, EigenTileEncodeErrors>>()
            })?;

            return Ok(EncodedFrame {
                width,
                height,
                tile_width,
                tile_height,
                tiles_x,
                tiles_y,
                packets
            });
        }
    }
    trace!("Encoding tiles in single threaded mode");
    encode_rows(0, &mut packets)?;

    Ok(EncodedFrame {
        width,
        height,
        tile_width,
        tile_height,
        tiles_x,
        tiles_y,
        packets
    })
}

/// Decode every packet of a frame into one interleaved RGB image
///
/// The output is `output_dimensions()` of the frame, rows packed back to back.
///
/// # Errors
/// - `options` describe a different tile than the frame was encoded with
/// - A packet fails to decode
pub fn decode_frame(
    frame: &EncodedFrame, basis: &Basis, options: CodecOptions
) -> Result<Vec<u8>, EigenTileErrors> {
    let decoder = TileDecoder::new(basis, options)?;

    let (tile_width, tile_height) = (options.get_tile_width(), options.get_tile_height());

    if (tile_width, tile_height) != (frame.tile_width, frame.tile_height) {
        return Err(EigenTileErrors::Generic(format!(
            "Frame was encoded with {}x{} tiles, options describe {}x{} tiles",
            frame.tile_width, frame.tile_height, tile_width, tile_height
        )));
    }
    if frame.packets.len() != frame.tiles_x * frame.tiles_y {
        return Err(EigenTileErrors::GenericStatic(
            "Packet count does not match the tile grid"
        ));
    }
    let (out_width, out_height) = frame.output_dimensions();
    let stride = out_width * NUM_CHANNELS;
    let band = tile_height * stride;
    let tiles_x = frame.tiles_x;

    let mut output = vec![0; stride * out_height];

    let decode_rows = |packets: &[Vec<u8>], bands: &mut [u8]| -> Result<(), EigenTileErrors> {
        for (row_packets, band_pixels) in packets.chunks_exact(tiles_x).zip(bands.chunks_exact_mut(band)) {
            for (tile_x, packet) in row_packets.iter().enumerate() {
                let start = tile_x * tile_width * NUM_CHANNELS;
                decoder.decode_into(packet, &mut band_pixels[start..], stride)?;
            }
        }
        Ok(())
    };

    let rows = rows_per_worker(frame.tiles_y, &options);

    #[cfg(feature = "threads")]
    {
        if rows < frame.tiles_y {
            trace!("Decoding tiles in multithreaded mode");

            std::thread::scope(|s| {
                let workers: Vec<_> = frame
                    .packets
                    .chunks(rows * tiles_x)
                    .zip(output.chunks_mut(rows * band))
                    .map(|(packets, bands)| {
                        let decode_rows = &decode_rows;
                        s.spawn(move || decode_rows(packets, bands))
                    })
                    .collect();

                workers
                    .into_iter()
                    .map(|x| {
                        x.join().unwrap_or(Err(EigenTileErrors::GenericStatic(
                            "Tile decoding thread panicked"
                        )))
                    })
                    .collect::<Result<Vec<()>, EigenTileErrors>>()
            })?;

            return Ok(output);
        }
    }
    trace!("Decoding tiles in single threaded mode");
    decode_rows(&frame.packets, &mut output)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use eigentile_core::options::CodecOptions;

    use crate::frame::{decode_frame, encode_frame, EncodedFrame};
    use crate::{Basis, EigenTileEncodeErrors, EigenTileErrors, TileDecoder};

    fn test_frame(width: usize, height: usize) -> Vec<u8> {
        let mut pixels = vec![0; width * height * 3];

        for (i, pixel) in pixels.chunks_exact_mut(3).enumerate() {
            let (x, y) = (i % width, i / width);
            pixel.copy_from_slice(&[(x * 3) as u8, (y * 5) as u8, ((x + y) * 2) as u8]);
        }
        pixels
    }

    #[test]
    fn partial_tiles_are_dropped() {
        let basis = Basis::default();
        let options = CodecOptions::new(16, 8);
        let pixels = test_frame(40, 20);

        let frame = encode_frame(&pixels, 40, 20, &basis, options).unwrap();
        assert_eq!(frame.tiles(), (2, 2));
        assert_eq!(frame.output_dimensions(), (32, 16));
        assert_eq!(frame.total_bytes(), 4 * (64 + 2 * 4));

        let decoded = decode_frame(&frame, &basis, options).unwrap();
        assert_eq!(decoded.len(), 32 * 16 * 3);
    }

    #[test]
    fn frame_matches_tile_by_tile_decoding() {
        let basis = Basis::default();
        let options = CodecOptions::new(8, 8).set_use_threads(false);
        let pixels = test_frame(16, 8);

        let frame = encode_frame(&pixels, 16, 8, &basis, options).unwrap();
        let decoded = decode_frame(&frame, &basis, options).unwrap();

        let decoder = TileDecoder::new(&basis, options).unwrap();
        let right = decoder.decode(&frame.packets()[1]).unwrap();

        for y in 0..8 {
            assert_eq!(&decoded[y * 48 + 24..y * 48 + 48], &right[y * 24..(y + 1) * 24]);
        }
    }

    #[test]
    fn threaded_and_serial_agree() {
        let basis = Basis::default();
        let options = CodecOptions::new(16, 16);
        let pixels = test_frame(64, 160);

        let threaded = encode_frame(&pixels, 64, 160, &basis, options).unwrap();
        let serial = encode_frame(&pixels, 64, 160, &basis, options.set_use_threads(false)).unwrap();
        assert_eq!(threaded, serial);

        let a = decode_frame(&threaded, &basis, options).unwrap();
        let b = decode_frame(&serial, &basis, options.set_use_threads(false)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn errors() {
        let basis = Basis::default();
        let options = CodecOptions::new(16, 16);

        assert!(matches!(
            encode_frame(&[0; 8 * 8 * 3], 8, 8, &basis, options),
            Err(EigenTileEncodeErrors::FrameTooSmall(8, 8))
        ));
        assert!(matches!(
            encode_frame(&[0; 10], 16, 16, &basis, options),
            Err(EigenTileEncodeErrors::TooShortInput(768, 10))
        ));

        let frame = encode_frame(&[0; 16 * 16 * 3], 16, 16, &basis, options).unwrap();
        assert!(decode_frame(&frame, &basis, CodecOptions::new(8, 8)).is_err());
    }

    #[test]
    fn received_packets_decode_like_the_sent_frame() {
        let basis = Basis::default();
        let options = CodecOptions::new(16, 8);
        let pixels = test_frame(40, 20);

        let sent = encode_frame(&pixels, 40, 20, &basis, options).unwrap();
        let received =
            EncodedFrame::from_packets(40, 20, &options, sent.packets().to_vec()).unwrap();

        assert_eq!(received, sent);
        assert_eq!(
            decode_frame(&received, &basis, options).unwrap(),
            decode_frame(&sent, &basis, options).unwrap()
        );
    }

    #[test]
    fn received_packets_are_validated() {
        let options = CodecOptions::new(16, 8);
        let packet = vec![0_u8; 64 + 2 * 4];

        assert!(matches!(
            EncodedFrame::from_packets(40, 20, &options, vec![packet.clone(); 3]),
            Err(EigenTileErrors::Generic(_))
        ));
        let mut packets = vec![packet.clone(); 4];
        packets[2].pop();
        assert!(matches!(
            EncodedFrame::from_packets(40, 20, &options, packets),
            Err(EigenTileErrors::WrongPacketSize(72, 71))
        ));
        assert!(matches!(
            EncodedFrame::from_packets(8, 8, &options, vec![]),
            Err(EigenTileErrors::GenericStatic(_))
        ));
        assert!(matches!(
            EncodedFrame::from_packets(40, 20, &CodecOptions::new(12, 8), vec![packet; 4]),
            Err(EigenTileErrors::InvalidGeometry(12, 8))
        ));
    }
}
