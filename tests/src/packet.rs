/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use eigentile::{
    unpack_codes, Basis, TileDecoder, TileEncoder, BLOCK_RECORD_SIZE, COEFFICIENT_FIELDS,
    NUM_COEFFICIENTS, RANGE_HEADER_SIZE
};
use eigentile_core::options::CodecOptions;

use crate::noise_frame;

fn header_floats(packet: &[u8]) -> Vec<f32> {
    packet[..RANGE_HEADER_SIZE]
        .chunks_exact(4)
        .map(|x| f32::from_le_bytes([x[0], x[1], x[2], x[3]]))
        .collect()
}

#[test]
fn header_is_little_endian_min_then_max() {
    let basis = Basis::default();
    let options = CodecOptions::default();
    let pixels = noise_frame(160, 120, 3);

    let encoder = TileEncoder::new(&basis, options).unwrap();
    let packet = encoder.encode(&pixels, 160 * 3).unwrap();

    let floats = header_floats(&packet);
    let (min, max) = floats.split_at(NUM_COEFFICIENTS);

    for i in 0..NUM_COEFFICIENTS {
        assert!(min[i].is_finite() && max[i].is_finite());
        assert!(min[i] <= max[i], "coefficient {i}: {} > {}", min[i], max[i]);
    }

    let decoder = TileDecoder::new(&basis, options).unwrap();
    let range = decoder.read_range(&packet).unwrap();
    assert_eq!(&range.min[..], min);
    assert_eq!(&range.max[..], max);
}

#[test]
fn range_extremes_use_first_and_last_code() {
    let basis = Basis::default();
    let options = CodecOptions::default();
    let pixels = noise_frame(160, 120, 11);

    let packet = TileEncoder::new(&basis, options)
        .unwrap()
        .encode(&pixels, 160 * 3)
        .unwrap();

    let records: Vec<_> = packet[RANGE_HEADER_SIZE..]
        .chunks_exact(BLOCK_RECORD_SIZE)
        .map(unpack_codes)
        .collect();
    assert_eq!(records.len(), 300);

    for (i, field) in COEFFICIENT_FIELDS.iter().enumerate() {
        let codes: Vec<u32> = records.iter().map(|x| x[i]).collect();

        assert_eq!(codes.iter().min(), Some(&0), "coefficient {i}");
        assert_eq!(codes.iter().max(), Some(&field.levels()), "coefficient {i}");
    }
}

#[test]
fn packet_size_is_fixed_per_geometry() {
    let basis = Basis::default();

    for seed in 0..4 {
        let pixels = noise_frame(160, 120, seed);
        let packet = TileEncoder::new(&basis, CodecOptions::default())
            .unwrap()
            .encode(&pixels, 160 * 3)
            .unwrap();
        assert_eq!(packet.len(), 1264);
    }
    let pixels = noise_frame(48, 24, 0);
    let packet = TileEncoder::new(&basis, CodecOptions::new(48, 24))
        .unwrap()
        .encode(&pixels, 48 * 3)
        .unwrap();
    assert_eq!(packet.len(), 64 + 4 * 6 * 3);
}
