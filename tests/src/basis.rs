/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use eigentile::{decode_frame, encode_frame, Basis, TileDecoder, TileEncoder};
use eigentile_core::options::CodecOptions;

use crate::{gradient_frame, load_basis, mean_abs_error};

#[test]
fn planar_basis_fixture_loads() {
    let entry = load_basis("planar_dc.json");

    assert_eq!(entry.mean.len(), 192);
    assert_eq!(entry.vectors.len(), 8);

    let basis = entry.to_basis();
    for (i, a) in basis.vectors().iter().enumerate() {
        for (j, b) in basis.vectors().iter().enumerate() {
            let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((dot - expected).abs() < 1e-4, "<v{i}, v{j}> = {dot}");
        }
    }
}

#[test]
fn planar_basis_codes_flat_colour_tile() {
    let basis = load_basis("planar_dc.json").to_basis();
    let options = CodecOptions::default();

    let pixels: Vec<u8> = [200_u8, 50, 100].repeat(160 * 120);

    let packet = TileEncoder::new(&basis, options)
        .unwrap()
        .encode(&pixels, 160 * 3)
        .unwrap();
    assert_eq!(packet.len(), 1264);

    let decoded = TileDecoder::new(&basis, options)
        .unwrap()
        .decode(&packet)
        .unwrap();

    for (a, b) in pixels.iter().zip(&decoded) {
        assert!(a.abs_diff(*b) <= 1, "{a} vs {b}");
    }
}

#[test]
fn injected_basis_changes_packets_not_geometry() {
    let planar = load_basis("planar_dc.json").to_basis();
    let builtin = Basis::default();
    let options = CodecOptions::new(64, 64);
    let pixels = gradient_frame(128, 128);

    let a = encode_frame(&pixels, 128, 128, &planar, options).unwrap();
    let b = encode_frame(&pixels, 128, 128, &builtin, options).unwrap();

    assert_eq!(a.total_bytes(), b.total_bytes());
    assert_ne!(a.packets(), b.packets());

    for (frame, basis) in [(&a, &planar), (&b, &builtin)] {
        let decoded = decode_frame(frame, basis, options).unwrap();
        let mae = mean_abs_error(&pixels, &decoded);
        assert!(mae <= 12.0, "mean absolute error {mae} too large");
    }
}
