/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use eigentile::{decode_frame, encode_frame, Basis};
use eigentile_core::options::CodecOptions;

use crate::{gradient_frame, hash, hash_frame, mean_abs_error, noise_frame};

#[test]
fn gradient_frame_round_trip() {
    let basis = Basis::default();
    let options = CodecOptions::default();
    let pixels = gradient_frame(320, 240);

    let frame = encode_frame(&pixels, 320, 240, &basis, options).unwrap();
    assert_eq!(frame.tiles(), (2, 2));
    assert_eq!(frame.total_bytes(), 4 * 1264);

    let decoded = decode_frame(&frame, &basis, options).unwrap();
    let mae = mean_abs_error(&pixels, &decoded);

    assert!(mae <= 12.0, "mean absolute error {mae} too large");
}

#[test]
fn threads_do_not_change_output() {
    let basis = Basis::default();
    let options = CodecOptions::new(32, 16);
    let pixels = noise_frame(256, 256, 7);

    let threaded = encode_frame(&pixels, 256, 256, &basis, options).unwrap();
    let serial = encode_frame(&pixels, 256, 256, &basis, options.set_use_threads(false)).unwrap();

    assert_eq!(hash_frame(&threaded), hash_frame(&serial));

    let a = decode_frame(&threaded, &basis, options).unwrap();
    let b = decode_frame(&serial, &basis, options.set_use_threads(false)).unwrap();

    assert_eq!(hash(&a), hash(&b));
}

#[test]
fn encoding_is_deterministic() {
    let basis = Basis::default();
    let options = CodecOptions::new(16, 16);
    let pixels = noise_frame(64, 48, 99);

    let first = encode_frame(&pixels, 64, 48, &basis, options).unwrap();
    let second = encode_frame(&pixels, 64, 48, &basis, options).unwrap();

    assert_eq!(hash_frame(&first), hash_frame(&second));
}

#[test]
fn uneven_frame_drops_edge_tiles() {
    let basis = Basis::default();
    let options = CodecOptions::default();
    let pixels = gradient_frame(330, 250);

    let frame = encode_frame(&pixels, 330, 250, &basis, options).unwrap();
    assert_eq!(frame.dimensions(), (330, 250));
    assert_eq!(frame.output_dimensions(), (320, 240));

    let decoded = decode_frame(&frame, &basis, options).unwrap();
    assert_eq!(decoded.len(), 320 * 240 * 3);

    // compare against the kept region of the source
    let kept: Vec<u8> = pixels
        .chunks_exact(330 * 3)
        .take(240)
        .flat_map(|row| row[..320 * 3].iter().copied())
        .collect();

    assert!(mean_abs_error(&kept, &decoded) <= 12.0);
}
