/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use eigentile::eigentile_core::options::CodecOptions;
use eigentile::{decode_frame, encode_frame, Basis, TileDecoder, TileEncoder};
use eigentile_benches::bench_frame;

fn bench_tile(c: &mut Criterion) {
    let basis = Basis::default();
    let options = CodecOptions::default();
    let pixels = bench_frame(160, 120);

    let encoder = TileEncoder::new(&basis, options).unwrap();
    let decoder = TileDecoder::new(&basis, options).unwrap();
    let packet = encoder.encode(&pixels, 160 * 3).unwrap();

    let mut group = c.benchmark_group("eigentile: 160x120 tile");

    group.throughput(Throughput::Bytes(pixels.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| black_box(encoder.encode(black_box(&pixels), 160 * 3).unwrap()))
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(decoder.decode(black_box(&packet)).unwrap()))
    });
}

fn bench_frame_threads(c: &mut Criterion) {
    let basis = Basis::default();
    let (width, height) = (1280, 960);
    let pixels = bench_frame(width, height);

    let mut group = c.benchmark_group("eigentile: 1280x960 frame");

    group.throughput(Throughput::Bytes(pixels.len() as u64));

    for threads in [false, true] {
        let options = CodecOptions::default().set_use_threads(threads);
        let frame = encode_frame(&pixels, width, height, &basis, options).unwrap();
        let name = if threads { "threaded" } else { "serial" };

        group.bench_function(format!("encode {name}"), |b| {
            b.iter(|| black_box(encode_frame(&pixels, width, height, &basis, options).unwrap()))
        });

        group.bench_function(format!("decode {name}"), |b| {
            b.iter(|| black_box(decode_frame(&frame, &basis, options).unwrap()))
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_tile,bench_frame_threads);

criterion_main!(benches);
