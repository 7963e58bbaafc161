/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Deterministic noisy RGB frame, noise keeps every coefficient range open
pub fn bench_frame(width: usize, height: usize) -> Vec<u8> {
    let mut state = 0x2545_F491_u32;

    (0..width * height * 3)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            // smooth ramp plus a little noise
            ((((i / 3) % width) / 2 % 224) as u32 + (state & 31)) as u8
        })
        .collect()
}
