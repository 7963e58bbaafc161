/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Forward and inverse projection between block space and eigen space
use crate::basis::Basis;
use crate::constants::{BLOCK_VECTOR_LEN, NUM_COEFFICIENTS};

impl Basis {
    /// Project a block vector on the basis
    ///
    /// Each coefficient is the inner product of the mean centred block
    /// with one eigen vector.
    pub fn project(&self, vector: &[f32; BLOCK_VECTOR_LEN]) -> [f32; NUM_COEFFICIENTS] {
        let mut coefficients = [0.0; NUM_COEFFICIENTS];

        for (coefficient, eigen_vector) in coefficients.iter_mut().zip(self.vectors()) {
            *coefficient = vector
                .iter()
                .zip(self.mean())
                .zip(eigen_vector)
                .map(|((v, m), e)| (v - m) * e)
                .sum();
        }
        coefficients
    }

    /// Rebuild a block vector from its coefficients
    ///
    /// Only the first `NUM_COEFFICIENTS` terms of the expansion exist,
    /// so this is an approximation of the projected block.
    pub fn reconstruct(
        &self, coefficients: &[f32; NUM_COEFFICIENTS], vector: &mut [f32; BLOCK_VECTOR_LEN]
    ) {
        vector.copy_from_slice(self.mean());

        for (coefficient, eigen_vector) in coefficients.iter().zip(self.vectors()) {
            for (out, e) in vector.iter_mut().zip(eigen_vector) {
                *out += coefficient * e;
            }
        }
    }
}
