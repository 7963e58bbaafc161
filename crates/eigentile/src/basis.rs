/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The statistical basis blocks are projected on
//!
//! A basis is a mean vector plus [`NUM_COEFFICIENTS`] eigen vectors over
//! the [`BLOCK_VECTOR_LEN`] dimensional block space. Encoder and decoder
//! must use the same table, it is part of the stream contract even though
//! it never travels in a packet.
use core::f64::consts::PI;

use crate::constants::{BLOCK_PIXELS, BLOCK_SIZE, BLOCK_VECTOR_LEN, NUM_CHANNELS, NUM_COEFFICIENTS};
use crate::errors::BasisError;

/// A frozen mean vector and set of eigen vectors
///
/// The codec only ever borrows a basis, so one table can be shared by
/// every encoder, decoder and thread in a process.
///
/// # Example
/// - Build a basis from flat tables, e.g. exported by an offline PCA run
///
/// ```
/// use eigentile::Basis;
///
/// let mean = vec![0.5_f32; 192];
/// let mut vectors = vec![0.0_f32; 8 * 192];
/// for i in 0..8 {
///     vectors[i * 192 + i] = 1.0;
/// }
/// let basis = Basis::from_slices(&mean, &vectors).unwrap();
/// assert_eq!(basis.mean()[0], 0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Basis {
    mean:    [f32; BLOCK_VECTOR_LEN],
    vectors: [[f32; BLOCK_VECTOR_LEN]; NUM_COEFFICIENTS]
}

impl Basis {
    /// Create a basis from a mean vector and eigen vectors
    ///
    /// Vectors should be sorted by decreasing variance, the quantizer
    /// gives earlier coefficients more bits.
    pub const fn new(
        mean: [f32; BLOCK_VECTOR_LEN], vectors: [[f32; BLOCK_VECTOR_LEN]; NUM_COEFFICIENTS]
    ) -> Basis {
        Basis { mean, vectors }
    }

    /// Create a basis from flat tables
    ///
    /// # Arguments
    /// - mean: `BLOCK_VECTOR_LEN` values
    /// - vectors: `NUM_COEFFICIENTS` eigen vectors of `BLOCK_VECTOR_LEN`
    ///   values each, laid out one after the other
    ///
    /// # Errors
    /// If either table has the wrong length or holds a NaN or infinity
    pub fn from_slices(mean: &[f32], vectors: &[f32]) -> Result<Basis, BasisError> {
        if mean.len() != BLOCK_VECTOR_LEN {
            return Err(BasisError::WrongMeanLength(BLOCK_VECTOR_LEN, mean.len()));
        }
        if vectors.len() != NUM_COEFFICIENTS * BLOCK_VECTOR_LEN {
            return Err(BasisError::WrongVectorsLength(
                NUM_COEFFICIENTS * BLOCK_VECTOR_LEN,
                vectors.len()
            ));
        }
        if let Some(pos) = mean.iter().chain(vectors).position(|x| !x.is_finite()) {
            return Err(BasisError::NonFinite(pos));
        }

        let mut basis = Basis::new(
            [0.0; BLOCK_VECTOR_LEN],
            [[0.0; BLOCK_VECTOR_LEN]; NUM_COEFFICIENTS]
        );
        basis.mean.copy_from_slice(mean);

        for (out, vector) in basis
            .vectors
            .iter_mut()
            .zip(vectors.chunks_exact(BLOCK_VECTOR_LEN))
        {
            out.copy_from_slice(vector);
        }
        Ok(basis)
    }

    /// The built in basis
    ///
    /// Principal components of natural image blocks are close to
    /// separable cosines applied to an opponent colour space, this
    /// builds that table directly. Every vector is orthonormal to the others,
    /// and the mean is mid grey.
    ///
    /// Components, in order:
    /// luma DC, luma horizontal, luma vertical, red-green DC,
    /// yellow-blue DC, luma diagonal, second luma horizontal and
    /// second luma vertical.
    pub fn cosine() -> Basis {
        let mut vectors = [[0.0; BLOCK_VECTOR_LEN]; NUM_COEFFICIENTS];

        for (vector, (opponent, u, v)) in vectors.iter_mut().zip(COSINE_COMPONENTS) {
            let weights = opponent.channel_weights();

            for (plane, weight) in vector.chunks_exact_mut(BLOCK_PIXELS).zip(weights) {
                for (y, row) in plane.chunks_exact_mut(BLOCK_SIZE).enumerate() {
                    for (x, sample) in row.iter_mut().enumerate() {
                        *sample = (weight * cosine(u, x) * cosine(v, y)) as f32;
                    }
                }
            }
        }
        Basis::new([0.5; BLOCK_VECTOR_LEN], vectors)
    }

    /// Mean block, subtracted before projection
    pub const fn mean(&self) -> &[f32; BLOCK_VECTOR_LEN] {
        &self.mean
    }

    /// Eigen vectors, one per coefficient
    pub const fn vectors(&self) -> &[[f32; BLOCK_VECTOR_LEN]; NUM_COEFFICIENTS] {
        &self.vectors
    }
}

impl Default for Basis {
    fn default() -> Self {
        Basis::cosine()
    }
}

#[derive(Copy, Clone)]
enum Opponent {
    Luma,
    RedGreen,
    YellowBlue
}

impl Opponent {
    fn channel_weights(self) -> [f64; NUM_CHANNELS] {
        match self {
            Opponent::Luma => [1.0 / 3_f64.sqrt(); 3],
            Opponent::RedGreen => {
                let w = 1.0 / 2_f64.sqrt();
                [w, -w, 0.0]
            }
            Opponent::YellowBlue => {
                let w = 1.0 / 6_f64.sqrt();
                [w, w, -2.0 * w]
            }
        }
    }
}

/// (colour, horizontal frequency, vertical frequency)
const COSINE_COMPONENTS: [(Opponent, usize, usize); NUM_COEFFICIENTS] = [
    (Opponent::Luma, 0, 0),
    (Opponent::Luma, 1, 0),
    (Opponent::Luma, 0, 1),
    (Opponent::RedGreen, 0, 0),
    (Opponent::YellowBlue, 0, 0),
    (Opponent::Luma, 1, 1),
    (Opponent::Luma, 2, 0),
    (Opponent::Luma, 0, 2)
];

/// Orthonormal DCT-II basis function `k` sampled at `n`
fn cosine(k: usize, n: usize) -> f64 {
    let size = BLOCK_SIZE as f64;
    let scale = if k == 0 {
        (1.0 / size).sqrt()
    } else {
        (2.0 / size).sqrt()
    };
    scale * (((2 * n + 1) * k) as f64 * PI / (2.0 * size)).cos()
}
