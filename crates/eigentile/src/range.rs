/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use eigentile_core::bytestream::{ZByteIoError, ZByteReader, ZByteWriter};

use crate::constants::NUM_COEFFICIENTS;

/// Per coefficient bounds over every block of a tile
///
/// The range calibrates the quantizer. It is computed once per tile,
/// travels as the packet header and is read only afterwards.
///
/// Nothing guarantees `max[i] >= min[i]`, a range read from the wire may be
/// inverted or degenerate and the quantizer copes with both.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileRange {
    pub min: [f32; NUM_COEFFICIENTS],
    pub max: [f32; NUM_COEFFICIENTS]
}

impl Default for TileRange {
    fn default() -> Self {
        TileRange::new()
    }
}

impl TileRange {
    /// An empty range, every min is `+inf` and every max `-inf`
    pub const fn new() -> TileRange {
        TileRange {
            min: [f32::INFINITY; NUM_COEFFICIENTS],
            max: [f32::NEG_INFINITY; NUM_COEFFICIENTS]
        }
    }

    /// Compute the range of a set of coefficient vectors
    pub fn from_coefficients<'a, I>(coefficients: I) -> TileRange
    where
        I: IntoIterator<Item = &'a [f32; NUM_COEFFICIENTS]>
    {
        let mut range = TileRange::new();
        for c in coefficients {
            range.expand(c);
        }
        range
    }

    /// Widen the range so that it covers `coefficients`
    ///
    /// NaN coefficients are ignored.
    #[inline]
    pub fn expand(&mut self, coefficients: &[f32; NUM_COEFFICIENTS]) {
        for ((min, max), c) in self.min.iter_mut().zip(&mut self.max).zip(coefficients) {
            *min = min.min(*c);
            *max = max.max(*c);
        }
    }

    /// Return true if every bound is a finite number
    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(&self.max).all(|x| x.is_finite())
    }

    /// Write the range as the packet header, all mins then all maxes,
    /// as little endian floats
    pub fn write(&self, writer: &mut ZByteWriter) -> Result<(), ZByteIoError> {
        for value in self.min.iter().chain(&self.max) {
            writer.write_f32_le_err(*value)?;
        }
        Ok(())
    }

    /// Read a range written by [`write`](Self::write)
    pub fn read(reader: &mut ZByteReader) -> Result<TileRange, ZByteIoError> {
        let mut range = TileRange::new();

        for value in range.min.iter_mut().chain(&mut range.max) {
            *value = reader.get_f32_le_err()?;
        }
        Ok(range)
    }
}
