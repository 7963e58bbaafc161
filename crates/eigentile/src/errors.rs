/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during tile encoding and decoding
use core::fmt::{Debug, Display, Formatter};

use eigentile_core::bytestream::ZByteIoError;

/// Possible Errors that may occur during decoding
pub enum EigenTileErrors {
    /// Tile dimensions are zero or not a multiple of the block size
    ///
    /// # Arguments
    /// - tile width
    /// - tile height
    InvalidGeometry(usize, usize),
    /// The packet length is not the one the tile geometry implies
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes in the packet
    WrongPacketSize(usize, usize),
    /// The output buffer cannot hold a whole tile at the given stride
    TooSmallOutput(usize, usize),
    /// Row stride is smaller than a tile row
    ///
    /// # Arguments
    /// - stride given
    /// - minimum stride
    InvalidStride(usize, usize),
    /// The range header holds an infinite or NaN value,
    /// only reported in strict mode
    NonFiniteRange,
    /// Generic message
    Generic(String),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for EigenTileErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            EigenTileErrors::InvalidGeometry(width, height) => {
                writeln!(
                    f,
                    "Invalid tile geometry {width}x{height}, dimensions must be non-zero multiples of 8"
                )
            }
            EigenTileErrors::WrongPacketSize(expected, found) => {
                writeln!(
                    f,
                    "Wrong packet size, expected {expected} bytes but found {found}"
                )
            }
            EigenTileErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            EigenTileErrors::InvalidStride(stride, min) => {
                writeln!(f, "Stride {stride} is smaller than a tile row of {min} bytes")
            }
            EigenTileErrors::NonFiniteRange => {
                writeln!(f, "Packet range header contains non finite values")
            }
            EigenTileErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            EigenTileErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            EigenTileErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl From<ZByteIoError> for EigenTileErrors {
    fn from(value: ZByteIoError) -> Self {
        EigenTileErrors::IoErrors(value)
    }
}

/// Errors encountered during encoding
pub enum EigenTileEncodeErrors {
    /// Tile dimensions are zero or not a multiple of the block size
    InvalidGeometry(usize, usize),
    /// Too short of an input buffer for a tile at the given stride
    ///
    /// # Arguments
    /// - expected length
    /// - found length
    TooShortInput(usize, usize),
    /// Row stride is smaller than a tile row
    InvalidStride(usize, usize),
    /// The packet buffer cannot hold a whole packet
    TooSmallOutput(usize, usize),
    /// The frame cannot hold a single tile
    ///
    /// # Arguments
    /// - frame width
    /// - frame height
    FrameTooSmall(usize, usize),

    Generic(&'static str),

    IoError(ZByteIoError)
}

impl Debug for EigenTileEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            EigenTileEncodeErrors::InvalidGeometry(width, height) => {
                writeln!(
                    f,
                    "Invalid tile geometry {width}x{height}, dimensions must be non-zero multiples of 8"
                )
            }
            EigenTileEncodeErrors::TooShortInput(expected, found) => {
                writeln!(
                    f,
                    "Too short of input, expected {expected:?}, found {found:?}",
                )
            }
            EigenTileEncodeErrors::InvalidStride(stride, min) => {
                writeln!(f, "Stride {stride} is smaller than a tile row of {min} bytes")
            }
            EigenTileEncodeErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small packet buffer, expected {expected}, but found {found}"
                )
            }
            EigenTileEncodeErrors::FrameTooSmall(width, height) => {
                writeln!(f, "Frame of {width}x{height} cannot hold a single tile")
            }
            EigenTileEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            EigenTileEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

/// Errors encountered when building a basis from raw tables
pub enum BasisError {
    /// The mean vector does not hold exactly one value per block sample
    ///
    /// # Arguments
    /// - expected length
    /// - found length
    WrongMeanLength(usize, usize),
    /// The eigen vectors do not hold exactly
    /// `NUM_COEFFICIENTS * BLOCK_VECTOR_LEN` values
    WrongVectorsLength(usize, usize),
    /// A table entry is NaN or infinite
    ///
    /// The argument is the flat index of the first bad value, mean first
    NonFinite(usize)
}

impl Debug for BasisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            BasisError::WrongMeanLength(expected, found) => {
                writeln!(f, "Mean vector must have {expected} values, found {found}")
            }
            BasisError::WrongVectorsLength(expected, found) => {
                writeln!(f, "Basis vectors must have {expected} values, found {found}")
            }
            BasisError::NonFinite(index) => {
                writeln!(f, "Basis value at index {index} is not finite")
            }
        }
    }
}

impl Display for EigenTileEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
impl Display for EigenTileErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
impl Display for BasisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for EigenTileEncodeErrors {}

impl std::error::Error for EigenTileErrors {}

impl std::error::Error for BasisError {}

impl From<ZByteIoError> for EigenTileEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoError(value)
    }
}
