/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scalar quantization of coefficients and packing of block records
//!
//! Earlier eigen directions carry more variance, so they get more bits.
//! Where every code goes inside a record is described once, by
//! [`COEFFICIENT_FIELDS`], and both [`pack_codes`] and [`unpack_codes`]
//! walk that table.
//!
//! ```text
//! byte 0: code0
//! byte 1: code1
//! byte 2: code2 << 4 | code3
//! byte 3: code4 | code5 << 2 | code6 << 4 | code7 << 6
//! ```
use crate::constants::NUM_COEFFICIENTS;
use crate::range::TileRange;

/// Placement of one quantized coefficient inside a block record
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitField {
    bits:  u8,
    byte:  u8,
    shift: u8
}

impl BitField {
    /// A field of `bits` bits stored in `byte`, starting `shift` bits
    /// from its least significant bit
    pub const fn new(bits: u8, byte: u8, shift: u8) -> BitField {
        BitField { bits, byte, shift }
    }

    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Largest code the field can hold
    pub const fn levels(&self) -> u32 {
        (1 << self.bits) - 1
    }

    const fn mask(&self) -> u8 {
        self.levels() as u8
    }

    #[inline(always)]
    fn insert(&self, record: &mut [u8], code: u32) {
        record[usize::from(self.byte)] |= ((code as u8) & self.mask()) << self.shift;
    }

    #[inline(always)]
    fn extract(&self, record: &[u8]) -> u32 {
        u32::from((record[usize::from(self.byte)] >> self.shift) & self.mask())
    }
}

/// Bit allocation for the coefficients, 8,8,4,4,2,2,2,2 bits
pub const COEFFICIENT_FIELDS: [BitField; NUM_COEFFICIENTS] = [
    BitField::new(8, 0, 0),
    BitField::new(8, 1, 0),
    BitField::new(4, 2, 4),
    BitField::new(4, 2, 0),
    BitField::new(2, 3, 0),
    BitField::new(2, 3, 2),
    BitField::new(2, 3, 4),
    BitField::new(2, 3, 6)
];

/// Size of a single block record in bytes
pub const BLOCK_RECORD_SIZE: usize = total_bits(&COEFFICIENT_FIELDS) / 8;

const _: () = assert!(
    fields_fill_record(&COEFFICIENT_FIELDS),
    "coefficient fields must fill the record without overlapping"
);

const fn total_bits(fields: &[BitField]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].bits as usize;
        i += 1;
    }
    total
}

/// Every field stays inside its byte, no two fields share a bit and
/// together they cover whole bytes with no gap
const fn fields_fill_record(fields: &[BitField]) -> bool {
    let total = total_bits(fields);
    if total == 0 || total % 8 != 0 || total > 64 {
        return false;
    }
    let mut used: u64 = 0;
    let mut i = 0;

    while i < fields.len() {
        let field = fields[i];
        if field.bits == 0 || field.shift as u32 + field.bits as u32 > 8 {
            return false;
        }
        if (field.byte as usize) * 8 >= total {
            return false;
        }
        let bits = ((1_u64 << field.bits) - 1) << (field.byte as u32 * 8 + field.shift as u32);
        if used & bits != 0 {
            return false;
        }
        used |= bits;
        i += 1;
    }
    let full = if total == 64 { u64::MAX } else { (1_u64 << total) - 1 };

    used == full
}

/// Map `value` to a code in `[0, levels]`
///
/// The value is placed within `[min, max]` and clamped, so values outside
/// the range land on the first or last code. A degenerate or inverted range
/// (`max <= min`) and `levels == 0` both give code 0.
///
/// # Example
/// ```
/// use eigentile::quantize;
/// assert_eq!(quantize(0.5, 0.0, 1.0, 3), 2);
/// assert_eq!(quantize(7.0, 2.0, 2.0, 255), 0);
/// ```
#[inline]
pub fn quantize(value: f32, min: f32, max: f32, levels: u32) -> u32 {
    if levels == 0 {
        return 0;
    }
    let denom = max - min;
    // also catches NaN bounds
    if !(denom > 0.0) {
        return 0;
    }
    // NaN values stay NaN through the clamp and saturate to zero in the cast
    let t = ((value - min) / denom).clamp(0.0, 1.0);
    let code = (t * levels as f32).round() as u32;

    code.min(levels)
}

/// Map a code back to a value in `[min, max]`
///
/// Codes above `levels` are clamped. `levels == 0` returns `min`.
#[inline]
pub fn dequantize(code: u32, min: f32, max: f32, levels: u32) -> f32 {
    if levels == 0 {
        return min;
    }
    let t = code.min(levels) as f32 / levels as f32;

    min + t * (max - min)
}

/// Quantize the coefficients of one block against the tile range
pub fn quantize_coefficients(
    coefficients: &[f32; NUM_COEFFICIENTS], range: &TileRange
) -> [u32; NUM_COEFFICIENTS] {
    let mut codes = [0; NUM_COEFFICIENTS];

    for (i, (code, field)) in codes.iter_mut().zip(&COEFFICIENT_FIELDS).enumerate() {
        *code = quantize(coefficients[i], range.min[i], range.max[i], field.levels());
    }
    codes
}

/// Inverse of [`quantize_coefficients`]
pub fn dequantize_coefficients(
    codes: &[u32; NUM_COEFFICIENTS], range: &TileRange
) -> [f32; NUM_COEFFICIENTS] {
    let mut coefficients = [0.0; NUM_COEFFICIENTS];

    for (i, (coefficient, field)) in coefficients
        .iter_mut()
        .zip(&COEFFICIENT_FIELDS)
        .enumerate()
    {
        *coefficient = dequantize(codes[i], range.min[i], range.max[i], field.levels());
    }
    coefficients
}

/// Pack one code per coefficient into a block record
///
/// Bits of a code beyond its field width are dropped.
pub fn pack_codes(codes: &[u32; NUM_COEFFICIENTS]) -> [u8; BLOCK_RECORD_SIZE] {
    let mut record = [0; BLOCK_RECORD_SIZE];

    for (field, code) in COEFFICIENT_FIELDS.iter().zip(codes) {
        field.insert(&mut record, *code);
    }
    record
}

/// Unpack a block record into one code per coefficient
///
/// # Panics
/// If `record` is shorter than [`BLOCK_RECORD_SIZE`]
pub fn unpack_codes(record: &[u8]) -> [u32; NUM_COEFFICIENTS] {
    let mut codes = [0; NUM_COEFFICIENTS];

    for (field, code) in COEFFICIENT_FIELDS.iter().zip(&mut codes) {
        *code = field.extract(record);
    }
    codes
}
