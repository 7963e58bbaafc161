/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! Both operate on borrowed, fixed size buffers. The tile codec
//! knows the size of every packet up front so neither of them
//! ever allocates.
pub use reader::*;
pub use writer::*;

mod reader;
mod writer;

use core::fmt::{Debug, Display, Formatter};

/// Errors encountered when reading or writing
/// a bytestream
pub enum ZByteIoError {
    /// Not enough bytes left in the stream to satisfy a read
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes left
    NotEnoughBytes(usize, usize),
    /// Not enough space left in the buffer to satisfy a write
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we wanted to write
    /// - 2nd argument is the number of bytes left in the buffer
    NotEnoughBuffer(usize, usize)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}
