/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::mem::size_of;

use crate::bytestream::ZByteIoError;

/// An encapsulation of a byte stream reader
///
/// This provides an interface similar to [std::io::Cursor] but
/// with the exception of adding endian aware reads of integers
/// and floats.
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

impl<'a> ZByteReader<'a> {
    /// Create a new instance of the byte stream
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Return the number of bytes remaining in the stream
    ///
    /// # Example
    /// ```
    /// use eigentile_core::bytestream::ZByteReader;
    /// let stream = ZByteReader::new(&[1, 2, 3]);
    /// assert_eq!(stream.remaining(), 3);
    /// ```
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }
    /// Get current position of the stream
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Return true if the stream can satisfy a read
    /// of `num` bytes
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }
    /// Return true whether or not we read to the end of the
    /// buffer and have no more bytes left.
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Read a single byte or return an error if the stream
    /// has no more bytes
    ///
    /// ```
    /// use eigentile_core::bytestream::ZByteReader;
    /// let mut stream = ZByteReader::new(&[7]);
    /// assert_eq!(stream.read_u8_err().unwrap(), 7);
    /// assert!(stream.read_u8_err().is_err());
    /// ```
    #[inline(always)]
    pub fn read_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ZByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Read `N` bytes into an array, or error out without advancing
    /// if fewer than `N` bytes remain
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        match self.stream.get(self.position..self.position + N) {
            Some(bytes) => {
                self.position += N;
                let mut out = [0; N];
                out.copy_from_slice(bytes);
                Ok(out)
            }
            None => Err(ZByteIoError::NotEnoughBytes(N, self.remaining()))
        }
    }
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$name3:tt,$int_type:tt) => {
        impl<'a> ZByteReader<'a> {
            #[inline(always)]
            fn $name(&mut self, mode: Mode) -> Result<$int_type, ZByteIoError> {
                const SIZE_OF_VAL: usize = size_of::<$int_type>();

                let bytes = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;

                Ok(match mode {
                    Mode::BE => $int_type::from_be_bytes(bytes),
                    Mode::LE => $int_type::from_le_bytes(bytes)
                })
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a big endian value")]
            #[doc=concat!("or return an error if the stream cannot satisfy a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name2(&mut self) -> Result<$int_type, ZByteIoError> {
                self.$name(Mode::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian value")]
            #[doc=concat!("or return an error if the stream cannot satisfy a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name3(&mut self) -> Result<$int_type, ZByteIoError> {
                self.$name(Mode::LE)
            }
        }
    };
}

get_single_type!(get_f32_inner_or_die, get_f32_be_err, get_f32_le_err, f32);
