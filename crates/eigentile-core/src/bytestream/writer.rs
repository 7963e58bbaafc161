/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::mem::size_of;

use crate::bytestream::ZByteIoError;

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
pub struct ZByteWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

impl<'a> ZByteWriter<'a> {
    /// Create a new writer for the stream
    pub fn new(data: &'a mut [u8]) -> ZByteWriter<'a> {
        ZByteWriter {
            buffer:   data,
            position: 0
        }
    }
    /// Return number of unwritten bytes in this stream
    ///
    /// # Example
    /// ```
    /// use eigentile_core::bytestream::ZByteWriter;
    /// let mut storage = [0;10];
    ///
    /// let writer = ZByteWriter::new(&mut storage);
    /// assert_eq!(writer.bytes_left(),10); // no bytes were written
    /// ```
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use eigentile_core::bytestream::ZByteWriter;
    /// let mut stream = ZByteWriter::new(&mut []);
    /// assert_eq!(stream.position(),0);
    /// ```
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Write a single byte into the bytestream or error out
    /// if there is not enough space
    ///
    /// # Example
    /// ```
    /// use eigentile_core::bytestream::ZByteWriter;
    /// let mut buf = [0;10];
    /// let mut stream  =  ZByteWriter::new(&mut buf);
    /// assert!(stream.write_u8_err(34).is_ok());
    /// ```
    /// No space
    /// ```
    /// use eigentile_core::bytestream::ZByteWriter;
    /// let mut stream = ZByteWriter::new(&mut []);
    /// assert!(stream.write_u8_err(32).is_err());
    /// ```
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ZByteIoError> {
        match self.buffer.get_mut(self.position) {
            Some(m_byte) => {
                self.position += 1;
                *m_byte = byte;

                Ok(())
            }
            None => Err(ZByteIoError::NotEnoughBuffer(1, self.bytes_left()))
        }
    }

    /// Write a fixed number of bytes into the stream or error out
    /// if the whole array cannot fit
    pub fn write_const_bytes<const N: usize>(
        &mut self, bytes: &[u8; N]
    ) -> Result<(), ZByteIoError> {
        match self.buffer.get_mut(self.position..self.position + N) {
            Some(m_bytes) => {
                m_bytes.copy_from_slice(bytes);
                self.position += N;
                Ok(())
            }
            None => Err(ZByteIoError::NotEnoughBuffer(N, self.bytes_left()))
        }
    }

    /// Check if the byte writer can support
    /// the following write
    ///
    /// # Example
    /// ```
    /// use eigentile_core::bytestream::ZByteWriter;
    /// let mut data = [0;10];
    /// let mut stream = ZByteWriter::new(&mut data);
    /// assert!(stream.has(5));
    /// assert!(!stream.has(100));
    /// ```
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.buffer.len()
    }
}

macro_rules! write_single_type {
    ($name:tt,$name2:tt,$name3:tt,$int_type:tt) => {
        impl<'a> ZByteWriter<'a> {
            #[inline(always)]
            fn $name(&mut self, value: $int_type, mode: Mode) -> Result<(), ZByteIoError> {
                const SIZE: usize = size_of::<$int_type>();

                let left = self.bytes_left();

                match self.buffer.get_mut(self.position..self.position + SIZE) {
                    Some(m_byte) => {
                        self.position += SIZE;
                        // mode is a compile time constant so this
                        // match disappears after inlining.
                        let bytes = match mode {
                            Mode::BE => value.to_be_bytes(),
                            Mode::LE => value.to_le_bytes()
                        };

                        m_byte.copy_from_slice(&bytes);

                        Ok(())
                    }
                    None => Err(ZByteIoError::NotEnoughBuffer(SIZE, left))
                }
            }

            #[doc=concat!("Write ",stringify!($int_type)," in big endian")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name2(&mut self, value: $int_type) -> Result<(), ZByteIoError> {
                self.$name(value, Mode::BE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," in little endian")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name3(&mut self, value: $int_type) -> Result<(), ZByteIoError> {
                self.$name(value, Mode::LE)
            }
        }
    };
}

write_single_type!(write_f32_inner_or_die, write_f32_be_err, write_f32_le_err, f32);
