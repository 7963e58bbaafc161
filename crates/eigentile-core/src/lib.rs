/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the eigentile crates
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//!   over fixed size buffers
//! - Tile codec options shared by the encoder and decoder
//! - A logging shim that forwards to the `log` crate when enabled
//!
//! This library is `#[no_std]` unless the `std` feature is enabled.
//!
//! # Features
//!  - `std`: Implements `std::error::Error` for error types
//!
//!  - `log`: Forward log macros to the [log](https://docs.rs/log) crate,
//!     without it the macros compile to nothing
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]

pub mod bytestream;
#[cfg(not(feature = "log"))]
pub mod log;
#[cfg(feature = "log")]
pub use log;
pub mod options;
