/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use log::{debug, info};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_image::core_filters::colorspace::ColorspaceConv;
use zune_image::core_filters::depth::Depth;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;

use crate::errors::CliErrors;

/// Interleaved 8 bit RGB pixels with rows packed back to back
pub struct RgbImage {
    pub pixels: Vec<u8>,
    pub width:  usize,
    pub height: usize
}

/// Read an image file of any format zune-image understands
/// and bring it to 8 bit RGB
pub fn load_rgb8(path: &Path) -> Result<RgbImage, CliErrors> {
    let mut image = Image::open(path)?;
    let (width, height) = image.dimensions();

    info!("Read {:?}: {}x{}", path, width, height);
    debug!(
        "Source colorspace {:?}, depth {:?}",
        image.colorspace(),
        image.depth()
    );

    if image.depth() != BitDepth::Eight {
        Depth::new(BitDepth::Eight).execute(&mut image)?;
    }
    if image.colorspace() != ColorSpace::RGB {
        ColorspaceConv::new(ColorSpace::RGB).execute(&mut image)?;
    }

    let pixels = image
        .flatten_to_u8()
        .into_iter()
        .next()
        .ok_or_else(|| CliErrors::Generic(format!("{path:?} contains no frames")))?;

    if pixels.len() != width * height * 3 {
        return Err(CliErrors::Generic(format!(
            "Expected {} bytes of RGB data, found {}",
            width * height * 3,
            pixels.len()
        )));
    }
    Ok(RgbImage {
        pixels,
        width,
        height
    })
}

/// Write RGB pixels, the format follows the file extension
pub fn save_rgb8(path: &Path, pixels: &[u8], width: usize, height: usize) -> Result<(), CliErrors> {
    let image = Image::from_u8(pixels, width, height, ColorSpace::RGB);
    image.save(path)?;

    info!("Wrote {:?}: {}x{}", path, width, height);
    Ok(())
}
