// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Single-channel 8-bit image load/store via the `image` crate.

use std::io;
use std::path::Path;

use image::{ExtendedColorType, GrayImage, ImageError, ImageFormat};

use crate::error::{DftError, Result};

/// Decode any supported format at `path` into 8-bit luminance.
///
/// Color images are converted to grayscale; alpha is dropped.
pub fn decode_luma(path: &Path) -> Result<GrayImage> {
    let img = image::open(path).map_err(|source| DftError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.into_luma8())
}

/// Write `pixels` (row-major, one byte per pixel) as a grayscale PNG.
pub fn encode_luma(path: &Path, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
    image::save_buffer_with_format(
        path,
        pixels,
        width,
        height,
        ExtendedColorType::L8,
        ImageFormat::Png,
    )
    .map_err(|err| DftError::io(path, into_io_error(err)))
}

fn into_io_error(err: ImageError) -> io::Error {
    match err {
        ImageError::IoError(e) => e,
        other => io::Error::other(other),
    }
}
