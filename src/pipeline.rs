// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! DFT and IDFT pipelines.
//!
//! DFT: image -> raw copy -> power-of-two check -> forward transform ->
//! magnitude/phase PNGs -> CSV dump -> `.dft` blob.
//!
//! IDFT: `.dft` blob -> inverse transform -> magnitude PNG.
//!
//! Each step runs to completion before the next starts. The first failure
//! aborts the invocation; artifacts written before it stay on disk.

use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::codec;
use crate::csv::write_csv;
use crate::error::{DftError, Result};
use crate::grid::ComplexGrid;
use crate::image_io::{decode_luma, encode_luma};
use crate::transform::{RustFftTransform, Transform2d};
use crate::visualize::{compute_magnitude_phase, reconstruct_luma, VisualizeOptions};

pub const RAW_SUFFIX: &str = ".raw.png";
pub const MAGNITUDE_SUFFIX: &str = ".mag.png";
pub const PHASE_SUFFIX: &str = ".phase.png";
pub const CSV_SUFFIX: &str = ".csv";
pub const BLOB_SUFFIX: &str = ".dft";
pub const RECONSTRUCTED_SUFFIX: &str = ".png";

/// Paths written by a successful [`Pipeline::dft`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DftArtifacts {
    pub raw: PathBuf,
    pub magnitude: PathBuf,
    pub phase: PathBuf,
    pub csv: PathBuf,
    pub blob: PathBuf,
}

/// `<base><suffix>`, appended to the file name rather than replacing an
/// extension.
pub fn output_path(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Nonzero power of two.
pub fn is_power_of_two(n: usize) -> bool {
    n.is_power_of_two()
}

/// Both dimensions must be powers of two before any transform runs.
pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if is_power_of_two(width) && is_power_of_two(height) {
        Ok(())
    } else {
        Err(DftError::Validation { width, height })
    }
}

/// Transform backend plus visualization settings.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<T = RustFftTransform> {
    transform: T,
    options: VisualizeOptions,
}

impl<T: Transform2d> Pipeline<T> {
    pub fn new(transform: T, options: VisualizeOptions) -> Self {
        Self { transform, options }
    }

    /// Forward transform of the image at `src`, writing the five artifacts
    /// next to `dest_base`.
    pub fn dft(&self, src: &Path, dest_base: &Path) -> Result<DftArtifacts> {
        let img = decode_luma(src)?;
        let (w, h) = img.dimensions();
        let (width, height) = (w as usize, h as usize);
        debug!(src = %src.display(), width, height, "decoded source image");

        let input = ComplexGrid::from_luma(width, height, img.as_raw());

        let raw = output_path(dest_base, RAW_SUFFIX);
        encode_luma(&raw, w, h, img.as_raw())?;
        info!(path = %raw.display(), "wrote raw copy");

        validate_dimensions(width, height)?;

        let spectrum = self.transform.forward(input)?;

        let vis = compute_magnitude_phase(&spectrum, &self.options);
        let magnitude = output_path(dest_base, MAGNITUDE_SUFFIX);
        encode_luma(&magnitude, w, h, &vis.magnitude)?;
        info!(path = %magnitude.display(), "wrote magnitude image");
        let phase = output_path(dest_base, PHASE_SUFFIX);
        encode_luma(&phase, w, h, &vis.phase)?;
        info!(path = %phase.display(), "wrote phase image");

        let csv = output_path(dest_base, CSV_SUFFIX);
        File::create(&csv)
            .and_then(|file| write_csv(&spectrum, BufWriter::new(file)))
            .map_err(|e| DftError::io(&csv, e))?;
        info!(path = %csv.display(), rows = spectrum.len(), "wrote csv dump");

        let blob = output_path(dest_base, BLOB_SUFFIX);
        codec::save(&spectrum, &blob).map_err(|e| DftError::io(&blob, e))?;
        info!(path = %blob.display(), "wrote spectrum blob");

        Ok(DftArtifacts {
            raw,
            magnitude,
            phase,
            csv,
            blob,
        })
    }

    /// Inverse transform of the `.dft` blob at `src`, writing the
    /// reconstructed image to `<dest_base>.png`.
    ///
    /// Reconstruction keeps only the magnitude of each sample, so negative
    /// or complex-valued spatial data is not restored exactly.
    pub fn idft(&self, src: &Path, dest_base: &Path) -> Result<PathBuf> {
        let spectrum = codec::load(src).map_err(|e| DftError::io(src, e))?;
        debug!(
            src = %src.display(),
            width = spectrum.width(),
            height = spectrum.height(),
            "loaded spectrum blob"
        );

        // Dimensions came from a u32 header.
        let (w, h) = (spectrum.width() as u32, spectrum.height() as u32);

        let spatial = self.transform.inverse(spectrum)?;
        let pixels = reconstruct_luma(&spatial);

        let out = output_path(dest_base, RECONSTRUCTED_SUFFIX);
        encode_luma(&out, w, h, &pixels)?;
        info!(path = %out.display(), "wrote reconstructed image");
        Ok(out)
    }
}

/// [`Pipeline::dft`] with the default transform and options.
pub fn dft(src: &Path, dest_base: &Path) -> Result<DftArtifacts> {
    Pipeline::<RustFftTransform>::default().dft(src, dest_base)
}

/// [`Pipeline::idft`] with the default transform.
pub fn idft(src: &Path, dest_base: &Path) -> Result<PathBuf> {
    Pipeline::<RustFftTransform>::default().idft(src, dest_base)
}
