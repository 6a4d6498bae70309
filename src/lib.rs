// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # image-dft
//!
//! 2D discrete Fourier transform of grayscale images and its inverse.
//!
//! - **DFT**: decode an image, transform it, and write centered 8-bit
//!   magnitude and phase views, a per-sample CSV dump and a lossless `.dft`
//!   spectrum blob.
//! - **IDFT**: read a `.dft` blob, invert it, and write the reconstructed
//!   magnitude image.
//!
//! The 1D FFT kernels come from `rustfft` behind the [`Transform2d`] trait;
//! dimensions must be powers of two.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! let artifacts = image_dft::dft(Path::new("photo.png"), Path::new("out/photo")).unwrap();
//! image_dft::idft(&artifacts.blob, Path::new("out/photo.rec")).unwrap();
//! ```

pub mod codec;
pub mod csv;
pub mod error;
pub mod grid;
pub mod image_io;
pub mod pipeline;
pub mod transform;
pub mod visualize;

pub use error::{DftError, Result};
pub use grid::{Complex64, ComplexGrid};
pub use pipeline::{dft, idft, output_path, validate_dimensions, DftArtifacts, Pipeline};
pub use transform::{RustFftTransform, Transform2d};
pub use visualize::{
    compute_magnitude_phase, Visualization, VisualizeOptions, MAGNITUDE_LOG, MAGNITUDE_ZERO_DC,
};
