// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the DFT/IDFT pipeline.
//!
//! [`DftError`] covers every failure that aborts a pipeline invocation, from
//! decoding the source image through writing the last artifact.

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can abort a DFT or IDFT invocation.
#[derive(Debug)]
pub enum DftError {
    /// The source image is missing, corrupt or in an unsupported format.
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },
    /// The image dimensions are not both powers of two.
    Validation { width: usize, height: usize },
    /// A blob or artifact could not be read or written (missing, truncated,
    /// permission denied).
    Io { path: PathBuf, source: io::Error },
    /// The transform primitive rejected its input.
    Transform(String),
}

impl DftError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for DftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "could not load image {}: {source}", path.display())
            }
            Self::Validation { width, height } => write!(
                f,
                "image is {width}x{height} but width and height need to be a power of 2"
            ),
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            Self::Transform(msg) => write!(f, "transform failed: {msg}"),
        }
    }
}

impl std::error::Error for DftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DftError>;
