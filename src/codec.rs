// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Lossless binary spectrum format (`.dft`).
//!
//! Layout, all little-endian:
//!
//! | offset | type | content |
//! |---|---|---|
//! | 0 | u32 | width |
//! | 4 | u32 | height |
//! | 8 | `width*height` x (f64, f64) | (real, imag) pairs, row-major |
//!
//! Sample (0, 0) is the uncentered DC coefficient. Doubles are stored
//! bit-for-bit, so a write/read round-trip is exact.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::grid::{Complex64, ComplexGrid};

/// Size of the width/height header in bytes.
pub const HEADER_LEN: usize = 8;

/// Bytes per stored sample.
pub const SAMPLE_LEN: usize = 16;

/// Serialize `grid` into `writer`.
pub fn write_grid<W: Write>(grid: &ComplexGrid, mut writer: W) -> io::Result<()> {
    let width = u32::try_from(grid.width())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "width exceeds u32"))?;
    let height = u32::try_from(grid.height())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "height exceeds u32"))?;
    writer.write_all(&width.to_le_bytes())?;
    writer.write_all(&height.to_le_bytes())?;

    let mut buf = [0u8; SAMPLE_LEN];
    for c in grid.samples() {
        buf[..8].copy_from_slice(&c.re.to_le_bytes());
        buf[8..].copy_from_slice(&c.im.to_le_bytes());
        writer.write_all(&buf)?;
    }
    writer.flush()
}

/// Deserialize a grid from `reader`.
///
/// A stream that ends before `width * height` samples have been read fails
/// with [`io::ErrorKind::UnexpectedEof`]. Bytes after the last sample are
/// not consumed.
pub fn read_grid<R: Read>(mut reader: R) -> io::Result<ComplexGrid> {
    let mut word = [0u8; 4];
    reader.read_exact(&mut word)?;
    let width = u32::from_le_bytes(word) as usize;
    reader.read_exact(&mut word)?;
    let height = u32::from_le_bytes(word) as usize;

    let count = width
        .checked_mul(height)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "sample count overflows"))?;

    // Grow as samples arrive so a bogus header cannot force a huge allocation.
    let mut samples = Vec::with_capacity(count.min(1 << 20));
    let mut re = [0u8; 8];
    let mut im = [0u8; 8];
    for _ in 0..count {
        reader.read_exact(&mut re)?;
        reader.read_exact(&mut im)?;
        samples.push(Complex64::new(f64::from_le_bytes(re), f64::from_le_bytes(im)));
    }

    ComplexGrid::from_samples(width, height, samples)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "sample count mismatch"))
}

/// Write `grid` to a file at `path`, replacing any existing file.
pub fn save(grid: &ComplexGrid, path: &Path) -> io::Result<()> {
    write_grid(grid, BufWriter::new(File::create(path)?))
}

/// Read a grid from the file at `path`.
pub fn load(path: &Path) -> io::Result<ComplexGrid> {
    read_grid(BufReader::new(File::open(path)?))
}
