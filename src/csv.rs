// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Per-sample diagnostic dump of a spectrum.
//!
//! One row per sample in row-major (uncentered) order. Magnitude and phase
//! are the raw `|c|` and `atan2(im, re)`, with no log compression or DC
//! suppression. Every field is double-quoted; floats use six decimals.

use std::io::{self, Write};

use crate::grid::ComplexGrid;

/// Column names, in order.
pub const HEADER: [&str; 7] = [
    "index",
    "x",
    "y",
    "dft real",
    "dft imaginary",
    "magnitude",
    "phase",
];

/// Write the header and one row per sample of `grid`.
pub fn write_csv<W: Write>(grid: &ComplexGrid, mut writer: W) -> io::Result<()> {
    let header: Vec<String> = HEADER.iter().map(|name| format!("\"{name}\"")).collect();
    writeln!(writer, "{}", header.join(","))?;

    for (index, c) in grid.samples().iter().enumerate() {
        let (x, y) = grid.index_to_coordinates(index);
        writeln!(
            writer,
            "\"{index}\",\"{x}\",\"{y}\",\"{:.6}\",\"{:.6}\",\"{:.6}\",\"{:.6}\"",
            c.re,
            c.im,
            c.norm(),
            c.im.atan2(c.re)
        )?;
    }
    writer.flush()
}
