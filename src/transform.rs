// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! 2D FFT/IFFT adapter over [`ComplexGrid`].
//!
//! The 1D kernels come from `rustfft`; this module only arranges them into
//! a separable 2D transform:
//! - Rows are transformed in place, one `width`-long chunk at a time.
//! - Columns use gather-FFT-scatter with a single column buffer instead of
//!   a full transposed copy.
//!
//! Forward output is unnormalized, so sample (0, 0) is the sum of all
//! inputs. Inverse output is scaled by `1/(width*height)`, which makes
//! `inverse(forward(g)) == g` up to rounding.

use rustfft::{FftDirection, FftPlanner};

use crate::error::{DftError, Result};
use crate::grid::{Complex64, ComplexGrid};

/// A 2D complex transform pair.
///
/// Both directions consume their input grid and return a new grid of the
/// same dimensions. Implementations report bad input as
/// [`DftError::Transform`] instead of panicking.
pub trait Transform2d {
    fn forward(&self, grid: ComplexGrid) -> Result<ComplexGrid>;
    fn inverse(&self, grid: ComplexGrid) -> Result<ComplexGrid>;
}

/// Radix-2 transform backed by the `rustfft` planner.
///
/// Only power-of-two dimensions are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustFftTransform;

impl Transform2d for RustFftTransform {
    fn forward(&self, grid: ComplexGrid) -> Result<ComplexGrid> {
        fft2d_with_direction(grid, FftDirection::Forward)
    }

    fn inverse(&self, grid: ComplexGrid) -> Result<ComplexGrid> {
        let mut out = fft2d_with_direction(grid, FftDirection::Inverse)?;
        let norm = 1.0 / out.len() as f64;
        for c in out.samples_mut() {
            *c *= norm;
        }
        Ok(out)
    }
}

fn check_dimensions(grid: &ComplexGrid) -> Result<()> {
    let (w, h) = (grid.width(), grid.height());
    if !w.is_power_of_two() || !h.is_power_of_two() {
        return Err(DftError::Transform(format!(
            "dimensions {w}x{h} are not powers of two"
        )));
    }
    Ok(())
}

fn fft2d_with_direction(mut grid: ComplexGrid, direction: FftDirection) -> Result<ComplexGrid> {
    check_dimensions(&grid)?;
    let width = grid.width();
    let height = grid.height();

    let mut planner = FftPlanner::<f64>::new();
    let row_fft = planner.plan_fft(width, direction);
    let col_fft = planner.plan_fft(height, direction);
    let mut scratch = vec![
        Complex64::new(0.0, 0.0);
        row_fft
            .get_inplace_scratch_len()
            .max(col_fft.get_inplace_scratch_len())
    ];

    // FFT each row
    for row in grid.samples_mut().chunks_exact_mut(width) {
        row_fft.process_with_scratch(row, &mut scratch);
    }

    // FFT each column: gather, transform, scatter back
    let mut col_buf = vec![Complex64::new(0.0, 0.0); height];
    let data = grid.samples_mut();
    for col in 0..width {
        for r in 0..height {
            col_buf[r] = data[r * width + col];
        }
        col_fft.process_with_scratch(&mut col_buf, &mut scratch);
        for r in 0..height {
            data[r * width + col] = col_buf[r];
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: usize, height: usize) -> ComplexGrid {
        let samples = (0..width * height)
            .map(|i| Complex64::new((i as f64) * 0.1 + 0.5, ((i * 7) % 5) as f64 * 0.01))
            .collect();
        ComplexGrid::from_samples(width, height, samples).unwrap()
    }

    #[test]
    fn fft_ifft_roundtrip() {
        for &(w, h) in &[(1, 1), (2, 8), (16, 16), (32, 4)] {
            let grid = ramp(w, h);
            let spectrum = RustFftTransform.forward(grid.clone()).unwrap();
            assert_eq!((spectrum.width(), spectrum.height()), (w, h));
            let recovered = RustFftTransform.inverse(spectrum).unwrap();
            for (i, (a, b)) in grid.samples().iter().zip(recovered.samples()).enumerate() {
                assert!(
                    (a.re - b.re).abs() < 1e-6 && (a.im - b.im).abs() < 1e-6,
                    "Mismatch at {i} for {w}x{h}: expected {a}, got {b}"
                );
            }
        }
    }

    #[test]
    fn dc_component_is_sum() {
        let pixels: Vec<u8> = (1..=16).collect();
        let grid = ComplexGrid::from_luma(4, 4, &pixels);
        let expected_dc: f64 = grid.samples().iter().map(|c| c.re).sum();

        let spectrum = RustFftTransform.forward(grid).unwrap();
        assert!(
            (spectrum[(0, 0)].re - expected_dc).abs() < 1e-9,
            "DC component should be sum of all samples: expected {expected_dc}, got {}",
            spectrum[(0, 0)].re
        );
        assert!(spectrum[(0, 0)].im.abs() < 1e-9);
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let mut grid = ComplexGrid::new(8, 4);
        grid[(0, 0)] = Complex64::new(1.0, 0.0);
        let spectrum = RustFftTransform.forward(grid).unwrap();
        for (k, c) in spectrum.samples().iter().enumerate() {
            assert!((c.re - 1.0).abs() < 1e-12 && c.im.abs() < 1e-12, "Bin {k}={c}");
        }
    }

    #[test]
    fn parseval_theorem() {
        let grid = ramp(8, 8);
        let spatial_energy: f64 = grid.samples().iter().map(|c| c.norm_sqr()).sum();
        let spectrum = RustFftTransform.forward(grid).unwrap();
        let freq_energy: f64 = spectrum.samples().iter().map(|c| c.norm_sqr()).sum();
        let n = 64.0;
        assert!(
            (spatial_energy - freq_energy / n).abs() < 1e-9,
            "Parseval's theorem violated: spatial={spatial_energy}, freq/N={}",
            freq_energy / n
        );
    }

    #[test]
    fn rejects_non_power_of_two() {
        for &(w, h) in &[(3, 4), (4, 6), (0, 0), (100, 128)] {
            let err = RustFftTransform.forward(ComplexGrid::new(w, h)).unwrap_err();
            assert!(matches!(err, DftError::Transform(_)), "{w}x{h} gave {err}");
            assert!(RustFftTransform.inverse(ComplexGrid::new(w, h)).is_err());
        }
    }
}
