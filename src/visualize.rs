// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! 8-bit magnitude and phase views of a spectrum.
//!
//! Output pixel `(x, y)` reads the spectrum at
//! `((x + w/2) mod w, (y + h/2) mod h)`, which moves the DC coefficient from
//! the origin to the image center. Magnitudes are optionally compressed with
//! `ln(1 + |c|)` and scaled against the largest value; phases are mapped
//! linearly from `(-pi, pi]` onto `[0, 255]`.

use std::f64::consts::PI;

use tracing::debug;

use crate::grid::ComplexGrid;

/// Default for [`VisualizeOptions::log_magnitude`].
pub const MAGNITUDE_LOG: bool = true;

/// Default for [`VisualizeOptions::zero_dc`].
pub const MAGNITUDE_ZERO_DC: bool = false;

/// Knobs for [`compute_magnitude_phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizeOptions {
    /// Replace each magnitude `m` with `ln(1 + m)` before normalizing.
    pub log_magnitude: bool,
    /// Zero the DC magnitude before normalizing so it does not set the scale.
    pub zero_dc: bool,
}

impl Default for VisualizeOptions {
    fn default() -> Self {
        Self {
            log_magnitude: MAGNITUDE_LOG,
            zero_dc: MAGNITUDE_ZERO_DC,
        }
    }
}

/// Centered 8-bit magnitude and phase buffers, both `width * height` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visualization {
    pub magnitude: Vec<u8>,
    pub phase: Vec<u8>,
}

/// Build the centered magnitude and phase images of `spectrum`.
pub fn compute_magnitude_phase(spectrum: &ComplexGrid, options: &VisualizeOptions) -> Visualization {
    let width = spectrum.width();
    let height = spectrum.height();
    let mut mag = vec![0.0f64; spectrum.len()];
    let mut phase = vec![0.0f64; spectrum.len()];

    let mut max_mag = 0.0f64;
    for index in 0..spectrum.len() {
        let (x, y) = spectrum.index_to_coordinates(index);
        let sx = (x + width / 2) % width;
        let sy = (y + height / 2) % height;
        let c = spectrum.at(sx, sy);

        let m = c.norm();
        mag[index] = if options.log_magnitude { m.ln_1p() } else { m };
        phase[index] = c.im.atan2(c.re);

        if options.zero_dc && sx == 0 && sy == 0 {
            mag[index] = 0.0;
        }

        max_mag = max_mag.max(mag[index]);
    }
    debug!(max_magnitude = max_mag, width, height, "scaled magnitude image");

    Visualization {
        magnitude: mag.iter().map(|&m| normalize_magnitude(m, max_mag)).collect(),
        phase: phase.iter().map(|&p| normalize_phase(p)).collect(),
    }
}

/// `clamp(round(m / max * 256), 0, 255)`; zero when `max` is zero.
pub fn normalize_magnitude(m: f64, max: f64) -> u8 {
    if max <= 0.0 {
        return 0;
    }
    to_byte((m / max * 256.0).round())
}

/// `clamp(round((p + pi) / 2pi * 256), 0, 255)`.
pub fn normalize_phase(p: f64) -> u8 {
    to_byte(((p + PI) / (2.0 * PI) * 256.0).round())
}

/// Spatial reconstruction: `clamp(|c| * 256, 0, 255)` per sample, no
/// centering or compression.
pub fn reconstruct_luma(grid: &ComplexGrid) -> Vec<u8> {
    grid.samples()
        .iter()
        .map(|c| to_byte((c.norm() * 256.0).trunc()))
        .collect()
}

// NaN falls through `clamp` unchanged and `as u8` maps it to 0.
fn to_byte(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Complex64;

    fn dc_only(width: usize, height: usize, value: f64) -> ComplexGrid {
        let mut grid = ComplexGrid::new(width, height);
        grid[(0, 0)] = Complex64::new(value, 0.0);
        grid
    }

    #[test]
    fn dc_lands_in_center() {
        for &(w, h) in &[(4, 4), (8, 2), (16, 32)] {
            let vis = compute_magnitude_phase(&dc_only(w, h, 3.0), &VisualizeOptions::default());
            let center = (h / 2) * w + w / 2;
            for (i, &m) in vis.magnitude.iter().enumerate() {
                if i == center {
                    assert_eq!(m, 255, "{w}x{h}: center should be brightest");
                } else {
                    assert_eq!(m, 0, "{w}x{h}: pixel {i} should be dark");
                }
            }
        }
    }

    #[test]
    fn all_zero_input_gives_zero_magnitude() {
        let vis = compute_magnitude_phase(&ComplexGrid::new(8, 8), &VisualizeOptions::default());
        assert_eq!(vis.magnitude.len(), 64);
        assert!(vis.magnitude.iter().all(|&m| m == 0));
        // atan2(0, 0) = 0 maps to mid-gray
        assert!(vis.phase.iter().all(|&p| p == 128));
    }

    #[test]
    fn zero_dc_suppresses_spike() {
        let mut grid = dc_only(4, 4, 100.0);
        grid[(1, 0)] = Complex64::new(1.0, 0.0);
        let options = VisualizeOptions { log_magnitude: false, zero_dc: true };
        let vis = compute_magnitude_phase(&grid, &options);

        // Centered: DC at (2, 2), (1, 0) at (3, 2)
        assert_eq!(vis.magnitude[2 * 4 + 2], 0);
        assert_eq!(vis.magnitude[2 * 4 + 3], 255);
    }

    #[test]
    fn log_compression_lifts_small_values() {
        let mut grid = dc_only(4, 4, 1000.0);
        grid[(1, 0)] = Complex64::new(10.0, 0.0);
        let linear = compute_magnitude_phase(
            &grid,
            &VisualizeOptions { log_magnitude: false, zero_dc: false },
        );
        let log = compute_magnitude_phase(&grid, &VisualizeOptions::default());
        let idx = 2 * 4 + 3;
        assert_eq!(linear.magnitude[idx], 3);
        assert!(log.magnitude[idx] > 80, "log view got {}", log.magnitude[idx]);
    }

    #[test]
    fn phase_mapping_boundaries() {
        assert_eq!(normalize_phase(-PI), 0);
        assert_eq!(normalize_phase(-PI + f64::EPSILON), 0);
        assert_eq!(normalize_phase(PI), 255);
        assert_eq!(normalize_phase(0.0), 128);
    }

    #[test]
    fn phase_of_spectrum_samples() {
        let mut grid = ComplexGrid::new(2, 2);
        grid[(1, 1)] = Complex64::new(-1.0, 0.0); // pi
        grid[(0, 1)] = Complex64::new(0.0, -1.0); // -pi/2
        let vis = compute_magnitude_phase(&grid, &VisualizeOptions::default());
        // (1, 1) is shown at (0, 0); (0, 1) at (1, 0)
        assert_eq!(vis.phase[0], 255);
        assert_eq!(vis.phase[1], 64);
    }

    #[test]
    fn outputs_stay_in_range() {
        let samples = (0..64)
            .map(|i| Complex64::new((i as f64 - 30.0) * 1e6, (i as f64).sin() * 1e-6))
            .collect();
        let grid = ComplexGrid::from_samples(8, 8, samples).unwrap();
        let vis = compute_magnitude_phase(&grid, &VisualizeOptions::default());
        assert_eq!(vis.magnitude.len(), 64);
        assert_eq!(vis.phase.len(), 64);
        assert_eq!(*vis.magnitude.iter().max().unwrap(), 255);
    }

    #[derive(Clone, Default)]
    struct CaptureBuf(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn max_magnitude_is_logged() {
        let buf = CaptureBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let options = VisualizeOptions { log_magnitude: false, zero_dc: false };
        tracing::subscriber::with_default(subscriber, || {
            compute_magnitude_phase(&dc_only(4, 4, 2.5), &options);
        });

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("max_magnitude=2.5"), "log output: {out}");
    }

    #[test]
    fn magnitude_normalization() {
        assert_eq!(normalize_magnitude(0.0, 0.0), 0);
        assert_eq!(normalize_magnitude(1.0, 1.0), 255);
        assert_eq!(normalize_magnitude(0.5, 1.0), 128);
        assert_eq!(normalize_magnitude(0.0, 1.0), 0);
    }

    #[test]
    fn reconstruct_scales_and_clamps() {
        let samples = vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(0.5, 0.0),
            Complex64::new(-0.25, 0.0),
            Complex64::new(3.0, 4.0),
        ];
        let grid = ComplexGrid::from_samples(2, 2, samples).unwrap();
        assert_eq!(reconstruct_luma(&grid), vec![0, 128, 64, 255]);
    }
}
