// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Complex sample storage for spatial and frequency-domain images.
//!
//! Provides [`ComplexGrid`], a row-major `width * height` array of
//! [`Complex64`] samples. The same type carries a real-valued input image
//! (imaginary parts zero) and its transform, where sample (0, 0) is the DC
//! coefficient.

use std::ops::{Index, IndexMut};

use num_complex::Complex;

/// Double-precision complex sample.
pub type Complex64 = Complex<f64>;

/// Row-major grid of complex samples.
///
/// Invariant: `samples.len() == width * height`. Sample `(x, y)` lives at
/// index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexGrid {
    width: usize,
    height: usize,
    samples: Vec<Complex64>,
}

impl ComplexGrid {
    /// Create a new grid initialized to zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            samples: vec![Complex64::new(0.0, 0.0); width * height],
        }
    }

    /// Wrap an existing sample vector. Returns `None` if the length does not
    /// match `width * height`.
    pub fn from_samples(width: usize, height: usize, samples: Vec<Complex64>) -> Option<Self> {
        if width.checked_mul(height) != Some(samples.len()) {
            return None;
        }
        Some(Self {
            width,
            height,
            samples,
        })
    }

    /// Real-valued grid from 8-bit luminance: each sample is `(p / 255, 0)`.
    pub fn from_luma(width: usize, height: usize, pixels: &[u8]) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        let samples = pixels
            .iter()
            .map(|&p| Complex64::new(p as f64 / 255.0, 0.0))
            .collect();
        Self {
            width,
            height,
            samples,
        }
    }

    /// Set new dimensions and reset every sample to zero. Prior content is
    /// discarded.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.samples.clear();
        self.samples.resize(width * height, Complex64::new(0.0, 0.0));
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `(x, y)`. Panics if out of range.
    pub fn at(&self, x: usize, y: usize) -> &Complex64 {
        &self.samples[self.index(x, y)]
    }

    /// Mutable sample at `(x, y)`. Panics if out of range.
    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut Complex64 {
        let idx = self.index(x, y);
        &mut self.samples[idx]
    }

    /// Convert a flat index into `(x, y)`.
    pub fn index_to_coordinates(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.samples.len(), "index {index} >= {}", self.samples.len());
        (index % self.width, index / self.width)
    }

    /// Raw read-only access in row-major order.
    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    /// Raw mutable access in row-major order. Each `width`-long chunk is
    /// one row.
    pub fn samples_mut(&mut self) -> &mut [Complex64] {
        &mut self.samples
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width, "x {x} >= {}", self.width);
        debug_assert!(y < self.height, "y {y} >= {}", self.height);
        y * self.width + x
    }
}

impl Index<(usize, usize)> for ComplexGrid {
    type Output = Complex64;

    fn index(&self, (x, y): (usize, usize)) -> &Complex64 {
        self.at(x, y)
    }
}

impl IndexMut<(usize, usize)> for ComplexGrid {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Complex64 {
        self.at_mut(x, y)
    }
}
