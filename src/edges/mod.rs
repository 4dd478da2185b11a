//! Edge Map Builder: smoothing, Sobel magnitude and optional enhancement.
//!
//! The pipeline over a borrowed grayscale view:
//!
//! 1. 3×3 weighted-average smoothing to suppress noise (border pixels are
//!    left at zero, not processed).
//! 2. Sobel gradient magnitude `sqrt(gx² + gy²)` over the smoothed grid.
//! 3. Output mode: continuous magnitude clamped to `[0, 255]`, or a binary
//!    255/0 split at a configurable threshold.
//! 4. Optional dilation passes that promote nonzero pixels surrounded by a
//!    nonzero majority, strengthening connected edges.
//!
//! The resulting [`EdgeMap`] is immutable and shared read-only by every
//! downstream stage. This builder assumes a valid intensity grid; decode
//! failures belong to the decoding collaborator and must be surfaced before
//! this stage runs.

pub mod enhance;
pub mod grad;
pub mod smooth;

use crate::error::Error;
use crate::image::GrayView;
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Derived raster where each pixel approximates local edge strength.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    pub w: usize,
    pub h: usize,
    /// Row-major per-pixel intensity, 0–255.
    pub data: Vec<u8>,
}

impl EdgeMap {
    /// Wrap a prebuilt intensity grid.
    pub fn new(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), w * h);
        Self { w, h, data }
    }

    #[inline]
    pub fn intensity(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }

    /// Intensity at a real-valued position (floor lookup), `None` outside
    /// the map bounds.
    #[inline]
    pub fn sample(&self, x: f32, y: f32) -> Option<u8> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let xi = x.floor() as usize;
        let yi = y.floor() as usize;
        if xi >= self.w || yi >= self.h {
            return None;
        }
        Some(self.intensity(xi, yi))
    }
}

/// How the gradient magnitude is mapped into the edge map.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum EdgeOutput {
    /// Magnitude clamped to `[0, 255]`.
    Continuous,
    /// 255 where magnitude reaches `threshold`, 0 elsewhere.
    Binary { threshold: f32 },
}

/// Edge Map Builder parameters.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    pub output: EdgeOutput,
    /// Dilation passes applied after magnitude mapping. 0 disables the
    /// enhancement; 2 is the reference value for binary maps.
    pub enhance_passes: usize,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            output: EdgeOutput::Continuous,
            enhance_passes: 0,
        }
    }
}

/// Build an [`EdgeMap`] from a grayscale intensity grid.
pub fn build_edge_map(gray: &GrayView<'_>, params: &EdgeParams) -> Result<EdgeMap, Error> {
    if gray.is_empty() {
        return Err(Error::EmptyImage);
    }
    let t0 = Instant::now();
    let (w, h) = (gray.w, gray.h);

    let smoothed = smooth::smooth_3x3(gray);
    let mag = grad::sobel_magnitude(&smoothed, w, h);

    let mut data: Vec<u8> = match params.output {
        EdgeOutput::Continuous => mag.iter().map(|&m| m.clamp(0.0, 255.0) as u8).collect(),
        EdgeOutput::Binary { threshold } => mag
            .iter()
            .map(|&m| if m >= threshold { 255u8 } else { 0u8 })
            .collect(),
    };

    for _ in 0..params.enhance_passes {
        data = enhance::dilate_pass(&data, w, h);
    }

    debug!(
        "edge map {}x{} built in {:.3} ms ({:?}, {} enhance passes)",
        w,
        h,
        t0.elapsed().as_secs_f64() * 1000.0,
        params.output,
        params.enhance_passes
    );
    Ok(EdgeMap::new(w, h, data))
}
