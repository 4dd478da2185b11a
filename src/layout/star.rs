//! Star peg placement: outer/inner radius alternating per angular sector.

use super::CanvasSize;
use crate::geometry::polar_offset;
use crate::types::Peg;
use std::f32::consts::{FRAC_PI_2, TAU};

const INNER_RADIUS_RATIO: f32 = 0.4;

pub(super) fn generate(count: usize, canvas: &CanvasSize, margin: f32, points: usize) -> Vec<Peg> {
    let center = canvas.center();
    let outer = canvas.boundary_radius(margin);
    let inner = outer * INNER_RADIUS_RATIO;
    // 2 × points sectors: one outer and one inner half per star point.
    let sector = TAU / (2 * points) as f32;

    (0..count)
        .map(|i| {
            let base = TAU * i as f32 / count as f32;
            let in_sector = base.rem_euclid(sector);
            let radius = if in_sector < sector / 2.0 { outer } else { inner };
            // Rotated so a star point faces up.
            let p = polar_offset(center, radius, base - FRAC_PI_2);
            Peg::new(i, p[0], p[1])
        })
        .collect()
}
