//! Custom-polyline peg placement.
//!
//! The input polyline is bounding-box-normalized into the canvas minus the
//! margin, then resampled to N pegs by nearest-index lookup.

use super::CanvasSize;
use crate::types::Peg;

pub(super) fn generate(
    count: usize,
    canvas: &CanvasSize,
    margin: f32,
    points: &[[f32; 2]],
) -> Vec<Peg> {
    let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
    let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p[0]);
        max_x = max_x.max(p[0]);
        min_y = min_y.min(p[1]);
        max_y = max_y.max(p[1]);
    }
    // A collapsed polyline (single point, or axis-aligned) still maps
    // somewhere sensible instead of dividing by zero.
    let span_x = (max_x - min_x).max(1e-6);
    let span_y = (max_y - min_y).max(1e-6);

    let scale_x = (canvas.width - 2.0 * margin) / span_x;
    let scale_y = (canvas.height - 2.0 * margin) / span_y;
    let scale = scale_x.min(scale_y);

    let offset_x = (canvas.width - span_x * scale) / 2.0;
    let offset_y = (canvas.height - span_y * scale) / 2.0;

    (0..count)
        .map(|i| {
            let index = points.len() * i / count;
            let p = points[index.min(points.len() - 1)];
            Peg::new(
                i,
                offset_x + (p[0] - min_x) * scale,
                offset_y + (p[1] - min_y) * scale,
            )
        })
        .collect()
}
