//! Parametric-curve peg placement (heart).

use super::CanvasSize;
use crate::types::Peg;
use std::f32::consts::TAU;

/// Classic parametric heart, scaled and centered to the canvas:
/// `x = 16 sin³t`, `y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t`.
pub(super) fn generate_heart(count: usize, canvas: &CanvasSize, margin: f32) -> Vec<Peg> {
    let center = canvas.center();
    let scale = canvas.boundary_radius(margin);

    (0..count)
        .map(|i| {
            let t = TAU * i as f32 / count as f32;
            let hx = 16.0 * t.sin().powi(3);
            let hy = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            // The raw curve spans roughly ±17 units; /20 keeps it inside
            // the boundary circle. Y is flipped for image coordinates.
            let x = center[0] + hx * scale / 20.0;
            let y = center[1] - hy * scale / 20.0;
            Peg::new(i, x, y)
        })
        .collect()
}
