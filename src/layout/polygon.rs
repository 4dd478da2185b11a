//! Regular-polygon peg placement by cumulative perimeter arclength.

use super::CanvasSize;
use crate::geometry::{distance, lerp_point, polar_offset};
use crate::types::Peg;
use std::f32::consts::{FRAC_PI_2, TAU};

pub(super) fn generate(count: usize, canvas: &CanvasSize, margin: f32, sides: usize) -> Vec<Peg> {
    let center = canvas.center();
    let radius = canvas.boundary_radius(margin);

    // Vertices start at the top and run clockwise in image coordinates.
    let verts: Vec<[f32; 2]> = (0..sides)
        .map(|k| polar_offset(center, radius, -FRAC_PI_2 + TAU * k as f32 / sides as f32))
        .collect();

    // Cumulative arclength over the closed perimeter.
    let mut cum = Vec::with_capacity(sides + 1);
    cum.push(0.0f32);
    for k in 0..sides {
        let len = distance(verts[k], verts[(k + 1) % sides]);
        cum.push(cum[k] + len);
    }
    let perimeter = cum[sides];

    // Piecewise mapping across edges; corners are hit at most once because
    // the arclength positions are strictly increasing.
    (0..count)
        .map(|i| {
            let s = perimeter * i as f32 / count as f32;
            let mut k = 0usize;
            while k + 1 < sides && cum[k + 1] <= s {
                k += 1;
            }
            let edge_len = (cum[k + 1] - cum[k]).max(1e-6);
            let t = (s - cum[k]) / edge_len;
            let p = lerp_point(verts[k], verts[(k + 1) % sides], t);
            Peg::new(i, p[0], p[1])
        })
        .collect()
}
