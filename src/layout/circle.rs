//! Circular peg placement under the three distribution policies.

use super::{CanvasSize, Distribution};
use crate::geometry::{distance, polar_offset};
use crate::types::Peg;
use rand::Rng;
use std::f32::consts::{PI, TAU};

pub(super) fn generate(
    count: usize,
    canvas: &CanvasSize,
    margin: f32,
    distribution: Distribution,
) -> Vec<Peg> {
    let center = canvas.center();
    let radius = canvas.boundary_radius(margin);

    match distribution {
        Distribution::Even { start_angle } => (0..count)
            .map(|i| {
                let angle = start_angle + TAU * i as f32 / count as f32;
                let p = polar_offset(center, radius, angle);
                Peg::new(i, p[0], p[1])
            })
            .collect(),
        Distribution::GoldenSpiral => golden_spiral(count, center, radius),
        Distribution::RandomAngle => random_angles(count, center, radius),
    }
}

fn golden_spiral(count: usize, center: [f32; 2], radius: f32) -> Vec<Peg> {
    let golden_angle = PI * (3.0 - 5.0f32.sqrt());
    (0..count)
        .map(|i| {
            let angle = i as f32 * golden_angle;
            let spiral_radius = radius * (i as f32 / count as f32).sqrt();
            let mut p = polar_offset(center, spiral_radius, angle);
            // Points that stray past the rim are radially projected back.
            let dist = distance(p, center);
            if dist > radius {
                let ratio = radius / dist;
                p = [
                    center[0] + (p[0] - center[0]) * ratio,
                    center[1] + (p[1] - center[1]) * ratio,
                ];
            }
            Peg::new(i, p[0], p[1])
        })
        .collect()
}

fn random_angles(count: usize, center: [f32; 2], radius: f32) -> Vec<Peg> {
    let mut rng = rand::rng();
    let mut angles: Vec<f32> = (0..count).map(|_| rng.random_range(0.0..TAU)).collect();
    // Sorted ascending so peg ids stay monotone in angle.
    angles.sort_by(f32::total_cmp);
    angles
        .into_iter()
        .enumerate()
        .map(|(i, angle)| {
            let p = polar_offset(center, radius, angle);
            Peg::new(i, p[0], p[1])
        })
        .collect()
}
