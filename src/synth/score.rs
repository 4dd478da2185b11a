//! Line-Score: how much edge structure a candidate segment covers.

use crate::edges::EdgeMap;
use crate::geometry::{distance, lerp_point};
use rand::Rng;

/// Segments shorter than this score 0 and are never selected.
pub const MIN_SEGMENT_LENGTH: f32 = 5.0;

/// Mean edge intensity sampled along the segment `from`→`to`.
///
/// Takes `max(10, ⌊length⌋)` evenly spaced parametric samples; samples
/// falling outside the map are excluded from both numerator and denominator.
/// Returns 0 for degenerate segments or when no sample lands in bounds.
pub fn line_score(from: [f32; 2], to: [f32; 2], edge: &EdgeMap) -> f32 {
    let length = distance(from, to);
    if length < MIN_SEGMENT_LENGTH {
        return 0.0;
    }

    let samples = (length.floor() as usize).max(10);
    let mut sum = 0.0f32;
    let mut valid = 0usize;
    for i in 0..samples {
        let t = i as f32 / samples as f32;
        let p = lerp_point(from, to, t);
        if let Some(v) = edge.sample(p[0], p[1]) {
            sum += v as f32;
            valid += 1;
        }
    }
    if valid == 0 {
        return 0.0;
    }
    sum / valid as f32
}

/// Randomized stand-in for [`line_score`] when no edge map exists.
///
/// Keeps the synthesizer runnable in isolation; explicitly non-deterministic
/// and unsuitable for real image fidelity.
pub fn fallback_line_score(from: [f32; 2], to: [f32; 2], rng: &mut impl Rng) -> f32 {
    if distance(from, to) < MIN_SEGMENT_LENGTH {
        return 0.0;
    }
    rng.random_range(0.0..255.0)
}
