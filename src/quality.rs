//! Quality Evaluator: length-weighted mean line score of a path.

use crate::edges::EdgeMap;
use crate::synth::line_score;
use crate::types::Path;

/// `Σ(score_i × length_i) / Σ(length_i)` over all connections.
///
/// Returns exactly 0 for an empty path; any non-finite intermediate (zero
/// total length, NaN) resolves to 0 rather than propagating. Read-only,
/// no side effects.
pub fn evaluate_path(path: &Path, edge: &EdgeMap) -> f32 {
    if path.is_empty() {
        return 0.0;
    }

    let mut weighted = 0.0f32;
    let mut total_length = 0.0f32;
    for conn in path.iter() {
        let score = line_score(conn.from, conn.to, edge);
        weighted += score * conn.length;
        total_length += conn.length;
    }
    if total_length <= 0.0 {
        return 0.0;
    }

    let score = weighted / total_length;
    if score.is_finite() {
        score.max(0.0)
    } else {
        0.0
    }
}
