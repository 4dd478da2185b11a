//! Path Refiner: strict per-connection endpoint hill-climb.
//!
//! Each pass walks the path once and, for every connection, probes end-point
//! perturbations inside a small window (clamped to the map bounds). The end
//! point only moves when a perturbation *strictly* improves its line score,
//! so per-connection scores never regress. There is no cross-connection
//! coordination; perturbations compound across passes.
//!
//! Refined end points may drift off the originating peg's exact position
//! while the connection keeps reporting the original peg id. The id-pair
//! round trip contract therefore holds only pre-refinement.

use crate::cancel::CancelToken;
use crate::edges::EdgeMap;
use crate::synth::line_score;
use crate::types::Path;
use log::debug;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct RefineParams {
    /// Full passes over the path; each pass works on the previous pass's
    /// result.
    pub iterations: usize,
    /// Per-axis perturbation window in pixels (`-window..=window`).
    pub window: i32,
}

impl Default for RefineParams {
    fn default() -> Self {
        Self {
            iterations: 1,
            window: 2,
        }
    }
}

/// Hill-climb the end point of every connection against the edge map.
pub fn refine_path(
    path: &Path,
    edge: &EdgeMap,
    params: &RefineParams,
    cancel: &CancelToken,
) -> Path {
    let max_x = (edge.w.saturating_sub(1)) as f32;
    let max_y = (edge.h.saturating_sub(1)) as f32;

    let mut out = path.clone();
    for pass in 0..params.iterations {
        if cancel.is_cancelled() {
            debug!("refine: cancelled before pass {pass}");
            break;
        }
        let mut moved = 0usize;
        for conn in &mut out.connections {
            let mut best_end = conn.to;
            let mut best_score = line_score(conn.from, conn.to, edge);
            for dx in -params.window..=params.window {
                for dy in -params.window..=params.window {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let cand = [
                        (conn.to[0] + dx as f32).clamp(0.0, max_x),
                        (conn.to[1] + dy as f32).clamp(0.0, max_y),
                    ];
                    let score = line_score(conn.from, cand, edge);
                    if score > best_score {
                        best_score = score;
                        best_end = cand;
                    }
                }
            }
            if best_end != conn.to {
                conn.set_end(best_end);
                moved += 1;
            }
        }
        debug!("refine: pass {pass} moved {moved}/{} end points", out.len());
    }
    out
}
