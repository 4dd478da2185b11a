//! One-call pipeline: edge map → peg layout → synthesis → refinement →
//! quality score.
//!
//! Every stage is a pure function over immutable snapshots; the generator
//! only wires them together, measures latency and collects run metadata.
//! Passing no intensity grid activates the synthesizer's randomized fallback
//! scorer, which is flagged on the result so callers can warn about reduced
//! fidelity.

use crate::cancel::CancelToken;
use crate::edges::{build_edge_map, EdgeParams};
use crate::error::Error;
use crate::image::GrayView;
use crate::layout::{generate_pegs, snap_pegs_to_edges, validate_pegs, LayoutParams};
use crate::quality::evaluate_path;
use crate::refine::{refine_path, RefineParams};
use crate::synth::{synthesize, SynthParams};
use crate::types::PatternResult;
use log::debug;
use serde::Deserialize;
use std::time::Instant;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub edge: EdgeParams,
    pub layout: LayoutParams,
    pub synth: SynthParams,
    /// Endpoint refinement after synthesis; `None` skips the pass.
    pub refine: Option<RefineParams>,
    /// Snap pegs to locally maximal edge intensity within this ±px window
    /// before synthesis. Requires an edge map to have any effect.
    pub snap_window: Option<i32>,
    /// Validation pass: drop pegs out of bounds or closer than this to an
    /// accepted peg. The run may then use fewer pegs than requested.
    pub min_peg_distance: Option<f32>,
}

pub struct PatternGenerator {
    params: GenerationParams,
}

impl PatternGenerator {
    pub fn new(params: GenerationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Run the full pipeline over an optional grayscale intensity grid.
    ///
    /// The grid dimensions must match the configured canvas; the edge map
    /// and the peg layout are built against the same coordinate space.
    pub fn process(
        &self,
        gray: Option<GrayView<'_>>,
        cancel: &CancelToken,
    ) -> Result<PatternResult, Error> {
        let t0 = Instant::now();
        let canvas = self.params.layout.canvas;

        let edge_map = match gray {
            Some(view) => {
                let (canvas_w, canvas_h) = (canvas.width as usize, canvas.height as usize);
                if view.w != canvas_w || view.h != canvas_h {
                    return Err(Error::CanvasMismatch {
                        actual_w: view.w,
                        actual_h: view.h,
                        canvas_w,
                        canvas_h,
                    });
                }
                Some(build_edge_map(&view, &self.params.edge)?)
            }
            None => None,
        };

        let mut pegs = generate_pegs(&self.params.layout)?;
        if let (Some(window), Some(edge)) = (self.params.snap_window, edge_map.as_ref()) {
            pegs = snap_pegs_to_edges(&pegs, edge, window);
        }
        if let Some(min_distance) = self.params.min_peg_distance {
            let before = pegs.len();
            pegs = validate_pegs(pegs, &canvas, min_distance);
            if pegs.len() < before {
                debug!("generator: validation kept {}/{before} pegs", pegs.len());
            }
        }

        let outcome = synthesize(&pegs, edge_map.as_ref(), &self.params.synth, cancel);
        let mut path = outcome.path;
        if let (Some(refine_params), Some(edge)) = (&self.params.refine, edge_map.as_ref()) {
            if !outcome.cancelled {
                path = refine_path(&path, edge, refine_params, cancel);
            }
        }

        let score = match edge_map.as_ref() {
            Some(edge) => evaluate_path(&path, edge),
            None => 0.0,
        };

        let latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "generator: {} lines over {} pegs, score {score:.2}, {latency_ms:.3} ms",
            path.len(),
            pegs.len()
        );
        Ok(PatternResult {
            pegs,
            path,
            score,
            used_fallback_scorer: outcome.used_fallback_scorer,
            degenerate: outcome.degenerate,
            cancelled: outcome.cancelled || cancel.is_cancelled(),
            lines_requested: self.params.synth.max_lines,
            latency_ms,
            edge_map,
        })
    }
}
