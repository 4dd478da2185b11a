//! Path Synthesizer: greedy thread-path construction.
//!
//! Starting at peg 0, each step scans every other peg and connects to the
//! one whose segment covers the most edge intensity, subject to:
//!
//! - circular neighbor avoidance (no trivial adjacent-peg segments, both
//!   sides of the ring),
//! - no reuse of an already-threaded connection (normalized key),
//! - a 0.7 score penalty on pegs that already carry thread (discourages hub
//!   formation),
//! - a minimal-quality cutoff below which the walk stops early.
//!
//! With a fixed edge map, peg layout and parameters the walk is fully
//! deterministic: ties resolve to the lowest candidate id and no hidden
//! randomness is on this path. Without an edge map a randomized fallback
//! scorer keeps the loop runnable for isolated testing; that mode is
//! non-deterministic by construction and flagged on the outcome.
//!
//! A stop before `max_lines` (no candidate, or best score under the cutoff)
//! yields a shorter path, which is a valid outcome, not an error.

pub mod score;
pub mod session;

pub use score::{fallback_line_score, line_score, MIN_SEGMENT_LENGTH};
pub use session::SynthSession;

use crate::cancel::CancelToken;
use crate::edges::EdgeMap;
use crate::types::{Connection, Path, Peg};
use log::{debug, warn};
use rand::Rng;
use serde::Deserialize;

/// Score multiplier for candidates that already carry thread.
const REUSE_PENALTY: f32 = 0.7;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SynthParams {
    /// Upper bound on the number of connections to emit.
    pub max_lines: usize,
    /// Minimum circular peg-index separation allowed for a connection.
    pub neighbor_avoidance: usize,
    /// The walk stops once the best candidate scores below this.
    pub score_cutoff: f32,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            max_lines: 200,
            neighbor_avoidance: 3,
            score_cutoff: 10.0,
        }
    }
}

/// Result of one synthesis run.
#[derive(Clone, Debug)]
pub struct SynthOutcome {
    pub path: Path,
    /// No edge map was supplied; scores came from the randomized fallback.
    pub used_fallback_scorer: bool,
    /// The run ended empty or near-empty with lines still requested.
    pub degenerate: bool,
    /// The run was aborted via the cancel token; `path` holds the partial
    /// result built so far.
    pub cancelled: bool,
}

/// Grow a thread path over `pegs`, greedily maximizing the line score.
pub fn synthesize(
    pegs: &[Peg],
    edge: Option<&EdgeMap>,
    params: &SynthParams,
    cancel: &CancelToken,
) -> SynthOutcome {
    let mut path = Path::new();
    let mut cancelled = false;

    if pegs.len() >= 2 && params.max_lines > 0 {
        if edge.is_none() {
            warn!("synthesize: no edge map, falling back to randomized scoring (reduced fidelity)");
        }
        let mut session = SynthSession::new(0);
        let mut rng = rand::rng();

        for step in 0..params.max_lines {
            if cancel.is_cancelled() {
                debug!("synthesize: cancelled at step {step} with {} lines", path.len());
                cancelled = true;
                break;
            }
            let Some((best, best_score)) = best_candidate(pegs, edge, &session, params, &mut rng)
            else {
                debug!("synthesize: no eligible candidate at step {step}");
                break;
            };
            if best_score < params.score_cutoff {
                debug!(
                    "synthesize: best score {best_score:.2} under cutoff {:.2} at step {step}",
                    params.score_cutoff
                );
                break;
            }
            let conn = Connection::new(&pegs[session.current], &pegs[best]);
            session.accept(conn.from_id, conn.to_id);
            path.push(conn);
        }
    }

    let degenerate = !cancelled && path.len() <= 1 && params.max_lines > 1;
    SynthOutcome {
        path,
        used_fallback_scorer: edge.is_none(),
        degenerate,
        cancelled,
    }
}

/// Highest-scoring eligible candidate from the current peg, lowest id on
/// ties. `None` when every peg is excluded.
fn best_candidate(
    pegs: &[Peg],
    edge: Option<&EdgeMap>,
    session: &SynthSession,
    params: &SynthParams,
    rng: &mut impl Rng,
) -> Option<(usize, f32)> {
    let n = pegs.len();
    let current = session.current;
    let mut best: Option<(usize, f32)> = None;

    for j in 0..n {
        if j == current {
            continue;
        }
        let diff = current.abs_diff(j);
        if diff.min(n - diff) <= params.neighbor_avoidance {
            continue;
        }
        if session.is_used(current, j) {
            continue;
        }

        let raw = match edge {
            Some(map) => line_score(pegs[current].pos(), pegs[j].pos(), map),
            None => fallback_line_score(pegs[current].pos(), pegs[j].pos(), rng),
        };
        let scored = if session.usage_count(j) > 0 {
            raw * REUSE_PENALTY
        } else {
            raw
        };

        // Strict comparison keeps the lowest id on ties.
        match best {
            Some((_, s)) if scored <= s => {}
            _ => best = Some((j, scored)),
        }
    }
    best
}
