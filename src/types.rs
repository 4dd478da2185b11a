//! Core value types shared by the pipeline stages.

use crate::geometry::distance;
use serde::Serialize;

/// Fixed anchor point on the canvas boundary that a thread winds around.
///
/// Ids are contiguous `0..N` within one layout and are never reused during
/// a run.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Peg {
    pub id: usize,
    pub x: f32,
    pub y: f32,
}

impl Peg {
    pub fn new(id: usize, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    #[inline]
    pub fn pos(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// One straight thread segment between two pegs.
///
/// Endpoint coordinates are carried alongside the ids so that refinement can
/// drift them off the exact peg position; the ids always report the
/// originating pegs.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from_id: usize,
    pub to_id: usize,
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub length: f32,
}

impl Connection {
    pub fn new(from: &Peg, to: &Peg) -> Self {
        let p0 = from.pos();
        let p1 = to.pos();
        Self {
            from_id: from.id,
            to_id: to.id,
            from: p0,
            to: p1,
            length: distance(p0, p1),
        }
    }

    /// Normalized `(min, max)` id pair used for duplicate detection.
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        normalized_key(self.from_id, self.to_id)
    }

    /// Replace the end point, recomputing the cached length.
    pub fn set_end(&mut self, to: [f32; 2]) {
        self.to = to;
        self.length = distance(self.from, self.to);
    }
}

/// Canonical unordered key for a peg id pair.
#[inline]
pub fn normalized_key(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

/// Ordered sequence of connections forming a walk: each connection starts at
/// the peg the previous one ended on, and no two connections share a
/// normalized key.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Path {
    pub connections: Vec<Connection>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn push(&mut self, conn: Connection) {
        self.connections.push(conn);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Connection> {
        self.connections.iter()
    }

    /// Compact `(from_id, to_id)` pairs for persistence and export
    /// collaborators.
    pub fn to_id_pairs(&self) -> Vec<(usize, usize)> {
        self.connections
            .iter()
            .map(|c| (c.from_id, c.to_id))
            .collect()
    }

    /// Rebuild connections from id pairs and the originating peg list.
    ///
    /// The inverse of [`Path::to_id_pairs`] for pre-refinement paths, where
    /// endpoint coordinates still equal the peg positions. Pairs referencing
    /// unknown ids are skipped.
    pub fn from_id_pairs(pairs: &[(usize, usize)], pegs: &[Peg]) -> Self {
        let mut path = Path::new();
        for &(from_id, to_id) in pairs {
            let (Some(from), Some(to)) = (pegs.get(from_id), pegs.get(to_id)) else {
                continue;
            };
            // Ids double as indices: layouts emit pegs in id order.
            debug_assert_eq!(from.id, from_id);
            debug_assert_eq!(to.id, to_id);
            path.push(Connection::new(from, to));
        }
        path
    }

    /// Total thread length over all connections.
    pub fn total_length(&self) -> f32 {
        self.connections.iter().map(|c| c.length).sum()
    }
}

/// Result of one full generate → refine → evaluate run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternResult {
    pub pegs: Vec<Peg>,
    pub path: Path,
    /// Length-weighted mean line score; 0 for an empty path or a run
    /// without an edge map.
    pub score: f32,
    /// The randomized fallback scorer was used (no edge map): the pattern
    /// is unsuitable for real image fidelity.
    pub used_fallback_scorer: bool,
    /// The run terminated with an empty or near-empty path because no
    /// candidate scored above the cutoff.
    pub degenerate: bool,
    /// The run was aborted through a [`crate::CancelToken`]; the path is
    /// the valid partial result at the abort point.
    pub cancelled: bool,
    pub lines_requested: usize,
    pub latency_ms: f64,
    /// Edge map kept for display/debug collaborators.
    #[serde(skip)]
    pub edge_map: Option<crate::edges::EdgeMap>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_key_is_order_independent() {
        let a = Peg::new(3, 0.0, 0.0);
        let b = Peg::new(7, 30.0, 40.0);
        let ab = Connection::new(&a, &b);
        let ba = Connection::new(&b, &a);
        assert_eq!(ab.key(), (3, 7));
        assert_eq!(ab.key(), ba.key());
        assert!((ab.length - 50.0).abs() < 1e-4);
    }

    #[test]
    fn id_pair_round_trip_recovers_coordinates() {
        let pegs = vec![
            Peg::new(0, 10.0, 10.0),
            Peg::new(1, 90.0, 10.0),
            Peg::new(2, 90.0, 90.0),
        ];
        let mut path = Path::new();
        path.push(Connection::new(&pegs[0], &pegs[2]));
        path.push(Connection::new(&pegs[2], &pegs[1]));

        let rebuilt = Path::from_id_pairs(&path.to_id_pairs(), &pegs);
        assert_eq!(rebuilt, path);
    }

    #[test]
    fn unknown_ids_are_skipped_on_rebuild() {
        let pegs = vec![Peg::new(0, 0.0, 0.0), Peg::new(1, 5.0, 0.0)];
        let rebuilt = Path::from_id_pairs(&[(0, 1), (1, 9)], &pegs);
        assert_eq!(rebuilt.len(), 1);
    }
}
