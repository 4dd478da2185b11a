//! Post-passes over a generated peg list: edge snapping and validation.

use super::CanvasSize;
use crate::edges::EdgeMap;
use crate::geometry::distance;
use crate::types::Peg;

/// Relocate each peg within a `±window` px square to the position of locally
/// maximal edge intensity. Peg ids are unchanged; a peg stays put unless a
/// strictly stronger position exists.
pub fn snap_pegs_to_edges(pegs: &[Peg], edge: &EdgeMap, window: i32) -> Vec<Peg> {
    pegs.iter()
        .map(|peg| {
            let mut best = peg.pos();
            let mut best_score = edge.sample(peg.x, peg.y).unwrap_or(0);
            for dx in -window..=window {
                for dy in -window..=window {
                    let x = peg.x + dx as f32;
                    let y = peg.y + dy as f32;
                    if let Some(score) = edge.sample(x, y) {
                        if score > best_score {
                            best_score = score;
                            best = [x, y];
                        }
                    }
                }
            }
            Peg::new(peg.id, best[0], best[1])
        })
        .collect()
}

/// Accept pegs in id order, rejecting any peg outside the canvas or within
/// `min_distance` of an already-accepted peg.
///
/// The result may hold fewer than the requested pegs; ids are re-numbered
/// contiguously so downstream circular-index arithmetic stays valid.
pub fn validate_pegs(pegs: Vec<Peg>, canvas: &CanvasSize, min_distance: f32) -> Vec<Peg> {
    let mut accepted: Vec<Peg> = Vec::with_capacity(pegs.len());
    'candidates: for peg in pegs {
        if !canvas.contains(peg.pos()) {
            continue;
        }
        for kept in &accepted {
            if distance(peg.pos(), kept.pos()) < min_distance {
                continue 'candidates;
            }
        }
        accepted.push(Peg::new(accepted.len(), peg.x, peg.y));
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_moves_to_strongest_neighbor() {
        // Single bright pixel at (6, 5); peg sits at (5, 5).
        let mut data = vec![0u8; 10 * 10];
        data[5 * 10 + 6] = 200;
        let edge = EdgeMap::new(10, 10, data);
        let pegs = vec![Peg::new(0, 5.0, 5.0)];

        let snapped = snap_pegs_to_edges(&pegs, &edge, 3);
        assert_eq!(snapped[0].id, 0);
        assert_eq!(snapped[0].x, 6.0);
        assert_eq!(snapped[0].y, 5.0);
    }

    #[test]
    fn snap_keeps_position_on_flat_map() {
        let edge = EdgeMap::new(10, 10, vec![90u8; 100]);
        let pegs = vec![Peg::new(0, 4.0, 4.0)];
        let snapped = snap_pegs_to_edges(&pegs, &edge, 3);
        assert_eq!(snapped[0].pos(), [4.0, 4.0]);
    }

    #[test]
    fn validation_rejects_and_renumbers() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let pegs = vec![
            Peg::new(0, 10.0, 10.0),
            Peg::new(1, 11.0, 10.0),   // too close to peg 0
            Peg::new(2, -5.0, 50.0),   // out of bounds
            Peg::new(3, 90.0, 90.0),
        ];
        let kept = validate_pegs(pegs, &canvas, 5.0);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, 0);
        assert_eq!(kept[1].id, 1);
        assert_eq!(kept[1].pos(), [90.0, 90.0]);
    }
}
