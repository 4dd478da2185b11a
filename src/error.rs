//! Input-validation errors raised before any computation starts.
//!
//! A missing edge map and a degenerate (empty or near-empty) path are *not*
//! errors: both are legitimate terminal states reported as flags on
//! [`crate::synth::SynthOutcome`] and [`crate::types::PatternResult`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("peg count must be positive")]
    InvalidPegCount,

    #[error("canvas dimensions must be positive and finite, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("polygon shape requires at least 3 sides, got {0}")]
    InvalidPolygon(usize),

    #[error("star shape requires at least 2 points, got {0}")]
    InvalidStar(usize),

    #[error("custom shape requires a non-empty point list")]
    EmptyCustomShape,

    #[error("non-finite coordinate in custom point list at index {index}")]
    NonFiniteCoordinate { index: usize },

    #[error("intensity grid must be non-empty")]
    EmptyImage,

    #[error("intensity grid is {actual_w}x{actual_h} but the canvas is {canvas_w}x{canvas_h}")]
    CanvasMismatch {
        actual_w: usize,
        actual_h: usize,
        canvas_w: usize,
        canvas_h: usize,
    },
}
