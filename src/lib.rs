#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod cancel;
pub mod config;
pub mod edges;
pub mod error;
pub mod generator;
pub mod image;
pub mod types;

// Stage-level modules – public, but considered unstable internals.
pub mod geometry;
pub mod layout;
pub mod quality;
pub mod refine;
pub mod synth;

// --- High-level re-exports -------------------------------------------------

// Main entry point: generator + result.
pub use crate::generator::{GenerationParams, PatternGenerator};
pub use crate::types::{Connection, Path, PatternResult, Peg};

pub use crate::cancel::CancelToken;
pub use crate::error::Error;

// Stage entry points that are generally useful on their own.
pub use crate::edges::{build_edge_map, EdgeMap, EdgeOutput, EdgeParams};
pub use crate::layout::{generate_pegs, CanvasSize, Distribution, LayoutParams, Shape};
pub use crate::quality::evaluate_path;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::cancel::CancelToken;
    pub use crate::image::GrayView;
    pub use crate::{GenerationParams, PatternGenerator, PatternResult};
}
