//! Grayscale pixel containers for the pipeline.
//!
//! The core consumes a borrowed [`GrayView`] so callers own the decoded
//! bytes; [`GrayBuffer`] is the owned counterpart used by io helpers and
//! tests. Image decoding itself stays with the caller – decode failures must
//! be surfaced before this crate is invoked.

pub mod buffer;
pub mod io;
pub mod view;

pub use self::buffer::GrayBuffer;
pub use self::io::{load_grayscale, save_edge_map_png, write_json_file};
pub use self::view::GrayView;
