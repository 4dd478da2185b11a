//! I/O helpers for the demo binary and tooling.
//!
//! - `load_grayscale`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_edge_map_png`: write an [`EdgeMap`] to a grayscale PNG for debug.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! None of these are called from the core pipeline: the library itself does
//! no file or network I/O.

use super::buffer::GrayBuffer;
use crate::edges::EdgeMap;
use ::image::{ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale(path: &Path) -> Result<GrayBuffer, String> {
    let img = ::image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayBuffer::new(width, height, img.into_raw()))
}

/// Save an edge map as a grayscale PNG.
pub fn save_edge_map_png(edge: &EdgeMap, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buf: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(edge.w as u32, edge.h as u32, edge.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    buf.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
