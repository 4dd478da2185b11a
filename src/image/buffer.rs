//! Owned 8-bit grayscale buffer with borrowed view conversion.

use super::view::GrayView;

#[derive(Clone, Debug)]
pub struct GrayBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Construct an owned grayscale buffer from raw row-major bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only [`GrayView`].
    pub fn as_view(&self) -> GrayView<'_> {
        GrayView {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}
