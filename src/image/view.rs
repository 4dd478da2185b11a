//! Borrowed single-channel 8-bit view in row-major layout.

#[derive(Clone, Debug)]
pub struct GrayView<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows (equals `w` for tightly packed data).
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> GrayView<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}
