//! 3×3 weighted-average smoothing.
//!
//! Kernel weights: 4 at the center, 2 at edge-adjacent neighbors, 1 at the
//! corners, normalized by the sum 16. The one-pixel border is not processed
//! and stays at the default 0.

use crate::image::GrayView;

type Kernel3 = [[f32; 3]; 3];

const SMOOTH_KERNEL: Kernel3 = [[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]];
const KERNEL_NORM: f32 = 1.0 / 16.0;

/// Smooth an 8-bit grid into a float buffer of the same dimensions.
pub fn smooth_3x3(gray: &GrayView<'_>) -> Vec<f32> {
    let w = gray.w;
    let h = gray.h;
    let mut out = vec![0.0f32; w * h];
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let rows = [gray.row(y - 1), gray.row(y), gray.row(y + 1)];
        for x in 1..w - 1 {
            let mut sum = 0.0f32;
            for (ky, row) in rows.iter().enumerate() {
                let kr = &SMOOTH_KERNEL[ky];
                sum += row[x - 1] as f32 * kr[0] + row[x] as f32 * kr[1] + row[x + 1] as f32 * kr[2];
            }
            out[y * w + x] = sum * KERNEL_NORM;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(w: usize, h: usize, data: &[u8]) -> GrayView<'_> {
        GrayView {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[test]
    fn uniform_interior_is_preserved() {
        let data = vec![100u8; 5 * 5];
        let out = smooth_3x3(&view(5, 5, &data));
        assert!((out[2 * 5 + 2] - 100.0).abs() < 1e-4);
    }

    #[test]
    fn border_stays_at_default() {
        let data = vec![255u8; 5 * 5];
        let out = smooth_3x3(&view(5, 5, &data));
        assert_eq!(out[0], 0.0);
        assert_eq!(out[4], 0.0);
        assert_eq!(out[4 * 5], 0.0);
        assert_eq!(out[4 * 5 + 4], 0.0);
    }

    #[test]
    fn isolated_spike_is_attenuated() {
        let mut data = vec![0u8; 5 * 5];
        data[2 * 5 + 2] = 160;
        let out = smooth_3x3(&view(5, 5, &data));
        // Center keeps 4/16 of the spike, direct neighbors 2/16.
        assert!((out[2 * 5 + 2] - 40.0).abs() < 1e-4);
        assert!((out[2 * 5 + 1] - 20.0).abs() < 1e-4);
        assert!((out[5 + 1] - 10.0).abs() < 1e-4);
    }

    #[test]
    fn tiny_images_are_all_default() {
        let data = vec![200u8; 2 * 2];
        let out = smooth_3x3(&view(2, 2, &data));
        assert!(out.iter().all(|&v| v == 0.0));
    }
}
