//! Sobel gradient magnitude over a smoothed float grid.
//!
//! Convolves the 3×3 Sobel kernel pair and reports the Euclidean magnitude
//! `sqrt(gx² + gy²)`. The one-pixel border mirrors the smoothing stage: it is
//! not processed and stays at 0.

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Gradient magnitude of a row-major `w × h` float grid.
pub fn sobel_magnitude(grid: &[f32], w: usize, h: usize) -> Vec<f32> {
    debug_assert_eq!(grid.len(), w * h);
    let mut out = vec![0.0f32; w * h];
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;
            for ky in 0..3 {
                let row = &grid[(y + ky - 1) * w..];
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                gx += row[x - 1] * kx_row[0] + row[x] * kx_row[1] + row[x + 1] * kx_row[2];
                gy += row[x - 1] * ky_row[0] + row[x] * ky_row[1] + row[x + 1] * ky_row[2];
            }
            out[y * w + x] = (gx * gx + gy * gy).sqrt();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_grid_has_zero_magnitude() {
        let grid = vec![42.0f32; 6 * 6];
        let out = sobel_magnitude(&grid, 6, 6);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn vertical_step_responds_with_horizontal_gradient() {
        let w = 8;
        let h = 6;
        let mut grid = vec![0.0f32; w * h];
        for y in 0..h {
            for x in w / 2..w {
                grid[y * w + x] = 100.0;
            }
        }
        let out = sobel_magnitude(&grid, w, h);
        // Sobel X on a clean step: |gx| = 400 at the step column.
        assert!((out[2 * w + w / 2] - 400.0).abs() < 1e-3);
        assert_eq!(out[2 * w + 1], 0.0);
    }

    #[test]
    fn degenerate_dimensions_yield_zero_grid() {
        let out = sobel_magnitude(&[1.0, 2.0], 2, 1);
        assert_eq!(out, vec![0.0, 0.0]);
    }
}
