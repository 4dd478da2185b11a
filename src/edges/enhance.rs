//! Edge enhancement: majority-neighbor dilation.
//!
//! One pass promotes a nonzero pixel to maximum intensity when at least 4 of
//! its 8 neighbors are already nonzero. Repeated passes thicken and close
//! connected edge runs while leaving isolated speckles untouched.

/// One dilation pass over a row-major `w × h` grid.
pub fn dilate_pass(src: &[u8], w: usize, h: usize) -> Vec<u8> {
    debug_assert_eq!(src.len(), w * h);
    let mut out = src.to_vec();

    for y in 0..h {
        for x in 0..w {
            if src[y * w + x] == 0 {
                continue;
            }
            let mut nonzero = 0usize;
            for dy in -1isize..=1 {
                let ny = y as isize + dy;
                if ny < 0 || ny >= h as isize {
                    continue;
                }
                for dx in -1isize..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x as isize + dx;
                    if nx < 0 || nx >= w as isize {
                        continue;
                    }
                    if src[ny as usize * w + nx as usize] != 0 {
                        nonzero += 1;
                    }
                }
            }
            if nonzero >= 4 {
                out[y * w + x] = 255;
            }
        }
    }
    out
}
