/// Uniform intensity grid.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Dark left half, bright right half: one strong vertical edge at the split.
pub fn half_plane_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in width / 2..width {
            img[y * width + x] = 255;
        }
    }
    img
}
