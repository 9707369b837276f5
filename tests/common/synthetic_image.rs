use edge_maps::ImageF32;

/// Deterministic pseudo-random image with samples in `[0, 255)`.
pub fn noise_f32(width: usize, height: usize, seed: u64) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let data = (0..width * height)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 255) as f32
        })
        .collect();
    ImageF32::from_vec(width, height, data).expect("length matches dimensions")
}

/// Horizontal ramp: value equals the column index.
pub fn ramp_x(width: usize, height: usize) -> ImageF32 {
    let mut img = ImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, x as f32);
        }
    }
    img
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_f32(width: usize, height: usize, cell: usize) -> ImageF32 {
    assert!(cell > 0, "cell size must be positive");
    let mut img = ImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let val = if ((x / cell) + (y / cell)) & 1 == 0 {
                32.0
            } else {
                220.0
            };
            img.set(x, y, val);
        }
    }
    img
}
