use edge_detector::image::RgbImageU8;

/// Generates a uniform RGB image where every pixel is `value`.
pub fn uniform_rgb(width: usize, height: usize, value: u8) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RgbImageU8::from_raw(width, height, vec![value; width * height * 3])
}

/// Generates a hard vertical edge: columns left of `split` are `left`,
/// the rest are `right` (all channels equal).
pub fn vertical_step_rgb(width: usize, height: usize, split: usize, left: u8, right: u8) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(split <= width, "split must lie within the image");

    let mut img = RgbImageU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = if x < split { left } else { right };
            img.set_pixel(x, y, [v, v, v]);
        }
    }
    img
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = RgbImageU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let v = if sum % 2 == 0 { 32u8 } else { 220u8 };
            img.set_pixel(x, y, [v, v, v]);
        }
    }
    img
}
