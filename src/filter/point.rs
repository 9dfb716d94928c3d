//! Filters that depend on a single pixel only.

use crate::pixel::{ColorTriple, PixelGrid};

/// Replace each pixel with the truncated mean of its channels.
pub fn grayscale(grid: &mut PixelGrid) {
    for px in grid.pixels_mut() {
        let mean = ((u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3) as u8;
        *px = ColorTriple {
            b: mean,
            g: mean,
            r: mean,
        };
    }
}

/// Sepia tone, each channel computed from the original channels of the
/// same pixel, truncated and capped at 255.
pub fn sepia(grid: &mut PixelGrid) {
    for px in grid.pixels_mut() {
        let (r, g, b) = (f64::from(px.r), f64::from(px.g), f64::from(px.b));
        let red = 0.393 * r + 0.769 * g + 0.189 * b;
        let green = 0.349 * r + 0.686 * g + 0.168 * b;
        let blue = 0.272 * r + 0.534 * g + 0.131 * b;
        *px = ColorTriple {
            b: to_channel(blue),
            g: to_channel(green),
            r: to_channel(red),
        };
    }
}

// Never negative: all weights and inputs are.
#[inline]
fn to_channel(v: f64) -> u8 {
    v.min(255.0) as u8
}
