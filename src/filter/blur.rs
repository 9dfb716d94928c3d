use super::window3x3;
use crate::pixel::{ColorTriple, PixelGrid};

/// Box blur: each pixel becomes the truncated mean of the in-bounds pixels
/// of its 3x3 neighborhood (9 inside, 6 on an edge, 4 in a corner).
pub fn blur(grid: &mut PixelGrid) {
    let source = grid.clone();
    let (height, width) = (source.height(), source.width());
    let src = source.pixels();

    for (row, out) in grid.rows_mut().enumerate() {
        for (col, px) in out.iter_mut().enumerate() {
            let mut sum = [0u32; 3];
            let mut count = 0u32;
            for (_, _, r, c) in window3x3(height, width, row, col) {
                let n = src[r * width + c];
                sum[0] += u32::from(n.b);
                sum[1] += u32::from(n.g);
                sum[2] += u32::from(n.r);
                count += 1;
            }
            // count >= 1: the centre is always in bounds.
            *px = ColorTriple {
                b: (sum[0] / count) as u8,
                g: (sum[1] / count) as u8,
                r: (sum[2] / count) as u8,
            };
        }
    }
}
