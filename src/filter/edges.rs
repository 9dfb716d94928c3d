//! Sobel edge detection.
//!
//! Each channel is convolved with the horizontal and vertical Sobel kernels;
//! out-of-bounds neighbors contribute nothing. The output channel is the
//! rounded gradient magnitude `sqrt(gx^2 + gy^2)`, capped at 255.

use super::window3x3;
use crate::pixel::{ColorTriple, PixelGrid};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Replace every pixel with its per-channel Sobel gradient magnitude.
pub fn edges(grid: &mut PixelGrid) {
    let source = grid.clone();
    let (height, width) = (source.height(), source.width());
    let src = source.pixels();

    for (row, out) in grid.rows_mut().enumerate() {
        for (col, px) in out.iter_mut().enumerate() {
            // [b, g, r]
            let mut gx = [0i32; 3];
            let mut gy = [0i32; 3];
            for (ky, kx, r, c) in window3x3(height, width, row, col) {
                let n = src[r * width + c];
                let wx = SOBEL_KERNEL_X[ky][kx];
                let wy = SOBEL_KERNEL_Y[ky][kx];
                for (i, v) in [n.b, n.g, n.r].into_iter().enumerate() {
                    gx[i] += wx * i32::from(v);
                    gy[i] += wy * i32::from(v);
                }
            }
            *px = ColorTriple {
                b: magnitude(gx[0], gy[0]),
                g: magnitude(gx[1], gy[1]),
                r: magnitude(gx[2], gy[2]),
            };
        }
    }
}

/// `round(sqrt(gx^2 + gy^2))` capped at 255, in integer arithmetic.
///
/// `sqrt(n)` rounds up past `r = isqrt(n)` exactly when `n >= r^2 + r + 1/4`,
/// i.e. `n - r^2 > r` for integer `n`; there are no ties.
fn magnitude(gx: i32, gy: i32) -> u8 {
    let n = gx.unsigned_abs().pow(2) + gy.unsigned_abs().pow(2);
    let r = n.isqrt();
    let rounded = if n - r * r > r { r + 1 } else { r };
    rounded.min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::test_util::{grid_of, reds};

    #[test]
    fn magnitude_rounds_and_caps() {
        assert_eq!(magnitude(0, 0), 0);
        assert_eq!(magnitude(1, 1), 1); // 1.41
        assert_eq!(magnitude(2, 2), 3); // 2.83
        assert_eq!(magnitude(-3, 4), 5);
        assert_eq!(magnitude(2, 1), 2); // 2.24
        assert_eq!(magnitude(1020, -1020), 255);
        assert_eq!(magnitude(255, 0), 255);
        assert_eq!(magnitude(256, 0), 255);
    }

    #[test]
    fn single_pixel_has_no_gradient() {
        let mut grid = grid_of(1, 1, &[200]);
        edges(&mut grid);
        assert_eq!(reds(&grid), [0]);
    }

    #[test]
    fn flat_field_has_edges_only_on_the_border() {
        let mut grid = grid_of(4, 3, &[10; 12]);
        edges(&mut grid);
        // Missing neighbors leave a one-sided gradient: corners see
        // gx = gy = 3v (42.4), other border cells 4v along one axis.
        #[rustfmt::skip]
        let expected: [u8; 12] = [
            42, 40, 40, 42,
            40,  0,  0, 40,
            42, 40, 40, 42,
        ];
        assert_eq!(reds(&grid), expected);
    }

    #[test]
    fn bright_flat_field_saturates_the_border() {
        let mut grid = grid_of(4, 3, &[77; 12]);
        edges(&mut grid);
        #[rustfmt::skip]
        let expected: [u8; 12] = [
            255, 255, 255, 255,
            255,   0,   0, 255,
            255, 255, 255, 255,
        ];
        assert_eq!(reds(&grid), expected);
    }

    #[test]
    fn horizontal_step_saturates() {
        let mut grid = grid_of(2, 1, &[0, 255]);
        edges(&mut grid);
        // left: gx = 2 * 255; right: only its dark left neighbor weighs in
        assert_eq!(reds(&grid), [255, 0]);
    }

    #[test]
    fn diagonal_gradients_round() {
        let mut grid = grid_of(2, 2, &[0, 1, 1, 0]);
        edges(&mut grid);
        // (0,0): gx = gy = 2 -> 2.83; (0,1): gx = -1, gy = 1 -> 1.41
        assert_eq!(reds(&grid), [3, 1, 1, 3]);
    }
}
