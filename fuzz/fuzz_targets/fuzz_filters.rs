#![no_main]
use bmpfilter::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let width = usize::from(selector >> 4) + 1;
    let height = usize::from(selector & 0x0f) + 1;
    let pixels: Vec<ColorTriple> = rest
        .chunks_exact(3)
        .take(width * height)
        .map(|c| ColorTriple { b: c[0], g: c[1], r: c[2] })
        .collect();
    let Some(grid) = PixelGrid::from_pixels(width, height, pixels) else {
        return;
    };

    for filter in [
        Filter::Grayscale,
        Filter::Reflect,
        Filter::Blur,
        Filter::Edges,
        Filter::Sepia,
    ] {
        let mut out = grid.clone();
        filter.apply(&mut out);
        assert_eq!((out.width(), out.height()), (width, height));
    }

    let mut mirrored = grid.clone();
    filter::reflect(&mut mirrored);
    filter::reflect(&mut mirrored);
    assert_eq!(mirrored, grid);
});
