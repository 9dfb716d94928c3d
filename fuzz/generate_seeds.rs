#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, fill: u8) -> Vec<u8> {
    let stride = (width as usize * 3).div_ceil(4) * 4;
    let image_size = stride * height.unsigned_abs() as usize;
    let mut out = vec![0u8; 54 + image_size];
    out[0] = b'B';
    out[1] = b'M';
    out[2..6].copy_from_slice(&((54 + image_size) as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    out[34..38].copy_from_slice(&(image_size as u32).to_le_bytes());
    for row in 0..height.unsigned_abs() as usize {
        let start = 54 + row * stride;
        out[start..start + width as usize * 3].fill(fill);
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // One seed per padding amount
    for width in 1..=4 {
        fs::write(format!("{dir}/bmp_{width}x2.bmp"), bmp(width, 2, 0x80)).unwrap();
    }
    fs::write(format!("{dir}/bmp_topdown_3x3.bmp"), bmp(3, -3, 0xff)).unwrap();

    // Truncated/malformed seeds for edge coverage
    let full = bmp(5, 5, 0x40);
    fs::write(format!("{dir}/bmp_truncated.bmp"), &full[..full.len() - 10]).unwrap();
    let mut bad_magic = bmp(2, 2, 0);
    bad_magic[..2].copy_from_slice(&[0, 0]);
    fs::write(format!("{dir}/bad_magic.bin"), bad_magic).unwrap();
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
