//! Hand-built BMP fixtures, written byte by byte independently of the encoder.

#![allow(dead_code)]

/// Raw 24-bit BMP with arbitrary header field values.
pub struct RawBmp {
    pub width: i32,
    pub height: i32,
    pub reserved: [u16; 2],
    pub resolution: [i32; 2],
    pub colors: [u32; 2],
    /// Blue, green, red per pixel, row-major in stored order.
    pub pixels: Vec<[u8; 3]>,
    /// Byte used for row padding (normally zero).
    pub pad_byte: u8,
}

impl RawBmp {
    pub fn new(width: i32, height: i32, pixels: Vec<[u8; 3]>) -> Self {
        assert_eq!(pixels.len(), (width * height.abs()) as usize);
        Self {
            width,
            height,
            reserved: [0, 0],
            resolution: [2835, 2835],
            colors: [0, 0],
            pixels,
            pad_byte: 0,
        }
    }

    pub fn padding(&self) -> usize {
        (4 - (self.width as usize * 3) % 4) % 4
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let w = self.width as usize;
        let h = self.height.unsigned_abs() as usize;
        let image_size = (w * 3 + self.padding()) * h;
        let file_size = 54 + image_size;

        let mut out = Vec::with_capacity(file_size);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&self.reserved[0].to_le_bytes());
        out.extend_from_slice(&self.reserved[1].to_le_bytes());
        out.extend_from_slice(&54u32.to_le_bytes());

        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&24u16.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(image_size as u32).to_le_bytes());
        out.extend_from_slice(&self.resolution[0].to_le_bytes());
        out.extend_from_slice(&self.resolution[1].to_le_bytes());
        out.extend_from_slice(&self.colors[0].to_le_bytes());
        out.extend_from_slice(&self.colors[1].to_le_bytes());

        for row in self.pixels.chunks_exact(w) {
            for px in row {
                out.extend_from_slice(px);
            }
            out.extend(std::iter::repeat_n(self.pad_byte, self.padding()));
        }
        out
    }
}

/// Deterministic pseudo-random pixels.
pub fn noise(width: i32, height: i32) -> Vec<[u8; 3]> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..(width * height.abs()))
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            [state as u8, (state >> 8) as u8, (state >> 16) as u8]
        })
        .collect()
}

pub fn solid(width: i32, height: i32, bgr: [u8; 3]) -> Vec<[u8; 3]> {
    vec![bgr; (width * height.abs()) as usize]
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
