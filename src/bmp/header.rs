//! BITMAPFILEHEADER and BITMAPINFOHEADER, read and written field by field
//! in little-endian order with no gaps.

/// Byte offset of the pixel data: both headers, no color table.
pub const PIXEL_DATA_OFFSET: u32 = 54;

/// Bytes per stored pixel.
pub(crate) const BYTES_PER_PIXEL: usize = 3;

/// Padding bytes after each row so that a row occupies a multiple of 4 bytes.
pub fn row_padding(width: usize) -> usize {
    (4 - (width * BYTES_PER_PIXEL) % 4) % 4
}

/// On-disk length of one padded row.
pub fn row_stride(width: usize) -> usize {
    width * BYTES_PER_PIXEL + row_padding(width)
}

// ── Little-endian field cursor ──────────────────────────────────────

struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        buf
    }

    fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }
}

struct FieldWriter<const N: usize> {
    buf: [u8; N],
    pos: usize,
}

impl<const N: usize> FieldWriter<N> {
    fn new() -> Self {
        Self {
            buf: [0u8; N],
            pos: 0,
        }
    }

    fn put(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        self
    }

    fn finish(&self) -> [u8; N] {
        debug_assert_eq!(self.pos, N);
        self.buf
    }
}

// ── File header ─────────────────────────────────────────────────────

/// The 14-byte BITMAPFILEHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Must be `b"BM"`.
    pub signature: [u8; 2],
    /// Total file size in bytes.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset from the start of the file to the pixel data.
    pub pixel_offset: u32,
}

impl FileHeader {
    pub const SIZE: usize = 14;
    pub const SIGNATURE: [u8; 2] = *b"BM";

    pub fn parse(bytes: &[u8; FileHeader::SIZE]) -> Self {
        let mut r = FieldReader::new(bytes);
        Self {
            signature: r.take(),
            file_size: r.u32(),
            reserved1: r.u16(),
            reserved2: r.u16(),
            pixel_offset: r.u32(),
        }
    }

    pub fn to_bytes(&self) -> [u8; FileHeader::SIZE] {
        FieldWriter::<{ FileHeader::SIZE }>::new()
            .put(&self.signature)
            .put(&self.file_size.to_le_bytes())
            .put(&self.reserved1.to_le_bytes())
            .put(&self.reserved2.to_le_bytes())
            .put(&self.pixel_offset.to_le_bytes())
            .finish()
    }
}

// ── Info header ─────────────────────────────────────────────────────

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    /// Must be 40.
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up storage, negative for top-down.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub const SIZE: usize = 40;

    pub fn parse(bytes: &[u8; InfoHeader::SIZE]) -> Self {
        let mut r = FieldReader::new(bytes);
        Self {
            header_size: r.u32(),
            width: r.i32(),
            height: r.i32(),
            planes: r.u16(),
            bit_count: r.u16(),
            compression: r.u32(),
            image_size: r.u32(),
            x_pels_per_meter: r.i32(),
            y_pels_per_meter: r.i32(),
            colors_used: r.u32(),
            colors_important: r.u32(),
        }
    }

    pub fn to_bytes(&self) -> [u8; InfoHeader::SIZE] {
        FieldWriter::<{ InfoHeader::SIZE }>::new()
            .put(&self.header_size.to_le_bytes())
            .put(&self.width.to_le_bytes())
            .put(&self.height.to_le_bytes())
            .put(&self.planes.to_le_bytes())
            .put(&self.bit_count.to_le_bytes())
            .put(&self.compression.to_le_bytes())
            .put(&self.image_size.to_le_bytes())
            .put(&self.x_pels_per_meter.to_le_bytes())
            .put(&self.y_pels_per_meter.to_le_bytes())
            .put(&self.colors_used.to_le_bytes())
            .put(&self.colors_important.to_le_bytes())
            .finish()
    }

    /// Rows are stored first-row-on-top when the height is negative.
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    /// Headers for a freshly laid out bottom-up 24-bit image.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let stride = row_stride(width as usize) as u32;
        Self {
            header_size: InfoHeader::SIZE as u32,
            width: width as i32,
            height: height as i32,
            planes: 1,
            bit_count: 24,
            compression: 0,
            image_size: stride.wrapping_mul(height),
            x_pels_per_meter: 2835, // 72 DPI
            y_pels_per_meter: 2835,
            colors_used: 0,
            colors_important: 0,
        }
    }
}

impl FileHeader {
    /// File header matching [`InfoHeader::for_dimensions`].
    pub fn for_info(info: &InfoHeader) -> Self {
        Self {
            signature: Self::SIGNATURE,
            file_size: PIXEL_DATA_OFFSET.wrapping_add(info.image_size),
            reserved1: 0,
            reserved2: 0,
            pixel_offset: PIXEL_DATA_OFFSET,
        }
    }
}
