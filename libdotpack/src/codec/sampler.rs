use tracing::{debug, instrument};

use crate::codec::buffer::LuminanceMap;
use crate::codec::{Layout, PackedBitmap};
use crate::config::SamplingMode;

/// Pixels per page along the traversal axis
const PAGE: usize = 8;

impl SamplingMode {
    /// Number of bytes one page occupies in the output buffer
    #[must_use]
    pub fn bytes_per_page(self, width: u32, height: u32) -> usize {
        match self {
            Self::Row | Self::RowCol => (width as usize).div_ceil(PAGE),
            Self::Col | Self::ColRow => (height as usize).div_ceil(PAGE),
        }
    }

    /// Total size of the packed buffer for a `width` x `height` image
    #[must_use]
    pub fn buffer_len(self, width: u32, height: u32) -> usize {
        match self {
            Self::Row | Self::RowCol => self.bytes_per_page(width, height) * height as usize,
            Self::Col | Self::ColRow => self.bytes_per_page(width, height) * width as usize,
        }
    }

    // Byte position of pixel (x, y) in the packed buffer. These formulas are
    // the firmware contract; see the mode table in the crate docs.
    fn byte_pos(self, x: usize, y: usize, width: usize, height: usize) -> usize {
        match self {
            Self::Row => y * width.div_ceil(PAGE) + x / PAGE,
            Self::Col => x * height.div_ceil(PAGE) + y / PAGE,
            Self::ColRow => x + (y / PAGE) * width,
            Self::RowCol => (x / PAGE) * height + y,
        }
    }

    // Bit offset within the byte: position along the paged axis, mod 8
    fn bit_offset(self, x: usize, y: usize) -> usize {
        match self {
            Self::Row | Self::RowCol => x % PAGE,
            Self::Col | Self::ColRow => y % PAGE,
        }
    }
}

/// Packs a [`LuminanceMap`] into bytes according to a [`SamplingMode`]
///
/// Each group of up to 8 pixels along the traversal axis (a "page") maps to
/// one output byte. Without `reverse_bit_order` a pixel's bit lands at
/// `1 << offset` (LSB-first); with it, at `1 << (7 - offset)`. The pixel
/// value is inverted first when `invert_polarity` is set.
///
/// Bit-set convention of the format: a pixel value of 0 (after any
/// inversion) SETS the corresponding bit, a value of 1 CLEARS it. This is
/// inverted relative to "1 means lit" intuition and must be preserved
/// bit-for-bit for the firmware that consumes these buffers.
#[instrument(skip(map), level = "trace")]
#[must_use]
pub fn pack(
    map: &LuminanceMap,
    mode: SamplingMode,
    reverse_bit_order: bool,
    invert_polarity: bool,
) -> PackedBitmap {
    let (width, height) = (map.width(), map.height());
    let (w, h) = (width as usize, height as usize);
    let mut bytes = vec![0u8; mode.buffer_len(width, height)];
    debug!(
        "packing {w}x{h} map into {} bytes ({} per page)",
        bytes.len(),
        mode.bytes_per_page(width, height)
    );

    for (i, &bit) in map.bits().iter().enumerate() {
        let (x, y) = (i % w, i / w);
        let offset = mode.bit_offset(x, y);
        let shift = if reverse_bit_order {
            PAGE - 1 - offset
        } else {
            offset
        };
        let mask = 1u8 << shift;
        let pixel = if invert_polarity { 1 - bit } else { bit };
        let pos = mode.byte_pos(x, y, w, h);
        if pixel == 0 {
            bytes[pos] |= mask;
        } else {
            bytes[pos] &= !mask;
        }
    }

    let bytes_per_page = mode.bytes_per_page(width, height);
    let page_count = bytes.len() / bytes_per_page;
    PackedBitmap::new(
        width,
        height,
        Layout::Mono(mode),
        bytes_per_page,
        page_count,
        bytes,
    )
}
