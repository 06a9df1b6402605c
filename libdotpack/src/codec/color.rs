use tracing::{debug, instrument};

use crate::codec::buffer::PixelBuffer;
use crate::codec::{Layout, PackedBitmap};

/// Bytes emitted per pixel in the RGB565 layout
const BYTES_PER_PIXEL: usize = 2;

/// Packs an RGBA image directly into big-endian RGB565 bytes
///
/// Each pixel quantizes to 5 bits of red (`r >> 3`), 6 of green (`g >> 2`),
/// 5 of blue (`b >> 3`), combined as `r5 << 11 | g6 << 5 | b5` and emitted
/// high byte first, in source pixel order. Alpha is skipped. When
/// `invert_polarity` is set both emitted bytes are bitwise-complemented.
///
/// The color path has no configurable traversal: sampling mode and bit
/// order do not apply.
#[instrument(skip(buffer), level = "trace")]
#[must_use]
pub fn pack_rgb565(buffer: &PixelBuffer, invert_polarity: bool) -> PackedBitmap {
    let pixel_count = buffer.width() as usize * buffer.height() as usize;
    let mut bytes = Vec::with_capacity(pixel_count * BYTES_PER_PIXEL);

    for [r, g, b, _] in buffer.rgba_iter() {
        let color =
            (u16::from(r >> 3) << 11) | (u16::from(g >> 2) << 5) | u16::from(b >> 3);
        let [hi, lo] = color.to_be_bytes();
        if invert_polarity {
            bytes.push(!hi);
            bytes.push(!lo);
        } else {
            bytes.push(hi);
            bytes.push(lo);
        }
    }
    debug!("packed {pixel_count} pixels into {} RGB565 bytes", bytes.len());

    PackedBitmap::new(
        buffer.width(),
        buffer.height(),
        Layout::Rgb565,
        BYTES_PER_PIXEL,
        pixel_count,
        bytes,
    )
}
