use crate::error::Error;

/// Number of channels per pixel in the input buffer (RGBA8)
pub(crate) const CHANNELS: usize = 4;

/// A decoded raster image in RGBA8, row-major order
///
/// This is the shape the codec consumes; how it is obtained (decoding,
/// scaling, color-mode selection) is the caller's responsibility. The
/// constructor validates the buffer once so every later stage can assume
/// `pixels.len() == width * height * 4`.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PixelBuffer {
    /// The width of the image
    width: u32,
    /// The height of the image
    height: u32,
    /// RGBA8 pixel data, 4 bytes per pixel
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a new [`PixelBuffer`], failing fast on malformed input
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is zero, or if `pixels` does
    /// not hold exactly `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, Error> {
        if width == 0 {
            return Err(Error::ZeroDimension { dimension: "width" });
        }
        if height == 0 {
            return Err(Error::ZeroDimension {
                dimension: "height",
            });
        }
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the width of the image
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw RGBA8 bytes
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Iterates over `[r, g, b, a]` quadruples in row-major order
    pub fn rgba_iter(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.pixels.chunks_exact(CHANNELS).map(|c| {
            let mut px = [0u8; CHANNELS];
            px.copy_from_slice(c);
            px
        })
    }
}

/// 1-bit-per-pixel luminance map, row-major, one entry per source pixel
///
/// Intermediate artifact of the monochrome path: produced by
/// [`binarize`](crate::codec::binarize()), consumed by
/// [`pack`](crate::codec::pack()). Each entry is 0 or 1.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct LuminanceMap {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl LuminanceMap {
    pub(crate) fn new(width: u32, height: u32, bits: Vec<u8>) -> Self {
        debug_assert_eq!(width as usize * height as usize, bits.len());
        Self {
            width,
            height,
            bits,
        }
    }

    /// Returns the width of the map
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the map
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the 0/1 entries in row-major order
    #[must_use]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}
