use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libdotpack` errors
pub enum Error {
    /// Error returned if the pixel buffer length does not match
    /// the declared width/height
    #[error("pixel buffer holds {actual} bytes but {width}x{height} RGBA8 requires {expected}")]
    PixelCountMismatch {
        /// declared image width
        width: u32,
        /// declared image height
        height: u32,
        /// expected buffer length (width * height * 4)
        expected: usize,
        /// actual buffer length
        actual: usize,
    },
    /// Error returned if width or height is zero
    #[error("image {dimension} must be greater than zero")]
    ZeroDimension {
        /// which dimension was zero ("width" or "height")
        dimension: &'static str,
    },
    /// Error returned for an unrecognized legacy sampling mode code
    #[error("unrecognized sampling mode code {code} (valid: 0=row, 1=col, 2=col-row, 3=row-col)")]
    UnknownSamplingMode {
        /// the offending code
        code: u8,
    },
    /// Error returned for an unrecognized legacy output mode code
    #[error("unrecognized output mode code {code} (valid: 0=hex-prefixed, 1=raw-bytes)")]
    UnknownOutputMode {
        /// the offending code
        code: u8,
    },
    /// Error returned for an unrecognized legacy color mode code
    #[error("unrecognized color mode code {code} (valid: 0=color, 1=monochrome)")]
    UnknownColorMode {
        /// the offending code
        code: u8,
    },
}

impl Error {
    /// Returns `true` if the error concerns the pixel data handed to the codec
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::PixelCountMismatch { .. } | Self::ZeroDimension { .. }
        )
    }

    /// Returns `true` if the error concerns an encoding configuration value
    #[must_use]
    pub const fn is_invalid_config(&self) -> bool {
        matches!(
            self,
            Self::UnknownSamplingMode { .. }
                | Self::UnknownOutputMode { .. }
                | Self::UnknownColorMode { .. }
        )
    }
}
