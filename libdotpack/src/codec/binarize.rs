use tracing::{instrument, trace};

use crate::codec::buffer::{LuminanceMap, PixelBuffer};

// ITU-R BT.601 luma weights, the same coefficients the legacy tooling uses
const R_WEIGHT: f64 = 0.299;
const G_WEIGHT: f64 = 0.587;
const B_WEIGHT: f64 = 0.114;

/// Thresholds an RGBA image into a 1-bit-per-pixel [`LuminanceMap`]
///
/// Luminance is the weighted sum `0.299 R + 0.587 G + 0.114 B`; alpha is
/// ignored. A pixel maps to 1 if its luminance is strictly greater than
/// `threshold`, 0 otherwise, so a pixel whose luminance equals the threshold
/// yields 0.
#[instrument(skip(buffer), level = "trace")]
#[must_use]
pub fn binarize(buffer: &PixelBuffer, threshold: u8) -> LuminanceMap {
    let threshold = f64::from(threshold);
    let bits = buffer
        .rgba_iter()
        .map(|[r, g, b, _]| {
            let luma = f64::from(r) * R_WEIGHT + f64::from(g) * G_WEIGHT + f64::from(b) * B_WEIGHT;
            u8::from(luma > threshold)
        })
        .collect::<Vec<_>>();
    trace!("binarized {} pixels", bits.len());
    LuminanceMap::new(buffer.width(), buffer.height(), bits)
}
