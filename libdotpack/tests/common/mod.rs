use libdotpack::{Error, PixelBuffer};

pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Builds an RGBA buffer from 0/1 entries (1 = white, 0 = black), row-major
pub fn mono_buffer(width: u32, height: u32, bits: &[u8]) -> Result<PixelBuffer, Error> {
    assert_eq!(bits.len(), (width * height) as usize);
    let pixels = bits
        .iter()
        .flat_map(|&b| if b == 0 { BLACK } else { WHITE })
        .collect();
    PixelBuffer::new(width, height, pixels)
}

/// Builds an RGBA buffer from explicit pixel quadruples, row-major
pub fn rgba_buffer(width: u32, height: u32, px: &[[u8; 4]]) -> Result<PixelBuffer, Error> {
    assert_eq!(px.len(), (width * height) as usize);
    PixelBuffer::new(width, height, px.iter().flatten().copied().collect())
}

/// All-white bits except zeros at the given (x, y) coordinates
pub fn bits_with_zeros_at(width: u32, height: u32, zeros: &[(u32, u32)]) -> Vec<u8> {
    let mut bits = vec![1u8; (width * height) as usize];
    for &(x, y) in zeros {
        bits[(y * width + x) as usize] = 0;
    }
    bits
}
