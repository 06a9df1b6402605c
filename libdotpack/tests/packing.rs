mod common;
use common::{bits_with_zeros_at, mono_buffer, rgba_buffer, BLACK, WHITE};

use libdotpack::{
    generate, generate_bitmap, ColorMode, Config, Error, Layout, PixelBuffer, SamplingMode,
};

#[test]
fn row_mode_packs_lsb_first_with_cleared_pixels_setting_bits() -> anyhow::Result<()> {
    // alternating white/black from the left; the black pixels (odd x) set
    // their bits
    let buffer = mono_buffer(8, 1, &[1, 0, 1, 0, 1, 0, 1, 0])?;

    let bitmap = generate_bitmap(&buffer, 128, &Config::default());
    assert_eq!(bitmap.as_bytes(), [0xAA]);
    assert_eq!(bitmap.layout(), Layout::Mono(SamplingMode::Row));
    assert_eq!(bitmap.bytes_per_page(), 1);
    assert_eq!(bitmap.page_count(), 1);

    let msb_first = Config::builder().reverse_bit_order(true).build();
    assert_eq!(generate_bitmap(&buffer, 128, &msb_first).as_bytes(), [0x55]);
    Ok(())
}

#[test]
fn bit_order_reversal_mirrors_every_byte() -> anyhow::Result<()> {
    let bits = bits_with_zeros_at(16, 2, &[(0, 0), (3, 0), (9, 0), (14, 1), (2, 1), (7, 1)]);
    let buffer = mono_buffer(16, 2, &bits)?;

    for mode in [
        SamplingMode::Row,
        SamplingMode::Col,
        SamplingMode::ColRow,
        SamplingMode::RowCol,
    ] {
        let lsb = generate_bitmap(
            &buffer,
            128,
            &Config::builder().sampling_mode(mode).build(),
        );
        let msb = generate_bitmap(
            &buffer,
            128,
            &Config::builder()
                .sampling_mode(mode)
                .reverse_bit_order(true)
                .build(),
        );
        let mirrored: Vec<u8> = lsb.as_bytes().iter().map(|b| b.reverse_bits()).collect();
        assert_eq!(msb.as_bytes(), mirrored, "mode {mode}");
    }
    Ok(())
}

#[test]
fn polarity_inversion_equals_packing_the_inverted_map() -> anyhow::Result<()> {
    let bits = bits_with_zeros_at(10, 3, &[(0, 0), (4, 1), (9, 2), (7, 0)]);
    let inverted: Vec<u8> = bits.iter().map(|&b| 1 - b).collect();

    let buffer = mono_buffer(10, 3, &bits)?;
    let inverted_buffer = mono_buffer(10, 3, &inverted)?;

    let with_flag = Config::builder().invert_polarity(true).build();
    assert_eq!(
        generate_bitmap(&buffer, 128, &with_flag).as_bytes(),
        generate_bitmap(&inverted_buffer, 128, &Config::default()).as_bytes()
    );

    // involutive: inverting the already-inverted map restores the original
    let twice: Vec<u8> = inverted.iter().map(|&b| 1 - b).collect();
    assert_eq!(twice, bits);
    Ok(())
}

#[test]
fn buffer_sizes_follow_the_mode_laws() -> anyhow::Result<()> {
    // 10x12, neither dimension a multiple of 8
    let buffer = mono_buffer(10, 12, &vec![1; 120])?;

    for (mode, len, per_page, pages) in [
        (SamplingMode::Row, 24, 2, 12),
        (SamplingMode::Col, 20, 2, 10),
        (SamplingMode::ColRow, 20, 2, 10),
        (SamplingMode::RowCol, 24, 2, 12),
    ] {
        let bitmap = generate_bitmap(
            &buffer,
            128,
            &Config::builder().sampling_mode(mode).build(),
        );
        assert_eq!(bitmap.as_bytes().len(), len, "mode {mode}");
        assert_eq!(bitmap.bytes_per_page(), per_page, "mode {mode}");
        assert_eq!(bitmap.page_count(), pages, "mode {mode}");
        assert_eq!(bitmap.width(), 10);
        assert_eq!(bitmap.height(), 12);
    }
    Ok(())
}

#[test]
fn col_mode_byte_positions() -> anyhow::Result<()> {
    // 2 wide, 9 tall: each column spans two bytes
    let bits = bits_with_zeros_at(2, 9, &[(0, 0), (0, 8), (1, 3)]);
    let buffer = mono_buffer(2, 9, &bits)?;

    let bitmap = generate_bitmap(
        &buffer,
        128,
        &Config::builder().sampling_mode(SamplingMode::Col).build(),
    );
    // (0,0) -> byte 0 bit 0; (0,8) -> byte 1 bit 0; (1,3) -> byte 2 bit 3
    assert_eq!(bitmap.as_bytes(), [0x01, 0x01, 0x08, 0x00]);
    Ok(())
}

#[test]
fn col_row_mode_byte_positions() -> anyhow::Result<()> {
    // 3 wide, 9 tall: two pages of 8 rows, byte index varies by column
    let bits = bits_with_zeros_at(3, 9, &[(0, 0), (1, 4), (2, 8)]);
    let buffer = mono_buffer(3, 9, &bits)?;

    let bitmap = generate_bitmap(
        &buffer,
        128,
        &Config::builder()
            .sampling_mode(SamplingMode::ColRow)
            .build(),
    );
    // (0,0) -> byte 0 bit 0; (1,4) -> byte 1 bit 4; (2,8) -> byte 5 bit 0
    assert_eq!(bitmap.as_bytes(), [0x01, 0x10, 0x00, 0x00, 0x00, 0x01]);
    Ok(())
}

#[test]
fn row_col_mode_byte_positions() -> anyhow::Result<()> {
    // 9 wide, 3 tall: two pages of 8 columns, byte index varies by row
    let bits = bits_with_zeros_at(9, 3, &[(0, 0), (4, 1), (8, 2)]);
    let buffer = mono_buffer(9, 3, &bits)?;

    let bitmap = generate_bitmap(
        &buffer,
        128,
        &Config::builder()
            .sampling_mode(SamplingMode::RowCol)
            .build(),
    );
    // (0,0) -> byte 0 bit 0; (4,1) -> byte 1 bit 4; (8,2) -> byte 5 bit 0
    assert_eq!(bitmap.as_bytes(), [0x01, 0x10, 0x00, 0x00, 0x00, 0x01]);
    Ok(())
}

#[test]
fn rgb565_packs_big_endian_and_ignores_sampling_flags() -> anyhow::Result<()> {
    let buffer = rgba_buffer(2, 1, &[[255, 0, 0, 255], WHITE])?;
    let color = Config::builder().color_mode(ColorMode::Color).build();

    let bitmap = generate_bitmap(&buffer, 0, &color);
    assert_eq!(bitmap.as_bytes(), [0xF8, 0x00, 0xFF, 0xFF]);
    assert_eq!(bitmap.layout(), Layout::Rgb565);
    assert_eq!(bitmap.bytes_per_page(), 2);
    assert_eq!(bitmap.page_count(), 2);

    // sampling mode and bit order have no effect on the color path
    let with_flags = Config::builder()
        .color_mode(ColorMode::Color)
        .sampling_mode(SamplingMode::ColRow)
        .reverse_bit_order(true)
        .build();
    assert_eq!(
        generate_bitmap(&buffer, 0, &with_flags).as_bytes(),
        bitmap.as_bytes()
    );

    // polarity complements both bytes of every pixel
    let inverted = Config::builder()
        .color_mode(ColorMode::Color)
        .invert_polarity(true)
        .build();
    assert_eq!(
        generate_bitmap(&buffer, 0, &inverted).as_bytes(),
        [0x07, 0xFF, 0x00, 0x00]
    );
    Ok(())
}

#[test]
fn color_mode_size_is_two_bytes_per_pixel() -> anyhow::Result<()> {
    let buffer = rgba_buffer(4, 4, &[[12, 200, 56, 255]; 16])?;
    let color = Config::builder().color_mode(ColorMode::Color).build();
    let bitmap = generate_bitmap(&buffer, 0, &color);
    assert_eq!(bitmap.as_bytes().len(), 4 * 4 * 2);
    Ok(())
}

#[test]
fn threshold_comparison_is_strictly_greater_than() -> anyhow::Result<()> {
    // black luminance is exactly 0.0; threshold 0 must yield a 0 bit
    let black = rgba_buffer(1, 1, &[BLACK])?;
    let bitmap = generate_bitmap(&black, 0, &Config::default());
    // a 0 pixel value sets the bit
    assert_eq!(bitmap.as_bytes(), [0x01]);

    // pure green: luminance 255 * 0.587 = 149.685
    let green = rgba_buffer(1, 1, &[[0, 255, 0, 255]])?;
    assert_eq!(
        generate_bitmap(&green, 149, &Config::default()).as_bytes(),
        [0x00],
        "149.685 > 149: pixel is set, bit cleared"
    );
    assert_eq!(
        generate_bitmap(&green, 150, &Config::default()).as_bytes(),
        [0x01],
        "149.685 <= 150: pixel is cleared, bit set"
    );
    Ok(())
}

#[test]
fn alpha_channel_is_ignored() -> anyhow::Result<()> {
    let opaque = rgba_buffer(1, 1, &[[200, 200, 200, 255]])?;
    let transparent = rgba_buffer(1, 1, &[[200, 200, 200, 0]])?;
    assert_eq!(
        generate_bitmap(&opaque, 128, &Config::default()).as_bytes(),
        generate_bitmap(&transparent, 128, &Config::default()).as_bytes()
    );
    Ok(())
}

#[test]
fn repeated_generation_is_byte_identical() -> anyhow::Result<()> {
    // synthesize a gradient image the way a decoder would hand one over
    let img = image::RgbaImage::from_fn(33, 17, |x, y| {
        image::Rgba([(x * 7) as u8, (y * 13) as u8, ((x + y) * 3) as u8, 255])
    });
    let buffer = PixelBuffer::new(img.width(), img.height(), img.into_raw())?;

    for codes in [[0, 0, 0, 0, 1], [1, 2, 1, 1, 1], [0, 3, 0, 0, 0]] {
        let config = Config::from_codes(codes)?;
        let first = generate(&buffer, 100, &config);
        let second = generate(&buffer, 100, &config);
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn malformed_buffers_fail_fast() {
    let err = PixelBuffer::new(0, 4, vec![]).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("width"));

    let err = PixelBuffer::new(4, 0, vec![]).unwrap_err();
    assert!(err.to_string().contains("height"));

    // 2x2 needs 16 bytes
    let err = PixelBuffer::new(2, 2, vec![0; 12]).unwrap_err();
    assert!(matches!(
        err,
        Error::PixelCountMismatch {
            expected: 16,
            actual: 12,
            ..
        }
    ));
}
