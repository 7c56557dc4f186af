//! Bitmap wire-format contract: packed rows, byte padding, MSB-first bits.

use tui_canvas::core::fb::FrameBuffer;
use tui_canvas::core::scene::{BitmapView, Scene};
use tui_canvas::core::{Bitmap, BitmapError};
use tui_canvas::types::Glyph;

#[test]
fn row_stride_is_width_rounded_up_to_bytes() {
    assert_eq!(Bitmap::row_stride(9), 2);
    assert_eq!(Bitmap::row_stride(7), 1);
    assert_eq!(Bitmap::row_stride(8), 1);
    assert_eq!(Bitmap::row_stride(17), 3);
}

#[test]
fn padding_bits_are_ignored() {
    // Width 9: the last 7 bits of each row's second byte are padding.
    let bmp = Bitmap::from_rows(9, 1, vec![0x00, 0xff]).unwrap();
    assert!(bmp.bit(8, 0));
    for x in 0..8 {
        assert!(!bmp.bit(x, 0), "column {} must be clear", x);
    }
    // Columns past the width read as unset even though bits are present.
    assert!(!bmp.bit(9, 0));
}

#[test]
fn parse_and_rasterize_a_small_image() {
    // 5x3 "U" shape.
    let bmp = Bitmap::parse_pbm(b"P4\n5 3\n\x88\x88\xf8").unwrap();
    assert_eq!(bmp.width(), 5);
    assert_eq!(bmp.height(), 3);

    let scene = BitmapView::new(bmp);
    let mut fb = FrameBuffer::new(11, 5);
    scene.draw(&mut fb);

    // Centered at x offset 3, y offset 1.
    let block = Glyph::Block.as_char();
    assert_eq!(fb.get(3, 1).unwrap().ch, block);
    assert_eq!(fb.get(7, 1).unwrap().ch, block);
    assert_ne!(fb.get(4, 1).unwrap().ch, block);
    for x in 3..8 {
        assert_eq!(fb.get(x, 3).unwrap().ch, block, "bottom row column {}", x);
    }
}

#[test]
fn truncated_pixel_data_is_rejected() {
    assert!(matches!(
        Bitmap::parse_pbm(b"P4\n9 2\n\x00\x00\x00"),
        Err(BitmapError::Truncated {
            expected: 4,
            found: 3
        })
    ));
}

#[test]
fn header_junk_is_rejected() {
    assert!(matches!(
        Bitmap::parse_pbm(b"P6\n2 2\nxxxx"),
        Err(BitmapError::BadMagic)
    ));
    assert!(matches!(
        Bitmap::parse_pbm(b"P4\nno dimensions"),
        Err(BitmapError::BadHeader)
    ));
}
