use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn new_buffer_is_transparent() {
    let buf = RasterBuffer::new(canvas(3, 2)).unwrap();
    assert_eq!(buf.pixels().len(), 24);
    assert!(buf.pixels().iter().all(|&b| b == 0));
    assert_eq!(buf.alpha_at(2, 1), Some(0));
    assert_eq!(buf.alpha_at(3, 1), None);
}

#[test]
fn from_rgba8_checks_length() {
    assert!(RasterBuffer::from_rgba8(canvas(2, 2), vec![0; 15]).is_err());
    assert!(RasterBuffer::from_rgba8(canvas(2, 2), vec![0; 16]).is_ok());
}

#[test]
fn fill_replaces_every_pixel() {
    let mut buf = RasterBuffer::new(canvas(4, 4)).unwrap();
    buf.fill(Rgba8::new(1, 2, 3, 4));
    assert!(buf.pixels().chunks_exact(4).all(|p| p == [1, 2, 3, 4]));
}

#[test]
fn fill_rect_over_clips_to_canvas() {
    let mut buf = RasterBuffer::filled(canvas(4, 4), Rgba8::opaque(0, 0, 0)).unwrap();
    buf.fill_rect_over(
        PixelRect {
            x0: 3,
            y0: 3,
            x1: 6,
            y1: 6,
        },
        Rgba8::opaque(255, 0, 0),
    );
    assert_eq!(buf.pixel(3, 3), Some(Rgba8::opaque(255, 0, 0)));
    assert_eq!(buf.pixel(2, 3), Some(Rgba8::opaque(0, 0, 0)));
}

#[test]
fn over_straight_never_lowers_alpha() {
    let dst = [220, 236, 246, 242];
    for a in [0u8, 1, 30, 76, 128, 255] {
        let out = over_straight(dst, Rgba8::new(200, 220, 235, a));
        assert!(out[3] >= 242, "alpha {a} lowered coverage to {}", out[3]);
    }
}

#[test]
fn over_straight_opaque_src_replaces() {
    let out = over_straight([1, 2, 3, 200], Rgba8::opaque(9, 8, 7));
    assert_eq!(out, [9, 8, 7, 255]);
}

#[test]
fn to_rgba_image_preserves_dimensions() {
    let buf = RasterBuffer::filled(canvas(5, 3), Rgba8::opaque(10, 20, 30)).unwrap();
    let img = buf.to_rgba_image().unwrap();
    assert_eq!(img.dimensions(), (5, 3));
    assert_eq!(img.get_pixel(4, 2).0, [10, 20, 30, 255]);
}
