use super::*;

#[test]
fn canvas_rejects_zero_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(MAX_CANVAS_DIM + 1, 1).is_err());
    let c = Canvas::new(500, 300).unwrap();
    assert_eq!(c, Canvas::REFERENCE);
    assert_eq!(c.pixel_count(), 150_000);
    assert_eq!(c.byte_len(), 600_000);
}

#[test]
fn pixel_rect_clips_and_rounds_outward() {
    let canvas = Canvas::new(10, 10).unwrap();
    let r = PixelRect::clipped(Rect::new(-3.5, 2.2, 4.1, 20.0), canvas).unwrap();
    assert_eq!(
        r,
        PixelRect {
            x0: 0,
            y0: 2,
            x1: 5,
            y1: 10
        }
    );
    assert_eq!(r.width(), 5);
    assert_eq!(r.height(), 8);

    assert!(PixelRect::clipped(Rect::new(11.0, 0.0, 20.0, 5.0), canvas).is_none());
    assert!(PixelRect::clipped(Rect::new(f64::NAN, 0.0, 2.0, 2.0), canvas).is_none());
}

#[test]
fn wash_alpha_matches_css_rounding() {
    let wash = Rgba8::with_alpha_f(220, 236, 246, 0.95);
    assert_eq!(wash.a, 242);
}

#[test]
fn hex_parsing_accepts_rgb_and_rgba() {
    assert_eq!(
        Rgba8::parse_hex("#FBF7F2").unwrap(),
        Rgba8::opaque(0xFB, 0xF7, 0xF2)
    );
    assert_eq!(
        Rgba8::parse_hex("e6a23c4d").unwrap(),
        Rgba8::new(0xE6, 0xA2, 0x3C, 0x4D)
    );
    assert!(Rgba8::parse_hex("#abc").is_err());
    assert!(Rgba8::parse_hex("#zzzzzz").is_err());
    assert_eq!(Rgba8::opaque(0xE6, 0xA2, 0x3C).to_hex_rgb(), "#E6A23C");
}

#[test]
fn session_time_saturates() {
    let t = SessionTime::from_millis(500);
    assert_eq!(t.after_millis(250).as_millis(), 750);
    assert_eq!(SessionTime::ZERO.millis_since(t), 0);
    assert_eq!(SessionTime(u64::MAX).after_millis(1), SessionTime(u64::MAX));
}
