use super::*;
use crate::foundation::core::{Canvas, Rgba8};

fn wash_buffer() -> RasterBuffer {
    RasterBuffer::filled(Canvas::REFERENCE, Rgba8::new(220, 236, 246, 242)).unwrap()
}

#[test]
fn gradient_interpolates_between_stops() {
    let brush = EraseBrush::default();
    assert_eq!(brush.gradient_alpha(0.0), 1.0);
    assert!((brush.gradient_alpha(0.35) - 0.75).abs() < 1e-9);
    assert!((brush.gradient_alpha(0.7) - 0.5).abs() < 1e-9);
    assert!((brush.gradient_alpha(0.85) - 0.25).abs() < 1e-9);
    assert_eq!(brush.gradient_alpha(1.0), 0.0);
    assert_eq!(brush.gradient_alpha(3.0), 0.0);
}

#[test]
fn stroke_clears_center_and_leaves_outside_untouched() {
    let mut buf = wash_buffer();
    let brush = EraseBrush::default();
    let rect = brush
        .apply(&mut buf, &brush.stroke_at(Point::new(250.0, 150.0)))
        .unwrap();
    assert_eq!(buf.alpha_at(250, 150), Some(0));
    assert_eq!(buf.alpha_at(250, 115), Some(0));
    assert_eq!(buf.alpha_at(250, 100), Some(242));
    assert_eq!(buf.alpha_at(0, 0), Some(242));
    assert_eq!(rect.x0, 209);
    assert_eq!(rect.x1, 291);
}

#[test]
fn soft_edge_alone_fades_toward_rim() {
    let mut buf = wash_buffer();
    let brush = EraseBrush {
        erase_strength: 0.0,
        ..EraseBrush::default()
    };
    brush.apply(&mut buf, &brush.stroke_at(Point::new(250.0, 150.0)));
    let center = buf.alpha_at(250, 150).unwrap();
    let mid = buf.alpha_at(250 + 20, 150).unwrap();
    let rim = buf.alpha_at(250 + 38, 150).unwrap();
    assert!(center < mid && mid < rim, "{center} {mid} {rim}");
    assert!(rim < 242);
}

#[test]
fn stroke_never_raises_alpha() {
    let mut buf = wash_buffer();
    let before = buf.clone();
    let brush = EraseBrush::default();
    brush.apply(&mut buf, &brush.stroke_at(Point::new(10.0, 10.0)));
    for (a, b) in before.pixels().chunks_exact(4).zip(buf.pixels().chunks_exact(4)) {
        assert!(b[3] <= a[3]);
        assert_eq!(a[..3], b[..3]);
    }
}

#[test]
fn strokes_off_canvas_are_ignored() {
    let mut buf = wash_buffer();
    let brush = EraseBrush::default();
    assert!(
        brush
            .apply(&mut buf, &brush.stroke_at(Point::new(-100.0, -100.0)))
            .is_none()
    );
    assert!(
        brush
            .apply(&mut buf, &brush.stroke_at(Point::new(f64::NAN, 1.0)))
            .is_none()
    );
    assert_eq!(buf, wash_buffer());
}

#[test]
fn validate_rejects_bad_brushes() {
    assert!(EraseBrush::default().validate().is_ok());
    let bad_radius = EraseBrush {
        radius: 0.0,
        ..EraseBrush::default()
    };
    assert!(bad_radius.validate().is_err());
    let bad_strength = EraseBrush {
        erase_strength: 1.5,
        ..EraseBrush::default()
    };
    assert!(bad_strength.validate().is_err());
    let unsorted = EraseBrush {
        soft_edge: vec![SOFT_EDGE_STOPS[1], SOFT_EDGE_STOPS[0]],
        ..EraseBrush::default()
    };
    assert!(unsorted.validate().is_err());
}
