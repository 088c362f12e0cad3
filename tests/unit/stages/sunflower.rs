use super::*;
use kurbo::Shape;

#[test]
fn petal_tip_sits_on_outer_radius() {
    let hidden = petal_path(0.0, false);
    let revealed = petal_path(0.0, true);
    let hb = hidden.bounding_box();
    let rb = revealed.bounding_box();
    assert!((hb.x1 - 120.0).abs() < 1e-9);
    assert!((rb.x1 - 140.0).abs() < 1e-9);
    assert!(rb.area() > hb.area());
}

#[test]
fn petal_path_is_closed_quadratics() {
    let path = petal_path(72.0, false);
    let elements = path.elements();
    assert_eq!(elements.len(), 4);
    assert!(matches!(elements[0], kurbo::PathEl::MoveTo(_)));
    assert!(matches!(elements[1], kurbo::PathEl::QuadTo(_, _)));
    assert!(matches!(elements[3], kurbo::PathEl::ClosePath));
}

#[test]
fn reveal_sets_active_then_clears() {
    let mut s = SunflowerStage::new();
    assert!(s.reveal_petal(3, SessionTime(0)));
    assert_eq!(s.active_petal().map(|p| p.id), Some(3));
    s.tick(SessionTime(1_999));
    assert!(s.active_petal().is_some());
    s.tick(SessionTime(2_000));
    assert!(s.active_petal().is_none());
}

#[test]
fn newer_petal_keeps_highlight() {
    let mut s = SunflowerStage::new();
    s.reveal_petal(1, SessionTime(0));
    s.reveal_petal(2, SessionTime(1_500));
    s.tick(SessionTime(2_000));
    assert_eq!(s.active_petal().map(|p| p.id), Some(2));
    s.tick(SessionTime(3_500));
    assert!(s.active_petal().is_none());
}

#[test]
fn unknown_and_repeated_petals_are_ignored() {
    let mut s = SunflowerStage::new();
    assert!(!s.reveal_petal(0, SessionTime(0)));
    assert!(!s.reveal_petal(6, SessionTime(0)));
    assert!(s.reveal_petal(5, SessionTime(0)));
    assert!(!s.reveal_petal(5, SessionTime(10)));
    assert_eq!(s.revealed_count(), 1);
}

#[test]
fn full_bloom_follows_last_petal() {
    let mut s = SunflowerStage::new();
    for (i, p) in PETALS.iter().enumerate() {
        s.reveal_petal(p.id, SessionTime(i as u64 * 100));
    }
    // Fifth petal at 400ms; bloom at 1400ms.
    s.tick(SessionTime(1_399));
    assert!(!s.is_ready());
    s.tick(SessionTime(1_400));
    assert!(s.is_fully_bloomed());
    assert!(s.is_ready());
    assert_eq!(s.outlines().len(), 5);
}
