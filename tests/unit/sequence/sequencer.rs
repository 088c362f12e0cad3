use super::*;

fn at(ms: u64) -> SessionTime {
    SessionTime(ms)
}

#[test]
fn starts_at_hero_settled() {
    let s = ScreenSequencer::default();
    assert_eq!(s.current(), Stage::Hero);
    assert!(!s.is_transitioning());
    assert!(!s.finale_open());
    assert_eq!(s.visible_screen(), Some(Stage::Hero));
}

#[test]
fn advance_waits_for_guard_window() {
    let mut s = ScreenSequencer::new(500);
    assert!(s.signal_complete(at(1_000)));
    assert!(s.is_transitioning());
    assert_eq!(s.pending_deadline(), Some(at(1_500)));
    assert_eq!(s.tick(at(1_499)), None);
    assert_eq!(s.current(), Stage::Hero);

    let adv = s.tick(at(1_500)).unwrap();
    assert_eq!(adv.from, Stage::Hero);
    assert_eq!(adv.to, Stage::Timeline);
    assert!(!adv.finale_opened);
    assert!(!s.is_transitioning());
}

#[test]
fn rapid_signals_advance_exactly_once() {
    let mut s = ScreenSequencer::new(500);
    assert!(s.signal_complete(at(0)));
    for ms in (10..500).step_by(10) {
        assert!(!s.signal_complete(at(ms)));
    }
    assert!(s.tick(at(500)).is_some());
    assert_eq!(s.current(), Stage::Timeline);
    assert_eq!(s.tick(at(2_000)), None);
}

#[test]
fn walking_to_the_end_opens_the_finale_overlay() {
    let mut s = ScreenSequencer::new(0);
    let mut seen = vec![s.current()];
    let mut now = 0;
    while s.signal_complete(at(now)) {
        let adv = s.tick(at(now)).unwrap();
        seen.push(adv.to);
        now += 1;
    }
    assert_eq!(seen, Stage::ALL.to_vec());
    assert!(s.finale_open());
    assert_eq!(s.visible_screen(), None);

    // Terminal: further signals are dropped.
    assert!(!s.signal_complete(at(now)));

    s.close_finale();
    assert!(!s.finale_open());
    assert_eq!(s.current(), Stage::Finale);
}

#[test]
fn index_never_decreases() {
    let mut s = ScreenSequencer::new(100);
    let mut last = s.current().index();
    for ms in (0..5_000).step_by(37) {
        s.signal_complete(at(ms));
        s.tick(at(ms));
        assert!(s.current().index() >= last);
        last = s.current().index();
    }
}
