use super::*;

#[test]
fn first_slot_is_prompted_initially() {
    let t = TimelineStage::new();
    assert_eq!(t.slot(0), Some(SlotView::Prompt));
    assert_eq!(t.slot(1).unwrap().label(), "...");
    assert_eq!(t.slot(4), None);
    assert!(!t.is_ready());
}

#[test]
fn prompt_moves_after_delay() {
    let mut t = TimelineStage::new();
    assert!(t.reveal(0, SessionTime(0)));
    t.tick(SessionTime(599));
    assert_eq!(t.prompted(), 0);
    t.tick(SessionTime(600));
    assert_eq!(t.prompted(), 1);
    assert_eq!(t.slot(0), Some(SlotView::Revealed(&MILESTONES[0])));
    assert_eq!(t.slot(1), Some(SlotView::Prompt));
}

#[test]
fn repeats_and_out_of_range_are_ignored() {
    let mut t = TimelineStage::new();
    assert!(t.reveal(1, SessionTime(0)));
    assert!(!t.reveal(1, SessionTime(5)));
    assert!(!t.reveal(9, SessionTime(5)));
    assert_eq!(t.reveal_order(), &[1]);
}

#[test]
fn completes_one_second_after_last_milestone() {
    let mut t = TimelineStage::new();
    let mut now = 0;
    for i in 0..MILESTONES.len() {
        assert!(t.reveal(i, SessionTime(now)));
        now += 700;
        t.tick(SessionTime(now));
    }
    // Last reveal happened at 2100; completion due at 3100.
    assert!(!t.is_ready());
    t.tick(SessionTime(3_099));
    assert!(!t.is_ready());
    t.tick(SessionTime(3_100));
    assert!(t.is_complete());
    assert!(t.is_ready());
}

#[test]
fn revealing_the_last_first_still_completes() {
    let mut t = TimelineStage::new();
    t.reveal(3, SessionTime(0));
    t.tick(SessionTime(1_000));
    assert!(t.is_ready());
}
