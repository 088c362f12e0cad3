use super::*;

#[test]
fn continue_appears_after_four_seconds() {
    let mut l = LetterStage::new(SessionTime(10_000));
    l.tick(SessionTime(13_999));
    assert!(!l.is_ready());
    l.tick(SessionTime(14_000));
    assert!(l.is_ready());
}

#[test]
fn lines_write_in_on_schedule() {
    let l = LetterStage::new(SessionTime(1_000));
    assert_eq!(l.visible_lines(SessionTime(1_000)), 0);
    assert_eq!(l.visible_lines(SessionTime(1_300)), 1);
    assert_eq!(l.visible_lines(SessionTime(1_700)), 3);
    assert_eq!(l.visible_lines(SessionTime(60_000)), LETTER.len());
}

#[test]
fn letter_shape_matches_the_card() {
    assert_eq!(LETTER[0].style, LineStyle::Salutation);
    assert_eq!(
        LETTER
            .iter()
            .filter(|l| l.style == LineStyle::Highlight)
            .count(),
        1
    );
    assert_eq!(LETTER.last().unwrap().style, LineStyle::Signature);
    assert_eq!(line_delay_ms(LETTER.len() - 1), 3_700);
}

#[test]
fn download_failure_is_swallowed() {
    let dir = std::path::PathBuf::from("target").join("letter_stage_blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();

    let l = LetterStage::new(SessionTime(0));
    assert!(!l.download(&blocker.join("letter.png")));
    assert!(!l.is_ready());
}
