use super::*;

fn paint_rows(stage: &mut PaintStage, rows: &[f64]) {
    for &y in rows {
        let mut x = 0.0;
        while x <= 500.0 {
            stage.stroke_at(Point::new(x, y));
            x += 25.0;
        }
    }
}

#[test]
fn new_stage_is_mounted_and_not_ready() {
    let stage = PaintStage::new(PaintSettings::default());
    assert!(stage.controller().is_mounted());
    assert!(!stage.is_ready());
    assert_eq!(stage.display_progress(), 0);
    assert_eq!(stage.message_opacity(), MESSAGE_DIM_OPACITY);
}

#[test]
fn display_progress_is_scaled_and_capped() {
    let mut stage = PaintStage::new(PaintSettings::default());
    stage.stroke_at(Point::new(250.0, 150.0));
    let pct = stage.reveal().percent;
    assert_eq!(stage.display_progress(), (pct * 2.5).round() as u32);

    paint_rows(&mut stage, &[40.0, 110.0, 180.0, 250.0]);
    assert_eq!(stage.display_progress(), 100);
    assert!(stage.is_ready());
    assert_eq!(stage.message_opacity(), 1.0);
}

#[test]
fn paint_again_clears_readiness() {
    let mut stage = PaintStage::new(PaintSettings::default());
    paint_rows(&mut stage, &[40.0, 110.0, 180.0]);
    assert!(stage.is_ready());
    stage.paint_again();
    assert!(!stage.is_ready());
    assert_eq!(stage.display_progress(), 0);
}
