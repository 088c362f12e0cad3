use super::*;

#[test]
fn corner_marks_match_the_page_geometry() {
    let doc = LetterDocument::standard();
    let marks = doc.corner_marks();
    assert_eq!(
        marks[0],
        [
            Point::new(40.0, 80.0),
            Point::new(40.0, 40.0),
            Point::new(80.0, 40.0)
        ]
    );
    assert_eq!(
        marks[3],
        [
            Point::new(720.0, 960.0),
            Point::new(760.0, 960.0),
            Point::new(760.0, 920.0)
        ]
    );
}

#[test]
fn layout_places_special_lines() {
    let runs = LetterDocument::standard().layout();
    // Blank lines produce no runs.
    assert_eq!(runs.len(), 13);

    let salutation = &runs[0];
    assert_eq!((salutation.x, salutation.y, salutation.size), (80.0, 140.0, 32.0));
    assert!(salutation.italic);

    // Flow starts at 200 and the first line is blank, so the first body line lands on 220.
    assert_eq!(runs[1].y, 220.0);

    let highlight = runs
        .iter()
        .find(|r| r.text == "Will you be my Valentine?")
        .unwrap();
    assert_eq!(highlight.anchor, TextAnchor::Middle);
    assert_eq!(highlight.x, 400.0);
    assert_eq!(highlight.color, Rgba8::opaque(0xE6, 0xA2, 0x3C));

    let signature = runs.last().unwrap();
    assert_eq!(signature.anchor, TextAnchor::End);
    assert_eq!(signature.x, 720.0);
}

#[test]
fn svg_escapes_text() {
    let mut doc = LetterDocument::standard();
    doc.lines = vec![LetterLine {
        text: "<you & me>",
        style: LineStyle::Body,
    }];
    let svg = doc.to_svg();
    assert!(svg.contains("&lt;you &amp; me&gt;"));
    assert!(!svg.contains("<you"));
    assert_eq!(svg.matches("<polyline").count(), 4);
}

#[test]
fn rasterized_page_has_background_and_corner_marks() {
    let img = LetterDocument::standard().rasterize().unwrap();
    assert_eq!(img.dimensions(), (800, 1000));
    assert_eq!(img.get_pixel(400, 20).0, [0xFB, 0xF7, 0xF2, 255]);

    let corner = img.get_pixel(39, 60).0;
    assert_ne!(corner, [0xFB, 0xF7, 0xF2, 255]);
    assert_eq!(corner[3], 255);
}

#[test]
fn demultiply_restores_straight_colour() {
    let mut px = [64u8, 32, 0, 128, 10, 20, 30, 0, 1, 2, 3, 255];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [128, 64, 0, 128, 10, 20, 30, 0, 1, 2, 3, 255]);
}

#[test]
fn export_writes_a_png() {
    let out = std::path::PathBuf::from("target")
        .join("letter_export")
        .join("letter.png");
    let _ = std::fs::remove_file(&out);
    LetterDocument::standard().export_png(&out).unwrap();
    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), (800, 1000));
}

#[test]
fn svg_is_a_complete_document_with_one_text_per_line() {
    let doc = LetterDocument::standard();
    let svg = doc.to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"1000\""));
    assert!(svg.ends_with("</svg>\n"));
    assert_eq!(svg.matches("<text ").count(), doc.layout().len());
    assert_eq!(doc.layout().len(), 13);
    assert!(usvg::Tree::from_str(&svg, &usvg::Options::default()).is_ok());
}
