use super::*;

#[test]
fn monospace_marks_whitespace_invisible() {
    let layout = StaticLayout::monospace("A B", 10.0, 20.0, Rgba8::WHITE);
    let glyphs = layout.visible_glyphs();
    assert_eq!(glyphs.len(), 3);
    assert!(glyphs[0].visible);
    assert!(!glyphs[1].visible);
    assert_eq!(glyphs[2].vertex_index, 8);
    assert_eq!(layout.full_bounds(), Rect::new(0.0, 0.0, 30.0, 20.0));
}

#[test]
fn bounds_ignore_invisible_glyphs() {
    let layout = StaticLayout::monospace("A  ", 10.0, 20.0, Rgba8::WHITE);
    assert_eq!(layout.full_bounds(), Rect::new(0.0, 0.0, 10.0, 20.0));
    assert_eq!(visible_bounds(&[]), Rect::ZERO);
}

#[test]
fn relayout_is_counted() {
    let mut layout = StaticLayout::monospace("A", 1.0, 1.0, Rgba8::WHITE);
    layout.force_relayout().unwrap();
    layout.force_relayout().unwrap();
    assert_eq!(layout.relayout_count(), 2);

    layout.set_glyphs(Vec::new());
    assert!(layout.visible_glyphs().is_empty());
    assert_eq!(layout.full_bounds(), Rect::ZERO);
}
