use super::*;

const SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";

fn font_bytes() -> Option<Vec<u8>> {
    let path = std::env::var("GLYPHFX_TEST_FONT").unwrap_or_else(|_| SYSTEM_FONT.to_owned());
    std::fs::read(path).ok()
}

#[test]
fn rejects_bad_font_size() {
    for size in [0.0, -3.0, f32::NAN, f32::INFINITY] {
        let err = ParleyLayout::new(&[], size).unwrap_err();
        assert!(matches!(err, GlyphFxError::Validation(_)), "{size}: {err}");
    }
}

#[test]
fn rejects_empty_font_bytes() {
    let err = ParleyLayout::new(&[], 32.0).unwrap_err();
    assert!(matches!(err, GlyphFxError::Layout(_)));
}

#[test]
fn one_quad_per_character_with_invisible_spaces() {
    let Some(bytes) = font_bytes() else {
        return;
    };
    let mut layout = ParleyLayout::new(&bytes, 32.0).unwrap().with_text("a b");
    assert!(layout.visible_glyphs().is_empty());

    layout.force_relayout().unwrap();
    let glyphs = layout.visible_glyphs();
    assert_eq!(glyphs.len(), 3);
    assert_eq!(
        glyphs.iter().map(|g| g.visible).collect::<Vec<_>>(),
        vec![true, false, true]
    );
    assert_eq!(glyphs[2].index, 2);
    assert_eq!(glyphs[2].vertex_index, 8);
    assert!(glyphs[0].quad.midpoint().x < glyphs[2].quad.midpoint().x);

    let bounds = layout.full_bounds();
    assert!(bounds.width() > 0.0 && bounds.height() > 0.0);
}

#[test]
fn set_text_relayouts_lazily() {
    let Some(bytes) = font_bytes() else {
        return;
    };
    let mut layout = ParleyLayout::new(&bytes, 24.0).unwrap().with_text("ab");
    layout.force_relayout().unwrap();
    let before = layout.visible_glyphs().to_vec();

    layout.set_text("ab");
    layout.force_relayout().unwrap();
    assert_eq!(layout.visible_glyphs(), before.as_slice());

    layout.set_text("abc");
    layout.force_relayout().unwrap();
    assert_eq!(layout.visible_glyphs().len(), 3);
    assert_eq!(layout.text(), "abc");
}

#[test]
fn style_setters_mark_layout_dirty() {
    let Some(bytes) = font_bytes() else {
        return;
    };
    let mut layout = ParleyLayout::new(&bytes, 20.0).unwrap().with_text("ab");
    assert!(!layout.family_name().is_empty());
    layout.force_relayout().unwrap();
    let small = layout.full_bounds();

    let red = Rgba8::new(255, 0, 0, 255);
    layout.set_color(red);
    layout.force_relayout().unwrap();
    assert!(layout.visible_glyphs().iter().all(|g| g.color == red));

    assert!(matches!(
        layout.set_size_px(-1.0),
        Err(GlyphFxError::Validation(_))
    ));
    layout.set_size_px(40.0).unwrap();
    layout.force_relayout().unwrap();
    let large = layout.full_bounds();
    assert!(large.width() > small.width());
    assert!(large.height() > small.height());
}

#[test]
fn max_width_wraps_onto_lower_lines() {
    let Some(bytes) = font_bytes() else {
        return;
    };
    let mut layout = ParleyLayout::new(&bytes, 20.0).unwrap().with_text("aaaa bbbb");
    layout.force_relayout().unwrap();
    let one_line = layout.visible_glyphs().to_vec();
    assert_eq!(one_line[0].quad.midpoint().y, one_line[8].quad.midpoint().y);

    layout.set_max_width_px(Some(60.0));
    layout.force_relayout().unwrap();
    let wrapped = layout.visible_glyphs();
    let first = wrapped.iter().find(|g| g.index == 0).unwrap();
    let last = wrapped.iter().find(|g| g.index == 8).unwrap();
    assert!(last.quad.midpoint().y < first.quad.midpoint().y);
    assert!(last.quad.midpoint().x < one_line[8].quad.midpoint().x);
}
