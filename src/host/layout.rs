use crate::{
    foundation::{
        core::{Rect, Rgba8},
        error::GlyphFxResult,
    },
    glyph::quad::{Glyph, GlyphQuad, QUAD_VERTS},
};

/// Source of undeformed glyph geometry.
///
/// Implementations must report geometry for the *current* text every frame and never
/// reflect deformations written to a render target.
pub trait GlyphLayout {
    /// Bring geometry up to date with the current text and style.
    fn force_relayout(&mut self) -> GlyphFxResult<()>;

    /// Every glyph cell of the current layout, with visibility flags.
    fn visible_glyphs(&self) -> &[Glyph];

    /// Axis-aligned bounds of the whole text block.
    fn full_bounds(&self) -> Rect;
}

/// A fixed glyph list, for hosts that shape text themselves.
#[derive(Clone, Debug, Default)]
pub struct StaticLayout {
    glyphs: Vec<Glyph>,
    bounds: Rect,
    relayouts: u64,
}

impl StaticLayout {
    /// Wrap a glyph list; bounds are the union of the visible quads.
    pub fn new(glyphs: Vec<Glyph>) -> Self {
        let bounds = visible_bounds(&glyphs);
        Self {
            glyphs,
            bounds,
            relayouts: 0,
        }
    }

    /// One `cell_w` x `cell_h` cell per character on a single line, whitespace invisible.
    ///
    /// Cells sit on the `y = 0` baseline and extend upward.
    pub fn monospace(text: &str, cell_w: f64, cell_h: f64, color: Rgba8) -> Self {
        let glyphs = text
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let x = i as f64 * cell_w;
                Glyph {
                    index: i,
                    visible: !ch.is_whitespace(),
                    quad: GlyphQuad::from_rect(Rect::new(x, 0.0, x + cell_w, cell_h)),
                    color,
                    submesh: 0,
                    vertex_index: i * QUAD_VERTS,
                }
            })
            .collect();
        Self::new(glyphs)
    }

    /// Replace the glyph list, as a re-layout would.
    pub fn set_glyphs(&mut self, glyphs: Vec<Glyph>) {
        self.bounds = visible_bounds(&glyphs);
        self.glyphs = glyphs;
    }

    /// Number of `force_relayout` calls so far.
    pub fn relayout_count(&self) -> u64 {
        self.relayouts
    }
}

impl GlyphLayout for StaticLayout {
    fn force_relayout(&mut self) -> GlyphFxResult<()> {
        self.relayouts += 1;
        Ok(())
    }

    fn visible_glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn full_bounds(&self) -> Rect {
        self.bounds
    }
}

/// Union of the visible glyph quads, or `Rect::ZERO` when none are visible.
pub fn visible_bounds(glyphs: &[Glyph]) -> Rect {
    glyphs
        .iter()
        .filter(|g| g.visible)
        .map(|g| g.quad.bounds())
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO)
}

#[cfg(test)]
#[path = "../../tests/unit/host/layout.rs"]
mod tests;
