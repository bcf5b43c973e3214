use crate::{
    foundation::{
        core::{Rect, Rgba8},
        error::{GlyphFxError, GlyphFxResult},
    },
    glyph::quad::{Glyph, GlyphQuad, QUAD_VERTS},
    host::layout::{GlyphLayout, visible_bounds},
};

/// Single-line or wrapped text shaped with Parley from raw font bytes.
///
/// Emits one quad per visual cluster, spanning the run's ascent and descent. Whitespace
/// clusters are reported but marked invisible. All glyphs share submesh 0.
pub struct ParleyLayout {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
    text: String,
    size_px: f32,
    color: Rgba8,
    max_width_px: Option<f32>,
    glyphs: Vec<Glyph>,
    bounds: Rect,
    dirty: bool,
}

impl std::fmt::Debug for ParleyLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyLayout")
            .field("family_name", &self.family_name)
            .field("text", &self.text)
            .field("size_px", &self.size_px)
            .field("glyphs", &self.glyphs.len())
            .finish_non_exhaustive()
    }
}

impl ParleyLayout {
    /// Register `font_bytes` and prepare an empty layout at `size_px`.
    pub fn new(font_bytes: &[u8], size_px: f32) -> GlyphFxResult<Self> {
        validate_size(size_px)?;

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| GlyphFxError::layout("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GlyphFxError::layout("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            text: String::new(),
            size_px,
            color: Rgba8::WHITE,
            max_width_px: None,
            glyphs: Vec::new(),
            bounds: Rect::ZERO,
            dirty: true,
        })
    }

    /// Family name resolved from the font bytes.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text; geometry updates on the next relayout.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.dirty = true;
        }
    }

    /// Base vertex color for every glyph.
    pub fn set_color(&mut self, color: Rgba8) {
        if color != self.color {
            self.color = color;
            self.dirty = true;
        }
    }

    /// Change the font size.
    pub fn set_size_px(&mut self, size_px: f32) -> GlyphFxResult<()> {
        validate_size(size_px)?;
        self.size_px = size_px;
        self.dirty = true;
        Ok(())
    }

    /// Wrap lines at `max_width_px`, or never when `None`.
    pub fn set_max_width_px(&mut self, max_width_px: Option<f32>) {
        self.max_width_px = max_width_px;
        self.dirty = true;
    }

    /// Builder form of [`Self::set_text`].
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    #[tracing::instrument(level = "debug", skip(self), fields(chars = self.text.chars().count()))]
    fn rebuild(&mut self) {
        let text = self.text.as_str();
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(self.color));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(self.max_width_px);
        if let Some(w) = self.max_width_px {
            layout.align(
                Some(w),
                parley::Alignment::Start,
                parley::AlignmentOptions::default(),
            );
        }

        self.glyphs.clear();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // Parley is y-down; mesh space is y-up.
                let metrics = run.run().metrics();
                let baseline = -f64::from(run.baseline());
                let top = baseline + f64::from(metrics.ascent);
                let bottom = baseline - f64::from(metrics.descent);
                let brush = run.style().brush;

                let mut x = f64::from(run.offset());
                for cluster in run.run().visual_clusters() {
                    let advance = f64::from(cluster.advance());
                    let range = cluster.text_range();
                    let source = text.get(range.clone()).unwrap_or_default();
                    let visible = advance > 0.0 && !source.chars().all(char::is_whitespace);

                    let slot = self.glyphs.len();
                    self.glyphs.push(Glyph {
                        index: text[..range.start].chars().count(),
                        visible,
                        quad: GlyphQuad::from_rect(Rect::new(x, bottom, x + advance, top)),
                        color: brush,
                        submesh: 0,
                        vertex_index: slot * QUAD_VERTS,
                    });
                    x += advance;
                }
            }
        }

        self.bounds = visible_bounds(&self.glyphs);
        self.dirty = false;
        tracing::debug!(glyphs = self.glyphs.len(), "text laid out");
    }
}

fn validate_size(size_px: f32) -> GlyphFxResult<()> {
    if !size_px.is_finite() || size_px <= 0.0 {
        return Err(GlyphFxError::validation(
            "text size_px must be finite and > 0",
        ));
    }
    Ok(())
}

impl GlyphLayout for ParleyLayout {
    fn force_relayout(&mut self) -> GlyphFxResult<()> {
        if self.dirty {
            self.rebuild();
        }
        Ok(())
    }

    fn visible_glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn full_bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/parley_layout.rs"]
mod tests;
