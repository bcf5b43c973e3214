use crate::{
    effects::{color, config::Effect},
    foundation::core::{Point, Rect, Rgba},
};

/// Geometry the spatial color kernels need.
#[derive(Clone, Copy, Debug)]
pub struct ColorSite {
    /// Glyph index.
    pub index: usize,
    /// Baseline midpoint of the glyph.
    pub mid: Point,
    /// Bounds of the whole text block.
    pub full_bounds: Rect,
}

/// Left-to-right fold of the color effects over `base`.
///
/// Whole-color kernels replace the running color, alpha kernels replace only alpha,
/// shine blends over whatever precedes it.
pub fn composite(base: Rgba, effects: &[Effect], t: f64, site: ColorSite) -> Rgba {
    effects.iter().fold(base, |c, effect| match effect {
        Effect::Rainbow(p) => color::rainbow(p, t, site.index),
        Effect::ColorLerp(p) => color::color_lerp(p, t),
        Effect::Fade(p) => c.with_alpha(color::fade_alpha(p, t)),
        Effect::Flicker(p) => c.with_alpha(color::flicker_alpha(p, t, site.index)),
        Effect::Blink(p) => c.with_alpha(color::blink_alpha(p, t)),
        Effect::GlowPulse(p) => color::glow(p, t, base),
        Effect::ShineSwipe(p) => {
            let strength = color::shine_strength(p, t, site.mid, site.full_bounds);
            color::apply_shine(p, strength, c)
        }
        _ => c,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/composite.rs"]
mod tests;
