//! Deformation kernels: each rewrites a quad's corners around its current midpoint.

use crate::{
    effects::{
        config::{FlipParams, PulseParams, SquishParams, StretchParams},
        staggered,
    },
    foundation::core::Vec2,
    glyph::quad::GlyphQuad,
};

fn wave(speed: f64, t: f64, index: usize) -> f64 {
    (speed * t + index as f64).sin()
}

/// Vertical scale factor for flip at time `t`.
pub fn flip_factor(p: &FlipParams, t: f64, index: usize) -> f64 {
    let t = staggered(t, p.unit, p.delay, index);
    (t * p.speed).sin() * p.amount
}

/// Scale each corner's Y distance from the midpoint by the flip factor.
pub fn flip(p: &FlipParams, t: f64, index: usize, quad: &mut GlyphQuad) {
    let k = flip_factor(p, t, index);
    quad.deform(|d| Vec2::new(d.x, d.y * k));
}

/// Uniform scale factor for stretch.
pub fn stretch_factor(p: &StretchParams, t: f64, index: usize) -> f64 {
    1.0 + wave(p.speed, t, index) * (p.amount - 1.0)
}

/// Uniform scale about the midpoint.
pub fn stretch(p: &StretchParams, t: f64, index: usize, quad: &mut GlyphQuad) {
    let k = stretch_factor(p, t, index);
    quad.deform(|d| d * k);
}

/// Horizontal scale factor for squish.
pub fn squish_factor(p: &SquishParams, t: f64, index: usize) -> f64 {
    wave(p.speed, t, index) * (1.0 - p.amount) + p.amount
}

/// X-only scale about the midpoint.
pub fn squish(p: &SquishParams, t: f64, index: usize, quad: &mut GlyphQuad) {
    let k = squish_factor(p, t, index);
    quad.deform(|d| Vec2::new(d.x * k, d.y));
}

/// Per-letter uniform pulse scale.
pub fn pulse_factor(p: &PulseParams, t: f64, index: usize) -> f64 {
    1.0 + wave(p.speed, t, index) * (p.scale - 1.0)
}

/// Uniform per-letter pulse about the midpoint.
pub fn pulse_letter(p: &PulseParams, t: f64, index: usize, quad: &mut GlyphQuad) {
    let k = pulse_factor(p, t, index);
    quad.deform(|d| d * k);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shape.rs"]
mod tests;
