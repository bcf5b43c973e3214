use crate::{
    effects::{
        config::{Effect, PulseMode},
        motion, shape,
    },
    foundation::core::Vec2,
    glyph::quad::GlyphQuad,
};

/// Sum of every offset-stage effect for one glyph.
///
/// Non-offset effects in `effects` are ignored.
pub fn glyph_offset(effects: &[Effect], t: f64, index: usize, rng: &mut fastrand::Rng) -> Vec2 {
    let mut offset = Vec2::ZERO;
    for effect in effects {
        offset += match effect {
            Effect::Entrance(p) => motion::entrance(p, t, index),
            Effect::WaveY(p) => motion::wave_y(p, t, index),
            Effect::WaveX(p) => motion::wave_x(p, t, index),
            Effect::Shake(p) => motion::shake(p, rng),
            Effect::Bounce(p) => motion::bounce(p, t, index),
            Effect::Spiral(p) => motion::spiral(p, t, index),
            _ => Vec2::ZERO,
        };
    }
    offset
}

/// Apply deform-stage effects in order, each around the quad's current midpoint.
pub fn deform(effects: &[Effect], t: f64, index: usize, quad: &mut GlyphQuad) {
    for effect in effects {
        match effect {
            Effect::Flip(p) => shape::flip(p, t, index, quad),
            Effect::Stretch(p) => shape::stretch(p, t, index, quad),
            Effect::Squish(p) => shape::squish(p, t, index, quad),
            Effect::Pulse(p) if p.mode == PulseMode::PerLetter => {
                shape::pulse_letter(p, t, index, quad)
            }
            _ => {}
        }
    }
}

/// Final quad for one glyph: baseline plus summed offsets, then deformations.
///
/// Always starts from `baseline`; nothing from a previous frame is read.
pub fn accumulate(
    baseline: &GlyphQuad,
    offset_fx: &[Effect],
    deform_fx: &[Effect],
    t: f64,
    index: usize,
    rng: &mut fastrand::Rng,
) -> GlyphQuad {
    let mut quad = *baseline;
    if !offset_fx.is_empty() {
        quad.translate(glyph_offset(offset_fx, t, index, rng));
    }
    deform(deform_fx, t, index, &mut quad);
    quad
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/accumulate.rs"]
mod tests;
