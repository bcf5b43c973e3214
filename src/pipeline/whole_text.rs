use crate::{
    effects::{
        config::{Effect, PulseMode},
        phrase,
    },
    foundation::core::{Transform2D, Vec2},
};

/// Whole-text transform for this frame, pivoting about `anchor`.
///
/// Returns identity when neither whole-phrase pulse nor rotate is in `effects`, so a
/// previous frame's scale or rotation never persists.
pub fn whole_text_transform(effects: &[Effect], t: f64, anchor: Vec2) -> Transform2D {
    let mut out = Transform2D::identity_at(anchor);
    for effect in effects {
        match effect {
            Effect::Pulse(p) if p.mode == PulseMode::WholePhrase => {
                let s = phrase::pulse_scale(p, t);
                out.scale = Vec2::new(s, s);
            }
            Effect::Rotate(p) => {
                out.rotation_rad = phrase::rotate_degrees(p, t).to_radians();
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/whole_text.rs"]
mod tests;
