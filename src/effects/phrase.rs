//! Whole-text kernels: they drive the text block's transform rather than any glyph.

use crate::effects::config::{PulseParams, RotateParams};

/// Whole-phrase pulse scale: `1 + sin(speed*t) * (scale - 1)`.
pub fn pulse_scale(p: &PulseParams, t: f64) -> f64 {
    1.0 + (p.speed * t).sin() * (p.scale - 1.0)
}

/// Whole-text rotation in degrees: `amount * sin(speed*t)`.
pub fn rotate_degrees(p: &RotateParams, t: f64) -> f64 {
    p.amount * (p.speed * t).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/phrase.rs"]
mod tests;
