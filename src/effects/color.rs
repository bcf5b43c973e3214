//! Color kernels. Each either produces a whole color or an alpha value;
//! the compositor decides how it folds into the running color.

use crate::{
    effects::config::{
        BlinkParams, ColorLerpParams, EffectUnit, FadeParams, FlickerParams, GlowParams,
        RainbowParams, ShineDirection, ShineParams,
    },
    foundation::{
        core::{Point, Rect, Rgba},
        math::{clamp01, gradient_noise2, hsv_to_rgb, lerp, ping_pong, repeat},
    },
};

/// Fully saturated hue cycle, optionally offset per letter.
pub fn rainbow(p: &RainbowParams, t: f64, index: usize) -> Rgba {
    let letter = match p.unit {
        EffectUnit::Letter => p.offset * index as f64,
        EffectUnit::Phrase => 0.0,
    };
    hsv_to_rgb(repeat(p.speed * t + letter, 1.0), 1.0, 1.0)
}

/// Ping-pong between `from` and `to`.
pub fn color_lerp(p: &ColorLerpParams, t: f64) -> Rgba {
    p.from.lerp(p.to, ping_pong(p.speed * t, 1.0))
}

/// Alpha ping-pong in `[0, 1]`.
pub fn fade_alpha(p: &FadeParams, t: f64) -> f64 {
    ping_pong(p.speed * t, 1.0)
}

/// Alpha sampled from coherent noise at `(index, speed*t)`.
pub fn flicker_alpha(p: &FlickerParams, t: f64, index: usize) -> f64 {
    lerp(
        p.min_alpha,
        p.max_alpha,
        gradient_noise2(index as f64, p.speed * t),
    )
}

/// 1 during the first `duty_cycle` of each period, else 0.
pub fn blink_alpha(p: &BlinkParams, t: f64) -> f64 {
    if repeat(p.speed * t, 1.0) < p.duty_cycle {
        1.0
    } else {
        0.0
    }
}

/// Blend from the glyph's base color toward the glow color.
pub fn glow(p: &GlowParams, t: f64, base: Rgba) -> Rgba {
    let tri = ((p.speed * t).sin() + 1.0) * 0.5;
    base.lerp(p.color, tri * p.max)
}

/// Band profile: 1 at the sweep position, falling quadratically to 0 at `width`.
pub fn shine_band(coord: f64, sweep_pos: f64, width: f64) -> f64 {
    if !(width > 0.0) {
        return 0.0;
    }
    let edge = clamp01(1.0 - (coord - sweep_pos).abs() / width);
    edge * edge
}

/// Sweep position along `[lo - width, hi + width]`, or `None` before the delay elapses.
pub fn shine_sweep_pos(p: &ShineParams, t: f64, lo: f64, hi: f64) -> Option<f64> {
    let t = t - p.delay;
    if t < 0.0 {
        return None;
    }
    let s = repeat(t * p.speed, 1.0);
    Some(lerp(lo - p.width, hi + p.width, s))
}

/// Shine strength for a glyph whose baseline midpoint is `mid`.
pub fn shine_strength(p: &ShineParams, t: f64, mid: Point, phrase_bounds: Rect) -> f64 {
    let bounds = match p.unit {
        EffectUnit::Phrase => phrase_bounds,
        EffectUnit::Letter => Rect::from_origin_size(mid, (0.0, 0.0)),
    };
    let (coord, lo, hi) = match p.direction {
        ShineDirection::Horizontal => (mid.x, bounds.x0, bounds.x1),
        ShineDirection::Vertical => (mid.y, bounds.y0, bounds.y1),
    };
    match shine_sweep_pos(p, t, lo, hi) {
        Some(pos) => shine_band(coord, pos, p.width),
        None => 0.0,
    }
}

/// Blend the shine color over `c` with weight `opacity * strength`.
pub fn apply_shine(p: &ShineParams, strength: f64, c: Rgba) -> Rgba {
    if strength <= 0.0 {
        return c;
    }
    let k = p.opacity * strength;
    c.lerp(p.color.with_alpha(k), k)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/color.rs"]
mod tests;
