use crate::{
    effects::{
        config::{BounceParams, EntranceParams, ShakeParams, SpiralParams, WaveParams},
        staggered,
    },
    foundation::{core::Vec2, math::clamp01},
};

fn phase(speed: f64, t: f64, index: usize) -> f64 {
    speed * t + index as f64
}

/// Slide from `+distance` on Y toward rest with exponential ease-out.
pub fn entrance(p: &EntranceParams, t: f64, index: usize) -> Vec2 {
    let t = staggered(t, p.unit, p.stagger, index);
    let progress = 1.0 - (-t * p.speed).exp();
    Vec2::new(0.0, (1.0 - clamp01(progress)) * p.distance)
}

/// `amplitude * sin(speed*t + i)` on Y.
pub fn wave_y(p: &WaveParams, t: f64, index: usize) -> Vec2 {
    Vec2::new(0.0, p.amplitude * phase(p.speed, t, index).sin())
}

/// `amplitude * sin(speed*t + i)` on X.
pub fn wave_x(p: &WaveParams, t: f64, index: usize) -> Vec2 {
    Vec2::new(p.amplitude * phase(p.speed, t, index).sin(), 0.0)
}

/// Uniform jitter in `[-magnitude, magnitude]` on both axes, resampled every call.
pub fn shake(p: &ShakeParams, rng: &mut fastrand::Rng) -> Vec2 {
    let m = p.magnitude.abs();
    let mut axis = || (rng.f64() * 2.0 - 1.0) * m;
    let x = axis();
    let y = axis();
    Vec2::new(x, y)
}

/// `height * |sin(speed*t + i)|` on Y.
pub fn bounce(p: &BounceParams, t: f64, index: usize) -> Vec2 {
    Vec2::new(0.0, p.height * phase(p.speed, t, index).sin().abs())
}

/// Orbit of radius `size`.
pub fn spiral(p: &SpiralParams, t: f64, index: usize) -> Vec2 {
    let a = phase(p.speed, t, index);
    Vec2::new(p.size * a.sin(), p.size * a.cos())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/motion.rs"]
mod tests;
