//! Effect configuration and the kernel library.
//!
//! Kernels are free functions of `(elapsed, glyph index, geometry, params)`;
//! only shake draws from a random source.

pub mod color;
/// Effect identities, parameters and the serializable [`config::EffectSet`].
pub mod config;
/// Position-offset kernels.
pub mod motion;
pub mod phrase;
pub mod shape;

/// Elapsed time for a staggered effect, clamped at zero.
pub(crate) fn staggered(t: f64, unit: config::EffectUnit, per_letter: f64, index: usize) -> f64 {
    let t = match unit {
        config::EffectUnit::Letter => t - per_letter * index as f64,
        config::EffectUnit::Phrase => t,
    };
    t.max(0.0)
}
