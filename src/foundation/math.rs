//! Scalar helpers shared by the effect kernels.
//!
//! All helpers are total: degenerate lengths produce a neutral value instead of NaN.

use crate::foundation::core::Rgba;

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Wrap `t` into `[0, length)`. Returns 0 for a non-positive length.
pub(crate) fn repeat(t: f64, length: f64) -> f64 {
    if !(length > 0.0) || !t.is_finite() {
        return 0.0;
    }
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Triangle wave bouncing between 0 and `length`.
pub(crate) fn ping_pong(t: f64, length: f64) -> f64 {
    if !(length > 0.0) {
        return 0.0;
    }
    let w = repeat(t, length * 2.0);
    length - (w - length).abs()
}

/// HSV to straight RGBA (alpha 1). `h` is in turns and wraps.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgba {
    let h6 = repeat(h, 1.0) * 6.0;
    let c = v * s;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h6 as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgba::new(r + m, g + m, b + m, 1.0)
}

// SplitMix64 finalizer.
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn lattice_hash(ix: i64, iy: i64) -> u64 {
    mix64((ix as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93) ^ mix64(iy as u64))
}

fn lattice_grad(hash: u64, dx: f64, dy: f64) -> f64 {
    match hash & 7 {
        0 => dx + dy,
        1 => -dx + dy,
        2 => dx - dy,
        3 => -dx - dy,
        4 => dx,
        5 => -dx,
        6 => dy,
        _ => -dy,
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Coherent 2D gradient noise mapped into `[0, 1]`.
///
/// Deterministic for a given `(x, y)`; continuous in both axes.
pub(crate) fn gradient_noise2(x: f64, y: f64) -> f64 {
    if !x.is_finite() || !y.is_finite() {
        return 0.5;
    }
    let x0 = x.floor();
    let y0 = y.floor();
    let (fx, fy) = (x - x0, y - y0);
    let (ix, iy) = (x0 as i64, y0 as i64);

    let g00 = lattice_grad(lattice_hash(ix, iy), fx, fy);
    let g10 = lattice_grad(lattice_hash(ix + 1, iy), fx - 1.0, fy);
    let g01 = lattice_grad(lattice_hash(ix, iy + 1), fx, fy - 1.0);
    let g11 = lattice_grad(lattice_hash(ix + 1, iy + 1), fx - 1.0, fy - 1.0);

    let u = fade(fx);
    let v = fade(fy);
    let n = lerp(lerp(g00, g10, u), lerp(g01, g11, u), v);
    clamp01(0.5 + 0.5 * n)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
