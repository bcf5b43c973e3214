use super::*;
use crate::effects::config::{EffectUnit, PulseMode};
use kurbo::{Point, Rect};

const EPS: f64 = 1e-9;

fn quad() -> GlyphQuad {
    GlyphQuad::from_rect(Rect::new(0.0, 0.0, 10.0, 20.0))
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

#[test]
fn flip_scales_vertical_distance() {
    let p = FlipParams {
        unit: EffectUnit::Phrase,
        speed: 1.0,
        amount: 1.0,
        delay: 0.0,
    };
    let t = std::f64::consts::FRAC_PI_2 * 3.0; // sin = -1: mirrored
    let mut q = quad();
    flip(&p, t, 0, &mut q);
    assert!(close(q.corners[0], Point::new(0.0, 20.0)));
    assert!(close(q.corners[1], Point::new(0.0, 0.0)));
    assert!(close(q.midpoint(), Point::new(5.0, 10.0)));
}

#[test]
fn flip_letter_delay_clamps_to_start() {
    let p = FlipParams::default();
    // Glyph 40 is delayed 2 s; at t=1 it is held at the t=0 boundary.
    assert_eq!(flip_factor(&p, 1.0, 40), 0.0);
    assert!(flip_factor(&p, 1.0, 0) > 0.0);
}

#[test]
fn stretch_is_uniform_about_midpoint() {
    let p = StretchParams {
        speed: 1.0,
        amount: 2.0,
    };
    let t = std::f64::consts::FRAC_PI_2;
    assert!((stretch_factor(&p, t, 0) - 2.0).abs() < EPS);
    let mut q = quad();
    stretch(&p, t, 0, &mut q);
    assert!(close(q.corners[1], Point::new(-5.0, 30.0)));
    assert!(close(q.corners[3], Point::new(15.0, -10.0)));
}

#[test]
fn squish_only_touches_x() {
    let p = SquishParams {
        speed: 1.0,
        amount: 0.5,
    };
    assert!((squish_factor(&p, 0.0, 0) - 0.5).abs() < EPS);
    let mut q = quad();
    squish(&p, 0.0, 0, &mut q);
    assert!(close(q.corners[0], Point::new(2.5, 0.0)));
    assert!(close(q.corners[2], Point::new(7.5, 20.0)));
}

#[test]
fn pulse_letter_at_rest_is_identity() {
    let p = PulseParams {
        mode: PulseMode::PerLetter,
        speed: 3.0,
        scale: 1.5,
    };
    let mut q = quad();
    pulse_letter(&p, 0.0, 0, &mut q);
    assert_eq!(q, quad());
    assert!((pulse_factor(&p, 0.0, 1) - (1.0 + 1.0f64.sin() * 0.5)).abs() < EPS);
}
