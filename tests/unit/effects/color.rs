use super::*;
use crate::effects::config::EffectUnit;

const EPS: f64 = 1e-9;

#[test]
fn rainbow_letter_offsets_hue() {
    let p = RainbowParams {
        unit: EffectUnit::Letter,
        speed: 0.0,
        offset: 0.5,
    };
    assert_eq!(rainbow(&p, 3.0, 0), Rgba::RED);
    let c = rainbow(&p, 3.0, 1);
    assert!(c.r.abs() < EPS && (c.g - 1.0).abs() < EPS && (c.b - 1.0).abs() < EPS);

    let phrase = RainbowParams {
        unit: EffectUnit::Phrase,
        ..p
    };
    assert_eq!(rainbow(&phrase, 3.0, 1), Rgba::RED);
}

#[test]
fn color_lerp_ping_pongs() {
    let p = ColorLerpParams::default();
    assert_eq!(color_lerp(&p, 0.0), Rgba::WHITE);
    assert_eq!(color_lerp(&p, 1.0), Rgba::RED);
    assert_eq!(color_lerp(&p, 2.0), Rgba::WHITE);
}

#[test]
fn fade_is_triangle() {
    let p = FadeParams { speed: 1.0 };
    assert!((fade_alpha(&p, 0.25) - 0.25).abs() < EPS);
    assert!((fade_alpha(&p, 1.75) - 0.25).abs() < EPS);
}

#[test]
fn flicker_stays_between_bounds() {
    let p = FlickerParams::default();
    for i in 0..30 {
        let a = flicker_alpha(&p, i as f64 * 0.071, i % 5);
        assert!(a >= p.min_alpha - EPS && a <= p.max_alpha + EPS);
        assert_eq!(a, flicker_alpha(&p, i as f64 * 0.071, i % 5));
    }
}

#[test]
fn blink_duty_cycle() {
    let p = BlinkParams {
        speed: 1.0,
        duty_cycle: 0.5,
    };
    assert_eq!(blink_alpha(&p, 0.0), 1.0);
    assert_eq!(blink_alpha(&p, 0.3), 1.0);
    assert_eq!(blink_alpha(&p, 0.5), 0.0);
    assert_eq!(blink_alpha(&p, 0.7), 0.0);
    assert_eq!(blink_alpha(&p, 1.3), 1.0);
}

#[test]
fn glow_reaches_glow_color_at_peak() {
    let p = GlowParams {
        color: Rgba::CYAN,
        max: 1.0,
        speed: 1.0,
    };
    let base = Rgba::new(0.2, 0.2, 0.2, 1.0);
    let peak = glow(&p, std::f64::consts::FRAC_PI_2, base);
    assert!(peak.r.abs() < EPS && (peak.g - 1.0).abs() < EPS);
    let trough = glow(&p, -std::f64::consts::FRAC_PI_2, base);
    assert!((trough.r - 0.2).abs() < EPS);
}

#[test]
fn shine_band_bounds() {
    assert_eq!(shine_band(10.0, 10.0, 5.0), 1.0);
    assert_eq!(shine_band(15.0, 10.0, 5.0), 0.0);
    assert_eq!(shine_band(40.0, 10.0, 5.0), 0.0);
    assert!((shine_band(12.5, 10.0, 5.0) - 0.25).abs() < EPS);
    assert_eq!(shine_band(10.0, 10.0, 0.0), 0.0);
}

#[test]
fn shine_waits_for_delay() {
    let p = ShineParams {
        delay: 1.0,
        ..ShineParams::default()
    };
    let mid = Point::new(0.0, 0.0);
    let bounds = Rect::new(-100.0, -10.0, 100.0, 10.0);
    assert_eq!(shine_strength(&p, 0.5, mid, bounds), 0.0);
    assert!(shine_sweep_pos(&p, 0.5, 0.0, 1.0).is_none());
}

#[test]
fn shine_phrase_sweep_hits_center_midway() {
    let p = ShineParams {
        width: 50.0,
        speed: 1.0,
        ..ShineParams::default()
    };
    let bounds = Rect::new(-100.0, -10.0, 100.0, 10.0);
    // s = 0.5 puts the band at the center of [-150, 150].
    assert!((shine_strength(&p, 0.5, Point::new(0.0, 0.0), bounds) - 1.0).abs() < EPS);
    assert_eq!(shine_strength(&p, 0.0, Point::new(0.0, 0.0), bounds), 0.0);
}

#[test]
fn shine_letter_sweeps_each_glyph() {
    let p = ShineParams {
        unit: EffectUnit::Letter,
        direction: ShineDirection::Vertical,
        width: 10.0,
        ..ShineParams::default()
    };
    let a = shine_strength(&p, 0.5, Point::new(0.0, 0.0), Rect::ZERO);
    let b = shine_strength(&p, 0.5, Point::new(300.0, 42.0), Rect::ZERO);
    assert!((a - 1.0).abs() < EPS);
    assert!((b - 1.0).abs() < EPS);
}

#[test]
fn apply_shine_blends_toward_shine_color() {
    let p = ShineParams {
        color: Rgba::WHITE,
        opacity: 1.0,
        ..ShineParams::default()
    };
    let c = Rgba::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(apply_shine(&p, 0.0, c), c);
    let full = apply_shine(&p, 1.0, c);
    assert_eq!(full, Rgba::WHITE);
    let half = apply_shine(&p, 0.5, c);
    assert!((half.r - 0.5).abs() < EPS);
    assert!((half.a - 0.75).abs() < EPS);
}
