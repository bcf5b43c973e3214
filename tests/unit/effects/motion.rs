use super::*;

const EPS: f64 = 1e-9;

#[test]
fn wave_y_is_periodic() {
    let p = WaveParams {
        speed: 1.0,
        amplitude: 5.0,
    };
    let a = wave_y(&p, 0.0, 0);
    let b = wave_y(&p, std::f64::consts::TAU, 0);
    assert!((a.y - b.y).abs() < EPS);
    assert_eq!(a.x, 0.0);

    let phased = wave_y(&p, 0.0, 1);
    assert!((phased.y - 5.0 * 1.0f64.sin()).abs() < EPS);
}

#[test]
fn wave_x_moves_only_x() {
    let p = WaveParams {
        speed: 2.0,
        amplitude: 3.0,
    };
    let v = wave_x(&p, 0.4, 2);
    assert_eq!(v.y, 0.0);
    assert!((v.x - 3.0 * (0.8f64 + 2.0).sin()).abs() < EPS);
}

#[test]
fn entrance_boundaries() {
    let p = EntranceParams {
        unit: crate::effects::config::EffectUnit::Phrase,
        distance: 500.0,
        speed: 3.0,
        stagger: 0.05,
    };
    assert_eq!(entrance(&p, 0.0, 0), Vec2::new(0.0, 500.0));
    assert!(entrance(&p, 100.0, 0).y.abs() < 1e-6);
    assert!(entrance(&p, 0.5, 0).y < entrance(&p, 0.25, 0).y);
}

#[test]
fn entrance_letter_stagger_clamps_before_start() {
    let p = EntranceParams::default();
    // Glyph 10 starts 0.5 s late: before that it sits at full distance.
    assert_eq!(entrance(&p, 0.2, 10), Vec2::new(0.0, p.distance));
    assert!(entrance(&p, 0.6, 10).y < p.distance);
    assert!(entrance(&p, 0.2, 0).y < entrance(&p, 0.2, 3).y);
}

#[test]
fn shake_stays_in_range_and_varies() {
    let p = ShakeParams { magnitude: 2.0 };
    let mut rng = fastrand::Rng::with_seed(7);
    let samples: Vec<Vec2> = (0..64).map(|_| shake(&p, &mut rng)).collect();
    for v in &samples {
        assert!(v.x.abs() <= 2.0 && v.y.abs() <= 2.0);
    }
    assert!(samples.windows(2).any(|w| w[0] != w[1]));

    let still = ShakeParams { magnitude: 0.0 };
    assert_eq!(shake(&still, &mut rng), Vec2::ZERO);
}

#[test]
fn bounce_is_never_negative() {
    let p = BounceParams::default();
    for i in 0..40 {
        let v = bounce(&p, i as f64 * 0.13, i % 4);
        assert!(v.y >= 0.0 && v.y <= p.height);
        assert_eq!(v.x, 0.0);
    }
}

#[test]
fn spiral_has_constant_radius() {
    let p = SpiralParams {
        speed: 2.0,
        size: 5.0,
    };
    for i in 0..10 {
        let v = spiral(&p, i as f64 * 0.3, i);
        assert!((v.hypot() - 5.0).abs() < EPS);
    }
    assert!((spiral(&p, 0.0, 0).y - 5.0).abs() < EPS);
}
