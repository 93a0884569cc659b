use super::*;

#[test]
fn endpoints_are_fixed() {
    for ease in [
        Ease::Linear,
        Ease::InOutQuad,
        Ease::OutCubic,
        Ease::CSS_EASE_IN_OUT,
        Ease::CubicBezier {
            x1: 0.8,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        },
    ] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn css_ease_in_out_is_symmetric() {
    let e = Ease::CSS_EASE_IN_OUT;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
    for t in [0.1, 0.2, 0.3, 0.4] {
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-6);
    }
    assert!(e.apply(0.1) < 0.1);
}

#[test]
fn linear_bezier_is_identity() {
    let e = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    for t in [0.05, 0.25, 0.5, 0.75, 0.95] {
        assert!((e.apply(t) - t).abs() < 1e-5);
    }
}

#[test]
fn bezier_is_monotonic_for_monotonic_control_points() {
    let e = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = e.apply(f64::from(i) / 100.0);
        assert!(v + 1e-9 >= prev);
        prev = v;
    }
}

#[test]
fn css_text() {
    assert_eq!(
        Ease::CSS_EASE_IN_OUT.to_css().as_deref(),
        Some("cubic-bezier(0.42, 0, 0.58, 1)")
    );
    assert_eq!(Ease::Linear.to_css().as_deref(), Some("linear"));
    assert_eq!(Ease::InQuad.to_css(), None);
}
