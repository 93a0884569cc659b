use super::*;

fn linear_keys() -> Keyframes<f64> {
    Keyframes::new(vec![
        Keyframe {
            offset: 0.0,
            value: 0.0,
            ease: Ease::Linear,
        },
        Keyframe {
            offset: 1.0,
            value: 10.0,
            ease: Ease::Linear,
        },
    ])
    .unwrap()
}

#[test]
fn keyframes_linear_interpolates() {
    let kf = linear_keys();
    assert_eq!(kf.sample(0.5).unwrap(), 5.0);
    assert_eq!(kf.sample(1.0).unwrap(), 10.0);
    assert_eq!(kf.sample(2.0).unwrap(), 10.0);
}

#[test]
fn keyframes_validation() {
    assert!(Keyframes::<f64>::new(Vec::new()).is_err());
    let unsorted = vec![
        Keyframe {
            offset: 0.6,
            value: 1.0,
            ease: Ease::Linear,
        },
        Keyframe {
            offset: 0.2,
            value: 2.0,
            ease: Ease::Linear,
        },
    ];
    assert!(matches!(
        Keyframes::new(unsorted),
        Err(PageError::Animation(_))
    ));
    let out_of_range = vec![Keyframe {
        offset: 1.5,
        value: 1.0,
        ease: Ease::Linear,
    }];
    assert!(Keyframes::new(out_of_range).is_err());
}

#[test]
fn presets_are_valid() {
    float_keyframes().validate().unwrap();
    bounce_keyframes().validate().unwrap();
    pulse_keyframes().validate().unwrap();
}

#[test]
fn float_hits_its_keyframe_poses() {
    let kf = float_keyframes();
    assert_eq!(kf.sample(0.0).unwrap(), Pose::new(0.0, 0.0));
    assert_eq!(kf.sample(0.25).unwrap(), Pose::new(-30.0, 5.0));
    assert_eq!(kf.sample(0.5).unwrap(), Pose::new(-15.0, -3.0));
    assert_eq!(kf.sample(0.75).unwrap(), Pose::new(-25.0, 2.0));
    assert_eq!(kf.sample(1.0).unwrap(), Pose::new(0.0, 0.0));
    // ease-in-out is symmetric, so the segment midpoint is the value midpoint.
    let mid = kf.sample(0.125).unwrap();
    assert!((mid.translate_y_px + 15.0).abs() < 1e-4);
}

#[test]
fn cycle_honors_negative_delay_and_wraps() {
    let c = Cycle::new(20.0, -5.0).unwrap();
    assert!((c.progress_at(0.0).unwrap() - 0.25).abs() < 1e-12);
    assert!((c.progress_at(15.0).unwrap() - 0.0).abs() < 1e-12);
    assert!((c.progress_at(25.0).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn cycle_is_idle_before_positive_delay() {
    let c = Cycle::new(2.0, 0.3).unwrap();
    assert_eq!(c.progress_at(0.1), None);
    assert_eq!(c.progress_at(0.3), Some(0.0));
    assert!(Cycle::new(0.0, 0.0).is_err());
    assert!(Cycle::new(1.0, f64::INFINITY).is_err());
}

#[test]
fn float_css_merges_start_and_end() {
    let css = float_keyframes_css();
    assert!(css.contains("@keyframes float"));
    assert!(css.contains("0%, 100% {"));
    assert!(css.contains("transform: translateY(0) rotate(0deg);"));
    assert!(css.contains("25% {\n      transform: translateY(-30px) rotate(5deg);"));
    assert!(css.contains("transform: translateY(-15px) rotate(-3deg);"));
    assert!(css.contains("transform: translateY(-25px) rotate(2deg);"));
}
