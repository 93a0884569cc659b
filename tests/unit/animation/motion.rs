use super::*;
use crate::foundation::core::Rgba8;
use crate::scene::descriptor::ShapeVariant;
use crate::scene::glyphs::glyph_run;

fn shape(duration: f64, delay: f64) -> VisualDescriptor {
    VisualDescriptor {
        id: 0,
        shape: ShapeVariant::Circle,
        color: Rgba8::rgb(0, 0, 0),
        size: 30.0,
        x: 50.0,
        y: 50.0,
        duration,
        delay,
    }
}

#[test]
fn shape_pose_starts_mid_cycle_with_negative_delay() {
    let d = shape(20.0, -5.0);
    let pose = shape_pose(&d, 0.0).unwrap();
    assert!((pose.translate_y_px + 30.0).abs() < 1e-9);
    assert!((pose.rotate_deg - 5.0).abs() < 1e-9);
}

#[test]
fn shape_pose_is_periodic() {
    let d = shape(17.5, -3.25);
    let a = shape_pose(&d, 1.0).unwrap();
    let b = shape_pose(&d, 1.0 + 17.5 * 3.0).unwrap();
    assert!((a.translate_y_px - b.translate_y_px).abs() < 1e-6);
    assert!((a.rotate_deg - b.rotate_deg).abs() < 1e-6);
}

#[test]
fn shape_pose_stays_inside_float_envelope() {
    let d = shape(15.0, -11.0);
    for i in 0..300 {
        let pose = shape_pose(&d, f64::from(i) * 0.1).unwrap();
        assert!((-30.0..=0.0).contains(&pose.translate_y_px));
        assert!((-3.0..=5.0).contains(&pose.rotate_deg));
    }
}

#[test]
fn invalid_duration_is_an_animation_error() {
    let d = shape(0.0, -1.0);
    assert!(shape_pose(&d, 0.0).is_err());
}

#[test]
fn dots_rest_at_full_opacity_until_their_delay() {
    assert_eq!(dot_opacity(3, 0.1).unwrap(), 1.0);
    assert!((dot_opacity(0, 1.0).unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(dot_opacity(0, 2.0).unwrap(), 1.0);
}

#[test]
fn glyph_bounce_reaches_ground_mid_cycle() {
    let run = glyph_run("Hello", 0, 0);
    let h = &run[0];
    assert!((glyph_offset(h, 0.0).unwrap() + 0.25).abs() < 1e-9);
    assert!(glyph_offset(h, 0.4).unwrap().abs() < 1e-9);
    // "e" waits 0.1s before it starts bouncing.
    assert_eq!(glyph_offset(&run[1], 0.05).unwrap(), 0.0);
}
