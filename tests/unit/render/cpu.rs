use super::*;
use crate::scene::palette::BACKGROUND;

const RED: Rgba8 = Rgba8::rgb(255, 0, 0);

fn one_shape(shape: ShapeVariant, delay: f64) -> PageState {
    let mut state = PageState::new();
    state.mount_with(vec![VisualDescriptor {
        id: 0,
        shape,
        color: RED,
        size: 40.0,
        x: 30.0,
        y: 30.0,
        duration: 20.0,
        delay,
    }]);
    state
}

fn render(state: &PageState, t: f64) -> FrameRGBA {
    let mut r = CpuRenderer::new(RenderSettings {
        draw_dots: false,
        ..RenderSettings::default()
    });
    r.render_frame(state, Canvas::new(100, 100).unwrap(), t)
        .unwrap()
}

fn is_background(px: [u8; 4]) -> bool {
    px == [BACKGROUND.r, BACKGROUND.g, BACKGROUND.b, 255]
}

fn is_tinted_red(px: [u8; 4]) -> bool {
    // 60% red over the page background.
    px[0] >= 250 && (95..=104).contains(&px[1]) && (88..=97).contains(&px[2]) && px[3] == 255
}

#[test]
fn frame_has_canvas_size_and_background() {
    let f = render(&PageState::new(), 0.0);
    assert_eq!(f.width, 100);
    assert_eq!(f.height, 100);
    assert_eq!(f.data.len(), 100 * 100 * 4);
    assert!(f.premultiplied);
    assert!(is_background(f.pixel(0, 0).unwrap()));
    assert!(is_background(f.pixel(99, 99).unwrap()));
}

#[test]
fn square_fills_its_box_at_sixty_percent() {
    let f = render(&one_shape(ShapeVariant::Square, 0.0), 0.0);
    assert!(is_tinted_red(f.pixel(50, 50).unwrap()));
    assert!(is_tinted_red(f.pixel(33, 33).unwrap()));
    assert!(is_background(f.pixel(20, 50).unwrap()));
}

#[test]
fn diamond_and_circle_leave_box_corners_empty() {
    for v in [ShapeVariant::Diamond, ShapeVariant::Circle] {
        let f = render(&one_shape(v, 0.0), 0.0);
        assert!(is_tinted_red(f.pixel(50, 50).unwrap()), "{v:?}");
        assert!(is_background(f.pixel(33, 33).unwrap()), "{v:?}");
    }
}

#[test]
fn triangle_points_up() {
    let f = render(&one_shape(ShapeVariant::Triangle, 0.0), 0.0);
    assert!(is_tinted_red(f.pixel(50, 65).unwrap()));
    assert!(is_background(f.pixel(33, 35).unwrap()));
    assert!(is_background(f.pixel(66, 35).unwrap()));
}

#[test]
fn unknown_variant_draws_the_square() {
    let a = render(&one_shape(ShapeVariant::Square, 0.0), 0.0);
    let b = render(&one_shape(ShapeVariant::Unknown, 0.0), 0.0);
    assert_eq!(a, b);
}

#[test]
fn float_pose_lifts_the_shape() {
    // Delay -5s of a 20s cycle starts a quarter in: 30px up.
    let f = render(&one_shape(ShapeVariant::Square, -5.0), 0.0);
    assert!(is_tinted_red(f.pixel(50, 20).unwrap()));
    assert!(is_background(f.pixel(50, 60).unwrap()));
}

#[test]
fn dots_only_draw_after_mount() {
    let canvas = Canvas::new(320, 100).unwrap();
    let mut r = CpuRenderer::new(RenderSettings::default());
    let dot_center = (160 - 92 + 12, 68);

    let pre = r.render_frame(&PageState::new(), canvas, 0.0).unwrap();
    assert!(is_background(
        pre.pixel(dot_center.0, dot_center.1).unwrap()
    ));

    let mut mounted = PageState::new();
    mounted.mount_with(Vec::new());
    let post = r.render_frame(&mounted, canvas, 0.0).unwrap();
    let px = post.pixel(dot_center.0, dot_center.1).unwrap();
    let want = [PALETTE[0].r, PALETTE[0].g, PALETTE[0].b, 255];
    for (got, want) in px.iter().zip(want) {
        assert!(got.abs_diff(want) <= 2, "{px:?}");
    }
}

#[test]
fn non_finite_time_is_rejected() {
    let mut r = CpuRenderer::new(RenderSettings::default());
    let err = r
        .render_frame(&PageState::new(), Canvas::default(), f64::NAN)
        .unwrap_err();
    assert!(matches!(err, PageError::Render(_)));
}

#[test]
fn shape_path_bounds_match_box() {
    let sq = shape_path(ShapeVariant::Square, 40.0).bounding_box();
    assert!((sq.width() - 40.0).abs() < 1e-6);
    let tri = shape_path(ShapeVariant::Triangle, 40.0).bounding_box();
    assert_eq!(tri, Rect::new(0.0, 0.0, 40.0, 40.0));
    let dia = shape_path(ShapeVariant::Diamond, 40.0).bounding_box();
    assert!((dia.width() - 40.0 * std::f64::consts::SQRT_2).abs() < 1e-6);
}
