use super::*;
use crate::foundation::core::Rgba8;

fn descriptor(shape: ShapeVariant) -> VisualDescriptor {
    VisualDescriptor {
        id: 0,
        shape,
        color: Rgba8::rgb(0x4E, 0xCD, 0xC4),
        size: 40.0,
        x: 12.5,
        y: 80.0,
        duration: 18.0,
        delay: -7.5,
    }
}

fn style_of(n: &Node) -> &Style {
    &n.as_element().unwrap().style
}

#[test]
fn base_style_is_shared_by_all_variants() {
    for v in [
        ShapeVariant::Circle,
        ShapeVariant::Triangle,
        ShapeVariant::Square,
        ShapeVariant::Diamond,
        ShapeVariant::Unknown,
    ] {
        let n = render_shape(&descriptor(v));
        let s = style_of(&n);
        assert_eq!(s.get("position"), Some("absolute"));
        assert_eq!(s.get("left"), Some("12.5%"));
        assert_eq!(s.get("top"), Some("80%"));
        assert_eq!(s.get("opacity"), Some("0.6"));
        assert_eq!(s.get("animation"), Some("float 18s ease-in-out infinite"));
        assert_eq!(s.get("animation-delay"), Some("-7.5s"));
    }
}

#[test]
fn circle_is_fully_rounded() {
    let n = render_shape(&descriptor(ShapeVariant::Circle));
    let s = style_of(&n);
    assert_eq!(s.get("border-radius"), Some("50%"));
    assert_eq!(s.get("background-color"), Some("#4ECDC4"));
    assert_eq!(s.get("width"), Some("40px"));
}

#[test]
fn triangle_is_a_zero_box_with_borders() {
    let n = render_shape(&descriptor(ShapeVariant::Triangle));
    let s = style_of(&n);
    assert_eq!(s.get("width"), Some("0"));
    assert_eq!(s.get("height"), Some("0"));
    assert_eq!(s.get("background-color"), Some("transparent"));
    assert_eq!(s.get("border-left"), Some("20px solid transparent"));
    assert_eq!(s.get("border-right"), Some("20px solid transparent"));
    assert_eq!(s.get("border-bottom"), Some("40px solid #4ECDC4"));
    assert_eq!(s.get("border-radius"), None);
}

#[test]
fn diamond_is_a_rotated_square() {
    let n = render_shape(&descriptor(ShapeVariant::Diamond));
    let s = style_of(&n);
    assert_eq!(s.get("transform"), Some("rotate(45deg)"));
    assert_eq!(s.get("width"), s.get("height"));
    assert_eq!(s.get("border-radius"), None);
}

#[test]
fn square_and_unknown_render_identically() {
    let square = render_shape(&descriptor(ShapeVariant::Square));
    let unknown = render_shape(&descriptor(ShapeVariant::Unknown));
    assert_eq!(style_of(&square).get("border-radius"), Some("4px"));
    assert_eq!(square, unknown);
}
