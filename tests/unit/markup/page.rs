use super::*;
use crate::scene::generator::ShapeGenerator;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn mounted_state(seed: u64) -> PageState {
    let mut state = PageState::new();
    state.mount(
        &ShapeGenerator::default(),
        20,
        &mut StdRng::seed_from_u64(seed),
    );
    state
}

#[test]
fn hello_renders_five_staggered_glyphs() {
    let glyphs = render_glyphs("Hello", 0, 0);
    assert_eq!(glyphs.len(), 5);
    let delays: Vec<f64> = glyphs
        .iter()
        .map(|n| {
            let s = n.as_element().unwrap().style.get("animation-delay").unwrap();
            s.trim_end_matches('s').parse::<f64>().unwrap()
        })
        .collect();
    for (i, d) in delays.iter().enumerate() {
        assert!((d - i as f64 * 0.1).abs() < 1e-9);
    }
    for w in delays.windows(2) {
        assert!(w[1] > w[0]);
    }
    let first = glyphs[0].as_element().unwrap();
    assert_eq!(first.text_content(), "H");
    assert_eq!(first.style.get("animation-duration"), Some("0.8s"));
    assert_eq!(first.style.get("color"), Some("#FF6B6B"));
}

#[test]
fn prerender_has_no_shapes_and_hidden_entrance() {
    let page = render_page(&PageState::new());
    let root = page.as_element().unwrap();
    let layer = root.find_all(&|e| e.has_class("pointer-events-none"));
    assert_eq!(layer.len(), 1);
    assert!(layer[0].children.is_empty());
    let hidden = root.find_all(&|e| e.has_class("opacity-0"));
    assert_eq!(hidden.len(), 2);
    assert!(hidden[0].has_class("translate-y-8"));
    assert!(hidden[1].has_class("translate-y-4"));
}

#[test]
fn mounted_page_shows_shapes_and_plays_entrance() {
    let state = mounted_state(1);
    let page = render_page(&state);
    let root = page.as_element().unwrap();
    let layer = root.find_all(&|e| e.has_class("pointer-events-none"));
    assert_eq!(layer[0].children.len(), 20);
    assert!(root.find_all(&|e| e.has_class("opacity-0")).is_empty());
    assert_eq!(root.find_all(&|e| e.has_class("opacity-100")).len(), 2);
}

#[test]
fn page_text_and_dots() {
    let page = render_page(&mounted_state(2));
    let root = page.as_element().unwrap();
    let text = root.text_content();
    assert!(text.starts_with("HelloWorld!"));
    assert!(text.contains(TAGLINE));

    let dots = root.find_all(&|e| e.has_class("animate-pulse"));
    assert_eq!(dots.len(), DOT_COUNT);
    assert_eq!(dots[1].style.get("animation-delay"), Some("0.15s"));
    assert_eq!(
        dots[0].style.get("box-shadow"),
        Some("0 4px 20px #FF6B6B80")
    );

    let glyphs = root.find_all(&|e| e.has_class("animate-bounce"));
    assert_eq!(glyphs.len(), 11);
}

#[test]
fn document_is_deterministic_and_carries_keyframes() {
    let a = render_document(&mounted_state(9));
    let b = render_document(&mounted_state(9));
    assert_eq!(a, b);
    assert!(a.starts_with("<!DOCTYPE html>"));
    assert!(a.contains("@keyframes float"));
    assert!(a.contains("bg-[#FFF8E7]"));
    assert_ne!(a, render_document(&mounted_state(10)));
}
