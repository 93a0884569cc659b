use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn fresh_state_is_the_prerender_pass() {
    let state = PageState::new();
    assert!(!state.is_mounted());
    assert!(state.shapes().is_empty());
}

#[test]
fn mount_runs_exactly_once() {
    let generator = ShapeGenerator::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = PageState::new();

    assert!(state.mount(&generator, 20, &mut rng));
    assert!(state.is_mounted());
    let first = state.shapes().to_vec();
    assert_eq!(first.len(), 20);

    assert!(!state.mount(&generator, 5, &mut rng));
    assert_eq!(state.shapes(), first.as_slice());
}

#[test]
fn unmount_discards_the_batch() {
    let generator = ShapeGenerator::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = PageState::new();
    state.mount(&generator, 20, &mut rng);
    state.unmount();
    assert_eq!(state, PageState::new());

    assert!(state.mount(&generator, 3, &mut rng));
    assert_eq!(state.shapes().len(), 3);
}

#[test]
fn mount_with_respects_the_once_rule() {
    let mut state = PageState::new();
    assert!(state.mount_with(Vec::new()));
    assert!(state.is_mounted());
    assert!(!state.mount_with(Vec::new()));
}
