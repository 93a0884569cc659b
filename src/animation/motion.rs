use crate::animation::keyframes::{
    Cycle, Pose, PULSE_DURATION_S, bounce_keyframes, float_keyframes, pulse_keyframes,
};
use crate::foundation::error::PageResult;
use crate::markup::page::DOT_STAGGER_S;
use crate::scene::descriptor::VisualDescriptor;
use crate::scene::glyphs::{GLYPH_DURATION_S, Glyph};

/// Float pose of a background shape at page time `t_s`.
pub fn shape_pose(d: &VisualDescriptor, t_s: f64) -> PageResult<Pose> {
    let cycle = Cycle::new(d.duration, d.delay)?;
    match cycle.progress_at(t_s) {
        Some(p) => float_keyframes().sample(p),
        None => Ok(Pose::default()),
    }
}

/// Opacity of decorative dot `index` at page time `t_s`.
pub fn dot_opacity(index: usize, t_s: f64) -> PageResult<f64> {
    let cycle = Cycle::new(PULSE_DURATION_S, index as f64 * DOT_STAGGER_S)?;
    match cycle.progress_at(t_s) {
        Some(p) => pulse_keyframes().sample(p),
        None => Ok(1.0),
    }
}

/// Vertical bounce offset of a glyph at page time `t_s`, as a fraction of its height.
pub fn glyph_offset(g: &Glyph, t_s: f64) -> PageResult<f64> {
    let cycle = Cycle::new(GLYPH_DURATION_S, g.delay_s)?;
    match cycle.progress_at(t_s) {
        Some(p) => bounce_keyframes().sample(p),
        None => Ok(0.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
