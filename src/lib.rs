//! hellobounce renders a single decorative landing page: a "Hello World!" heading whose
//! letters bounce, a row of pulsing dots, and a field of floating background shapes.
//!
//! # Pipeline overview
//!
//! 1. **Mount**: `PageState::mount` samples a batch of [`VisualDescriptor`]s once. Before
//!    mount the page is in its pre-render pass (no shapes, entrance transitions pending).
//! 2. **Markup**: [`render_page`] / [`render_document`] turn the state into an HTML tree with
//!    inline styles. Shape rendering is a closed match over [`ShapeVariant`].
//! 3. **Preview** (optional): [`CpuRenderer`] samples the CSS animations at a point in time and
//!    rasterizes the background layer into a [`FrameRGBA`].
//!
//! Generation is deterministic for a seeded RNG; markup and frames are pure functions of the
//! state (and time).
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod markup;
mod render;
mod scene;

pub use animation::ease::Ease;
pub use animation::keyframes::{
    Cycle, Keyframe, Keyframes, Lerp, PULSE_DURATION_S, Pose, bounce_keyframes, float_keyframes,
    float_keyframes_css, pulse_keyframes,
};
pub use animation::motion::{dot_opacity, glyph_offset, shape_pose};
pub use config::PageConfig;
pub use foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Vec2,
};
pub use foundation::error::{PageError, PageResult};
pub use markup::node::{Element, Node};
pub use markup::page::{
    DOT_COUNT, DOT_STAGGER_S, TAGLINE, render_document, render_glyph, render_glyphs, render_page,
};
pub use markup::shape::{SHAPE_OPACITY, base_style, render_shape};
pub use markup::style::{Style, css_num, pct, px, secs};
pub use render::backend::{FrameRGBA, RenderSettings};
pub use render::cpu::{CpuRenderer, shape_path, shape_transform};
pub use render::pipeline::{
    RenderThreading, render_frame, render_frames, render_frames_to_dir, write_png,
};
pub use scene::descriptor::{
    ScalarRange, ShapeBounds, ShapeVariant, VisualDescriptor, descriptors_from_json,
    descriptors_from_path, descriptors_to_json,
};
pub use scene::generator::{DEFAULT_SHAPE_COUNT, ShapeGenerator, generate_shapes};
pub use scene::glyphs::{
    GLYPH_DURATION_S, GLYPH_STAGGER_S, Glyph, HELLO, WORLD, WORLD_COLOR_OFFSET, glyph_run,
    heading_runs,
};
pub use scene::palette::{BACKGROUND, PALETTE, palette_color};
pub use scene::state::PageState;
