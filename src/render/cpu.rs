use kurbo::Shape;

use crate::animation::keyframes::Pose;
use crate::animation::motion::{dot_opacity, shape_pose};
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{PageError, PageResult};
use crate::markup::page::DOT_COUNT;
use crate::markup::shape::SHAPE_OPACITY;
use crate::render::backend::{FrameRGBA, RenderSettings};
use crate::scene::descriptor::{ShapeVariant, VisualDescriptor};
use crate::scene::palette::PALETTE;
use crate::scene::state::PageState;

/// Dot diameter in pixels (`w-6`).
const DOT_DIAMETER: f64 = 24.0;
/// Gap between dots in pixels (`gap-2`).
const DOT_GAP: f64 = 8.0;
/// Vertical center of the dot row as a fraction of the canvas height.
const DOT_ROW_Y: f64 = 0.68;
/// Corner radius of the square variant.
const SQUARE_RADIUS: f64 = 4.0;
const TOLERANCE: f64 = 0.1;

/// CPU preview renderer powered by `vello_cpu`.
///
/// The render context is kept between frames of the same size.
pub struct CpuRenderer {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Rasterize the background layer of `state` at page time `t_s`.
    #[tracing::instrument(skip(self, state), fields(shapes = state.shapes().len()))]
    pub fn render_frame(
        &mut self,
        state: &PageState,
        canvas: Canvas,
        t_s: f64,
    ) -> PageResult<FrameRGBA> {
        canvas.validate()?;
        if !t_s.is_finite() {
            return Err(PageError::render("frame time must be finite"));
        }
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| PageError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| PageError::render("canvas height exceeds u16"))?;

        let settings = self.settings;
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        self.with_ctx_mut(width, height, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            if let Some(c) = settings.clear {
                ctx.set_paint(paint_color(c));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(width),
                    f64::from(height),
                ));
            }

            for d in state.shapes() {
                let pose = shape_pose(d, t_s)?;
                draw_shape(ctx, d, pose, canvas)?;
            }

            // Dots belong to the entrance-animated heading, which is hidden before mount.
            if settings.draw_dots && state.is_mounted() {
                draw_dots(ctx, canvas, t_s)?;
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> PageResult<R>,
    ) -> PageResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

/// Geometry of a shape in its own box, which spans `[0, size]` on both axes.
pub fn shape_path(variant: ShapeVariant, size: f64) -> BezPath {
    let half = size / 2.0;
    match variant {
        ShapeVariant::Circle => kurbo::Circle::new(Point::new(half, half), half).to_path(TOLERANCE),
        ShapeVariant::Triangle => {
            let mut p = BezPath::new();
            p.move_to(Point::new(half, 0.0));
            p.line_to(Point::new(size, size));
            p.line_to(Point::new(0.0, size));
            p.close_path();
            p
        }
        ShapeVariant::Diamond => {
            let about = Affine::rotate_about(std::f64::consts::FRAC_PI_4, Point::new(half, half));
            about * Rect::new(0.0, 0.0, size, size).to_path(TOLERANCE)
        }
        ShapeVariant::Square | ShapeVariant::Unknown => Rect::new(0.0, 0.0, size, size)
            .to_rounded_rect(SQUARE_RADIUS.min(half))
            .to_path(TOLERANCE),
    }
}

/// Box-to-canvas transform: place the box at its percentage offset, then apply the float pose
/// about the box center (the CSS default `transform-origin`).
pub fn shape_transform(d: &VisualDescriptor, pose: Pose, canvas: Canvas) -> Affine {
    let origin = canvas.percent_to_px(d.x, d.y).to_vec2();
    let center = Vec2::new(d.size / 2.0, d.size / 2.0);
    Affine::translate(origin + center)
        * Affine::translate(Vec2::new(0.0, pose.translate_y_px))
        * Affine::rotate(pose.rotate_deg.to_radians())
        * Affine::translate(-center)
}

fn draw_shape(
    ctx: &mut vello_cpu::RenderContext,
    d: &VisualDescriptor,
    pose: Pose,
    canvas: Canvas,
) -> PageResult<()> {
    if !(d.size.is_finite() && d.size > 0.0) {
        return Err(PageError::render(format!(
            "shape {} has invalid size {}",
            d.id, d.size
        )));
    }
    if d.shape == ShapeVariant::Unknown {
        tracing::debug!(id = d.id, "unknown shape variant, drawing rounded square");
    }
    let path = shape_path(d.shape, d.size);
    ctx.set_transform(affine_to_cpu(shape_transform(d, pose, canvas)));
    ctx.set_paint(paint_color(d.color));
    ctx.push_opacity_layer(SHAPE_OPACITY as f32);
    ctx.fill_path(&bezpath_to_cpu(&path));
    ctx.pop_layer();
    Ok(())
}

fn draw_dots(ctx: &mut vello_cpu::RenderContext, canvas: Canvas, t_s: f64) -> PageResult<()> {
    let n = DOT_COUNT as f64;
    let row_w = n * DOT_DIAMETER + (n - 1.0) * DOT_GAP;
    let x0 = (f64::from(canvas.width) - row_w) / 2.0;
    let cy = f64::from(canvas.height) * DOT_ROW_Y;
    let r = DOT_DIAMETER / 2.0;

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    for (i, color) in PALETTE.iter().take(DOT_COUNT).enumerate() {
        let opacity = dot_opacity(i, t_s)?;
        let cx = x0 + r + (i as f64) * (DOT_DIAMETER + DOT_GAP);
        let path = kurbo::Circle::new(Point::new(cx, cy), r).to_path(TOLERANCE);
        ctx.set_paint(paint_color(*color));
        ctx.push_opacity_layer(opacity as f32);
        ctx.fill_path(&bezpath_to_cpu(&path));
        ctx.pop_layer();
    }
    Ok(())
}

fn paint_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
