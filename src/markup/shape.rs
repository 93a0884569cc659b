use crate::markup::node::{Element, Node};
use crate::markup::style::{Style, pct, px, secs};
use crate::scene::descriptor::{ShapeVariant, VisualDescriptor};

/// Opacity of every floating shape.
pub const SHAPE_OPACITY: f64 = 0.6;

/// Positioning and animation shared by every variant.
pub fn base_style(d: &VisualDescriptor) -> Style {
    Style::new()
        .set("position", "absolute")
        .set("left", pct(d.x))
        .set("top", pct(d.y))
        .set("width", px(d.size))
        .set("height", px(d.size))
        .set("opacity", SHAPE_OPACITY.to_string())
        .set(
            "animation",
            format!("float {} ease-in-out infinite", secs(d.duration)),
        )
        .set("animation-delay", secs(d.delay))
}

/// Render one floating shape.
pub fn render_shape(d: &VisualDescriptor) -> Node {
    let color = d.color.to_hex();
    let style = match d.shape {
        ShapeVariant::Circle => base_style(d)
            .set("background-color", color)
            .set("border-radius", "50%"),
        ShapeVariant::Triangle => base_style(d)
            .set("width", "0")
            .set("height", "0")
            .set("background-color", "transparent")
            .set("border-left", format!("{} solid transparent", px(d.size / 2.0)))
            .set("border-right", format!("{} solid transparent", px(d.size / 2.0)))
            .set("border-bottom", format!("{} solid {color}", px(d.size))),
        ShapeVariant::Diamond => base_style(d)
            .set("background-color", color)
            .set("transform", "rotate(45deg)"),
        ShapeVariant::Square | ShapeVariant::Unknown => {
            if d.shape == ShapeVariant::Unknown {
                tracing::debug!(id = d.id, "unknown shape variant, drawing rounded square");
            }
            base_style(d)
                .set("background-color", color)
                .set("border-radius", "4px")
        }
    };
    Element::new("div").style(style).into()
}

#[cfg(test)]
#[path = "../../tests/unit/markup/shape.rs"]
mod tests;
