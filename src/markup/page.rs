use crate::animation::keyframes::float_keyframes_css;
use crate::markup::node::{Element, Node};
use crate::markup::shape::render_shape;
use crate::markup::style::{Style, secs};
use crate::scene::glyphs::{GLYPH_DURATION_S, Glyph, glyph_run, heading_runs};
use crate::scene::palette::{BACKGROUND, PALETTE};
use crate::scene::state::PageState;

/// Number of decorative dots under the heading.
pub const DOT_COUNT: usize = 6;
/// Pulse delay added per dot.
pub const DOT_STAGGER_S: f64 = 0.15;

pub const TAGLINE: &str = "Welcome to the colorful side of code";

const HEADING_CLASS: &str = "font-display text-6xl sm:text-8xl md:text-9xl lg:text-[10rem] font-bold tracking-tight";

/// Render one bouncing glyph.
pub fn render_glyph(g: &Glyph) -> Node {
    Element::new("span")
        .class("inline-block animate-bounce cursor-default transition-transform hover:scale-125")
        .style(
            Style::new()
                .set("color", g.color.to_hex())
                .set("animation-delay", secs(g.delay_s))
                .set("animation-duration", secs(GLYPH_DURATION_S))
                .set("text-shadow", "3px 3px 0 rgba(0,0,0,0.1)"),
        )
        .text(g.ch.to_string())
        .into()
}

/// Render `text` character by character; see [`glyph_run`] for the offsets.
pub fn render_glyphs(text: &str, index_offset: usize, color_offset: usize) -> Vec<Node> {
    glyph_run(text, index_offset, color_offset)
        .iter()
        .map(render_glyph)
        .collect()
}

fn entrance_class(base: &str, mounted: bool, hidden_offset: &str) -> String {
    if mounted {
        format!("{base} opacity-100 translate-y-0")
    } else {
        format!("{base} opacity-0 {hidden_offset}")
    }
}

fn decorative_dots() -> Element {
    let dots = PALETTE.iter().take(DOT_COUNT).enumerate().map(|(i, color)| {
        let dot = Element::new("div")
            .class("w-6 h-6 md:w-8 md:h-8 rounded-full animate-pulse")
            .style(
                Style::new()
                    .set("background-color", color.to_hex())
                    .set("animation-delay", secs(i as f64 * DOT_STAGGER_S))
                    .set(
                        "box-shadow",
                        format!("0 4px 20px {}", color.with_alpha(0x80).to_hex()),
                    ),
            );
        Node::from(dot)
    });
    Element::new("div")
        .class("mt-8 md:mt-12 flex justify-center gap-2 md:gap-3")
        .children(dots)
}

/// Build the full page tree for `state`.
pub fn render_page(state: &PageState) -> Node {
    let mounted = state.is_mounted();
    let [hello, world] = heading_runs();

    let background = Element::new("div")
        .class("absolute inset-0 pointer-events-none")
        .children(state.shapes().iter().map(render_shape));

    let heading = Element::new("div")
        .class(entrance_class(
            "text-center transition-all duration-1000",
            mounted,
            "translate-y-8",
        ))
        .child(
            Element::new("h1")
                .class(format!("{HEADING_CLASS} mb-2 md:mb-4"))
                .children(hello.iter().map(render_glyph)),
        )
        .child(
            Element::new("h1")
                .class(HEADING_CLASS)
                .children(world.iter().map(render_glyph)),
        )
        .child(decorative_dots());

    let tagline = Element::new("p")
        .class(entrance_class(
            "mt-8 md:mt-12 text-lg md:text-xl text-gray-600 font-body tracking-wide transition-all duration-1000 delay-500",
            mounted,
            "translate-y-4",
        ))
        .text(TAGLINE);

    let main = Element::new("main")
        .class("relative z-10 flex-1 flex flex-col items-center justify-center px-4 py-8")
        .child(heading)
        .child(tagline);

    let footer = Element::new("footer")
        .class("relative z-10 pb-4 md:pb-6 text-center")
        .child(
            Element::new("p")
                .class("text-xs md:text-sm text-gray-400 font-body")
                .text("Requested by ")
                .child(Element::new("span").class("text-gray-500").text("@PauliusX"))
                .text(" \u{b7} Built by ")
                .child(Element::new("span").class("text-gray-500").text("@clonkbot")),
        );

    Element::new("div")
        .class(format!(
            "relative min-h-screen overflow-hidden bg-[{}] flex flex-col",
            BACKGROUND.to_hex()
        ))
        .child(background)
        .child(main)
        .child(footer)
        .child(Element::new("style").child(Node::Raw(float_keyframes_css())))
        .into()
}

/// Render `state` as a complete HTML5 document.
#[tracing::instrument(skip(state), fields(mounted = state.is_mounted(), shapes = state.shapes().len()))]
pub fn render_document(state: &PageState) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text("Hello World!"));
    let body = Element::new("body").child(render_page(state));
    let html: Node = Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(body)
        .into();

    let mut out = String::from("<!DOCTYPE html>\n");
    html.write_html(&mut out);
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/markup/page.rs"]
mod tests;
