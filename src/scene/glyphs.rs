use crate::foundation::core::Rgba8;
use crate::scene::palette::palette_color;

/// First heading line.
pub const HELLO: &str = "Hello";
/// Second heading line.
pub const WORLD: &str = "World!";

/// Bounce delay added per glyph position.
pub const GLYPH_STAGGER_S: f64 = 0.1;
/// Bounce period of every glyph.
pub const GLYPH_DURATION_S: f64 = 0.8;
/// Palette offset of the second line.
pub const WORLD_COLOR_OFFSET: usize = 5;

/// One bouncing character.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Glyph {
    pub ch: char,
    /// Position in the whole heading, counting earlier lines.
    pub index: usize,
    pub color: Rgba8,
    pub delay_s: f64,
}

/// Split `text` into glyphs. Character `i` gets palette color `i + color_offset` and bounce
/// delay `(i + index_offset) * 0.1s`.
pub fn glyph_run(text: &str, index_offset: usize, color_offset: usize) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let index = i + index_offset;
            Glyph {
                ch,
                index,
                color: palette_color(i + color_offset),
                delay_s: index as f64 * GLYPH_STAGGER_S,
            }
        })
        .collect()
}

/// Both heading lines as laid out on the page.
pub fn heading_runs() -> [Vec<Glyph>; 2] {
    [
        glyph_run(HELLO, 0, 0),
        glyph_run(WORLD, HELLO.chars().count(), WORLD_COLOR_OFFSET),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/scene/glyphs.rs"]
mod tests;
