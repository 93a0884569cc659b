use crate::foundation::core::Rgba8;

/// The ten page colors, in the order glyphs and dots index into them.
pub const PALETTE: [Rgba8; 10] = [
    Rgba8::rgb(0xFF, 0x6B, 0x6B), // coral red
    Rgba8::rgb(0x4E, 0xCD, 0xC4), // teal
    Rgba8::rgb(0xFF, 0xE6, 0x6D), // sunny yellow
    Rgba8::rgb(0x95, 0xE1, 0xD3), // mint
    Rgba8::rgb(0xF3, 0x81, 0x81), // salmon
    Rgba8::rgb(0xAA, 0x96, 0xDA), // lavender
    Rgba8::rgb(0xFC, 0xBA, 0xD3), // pink
    Rgba8::rgb(0xA8, 0xD8, 0xEA), // sky blue
    Rgba8::rgb(0xFF, 0x9F, 0x43), // orange
    Rgba8::rgb(0x6C, 0x5C, 0xE7), // purple
];

/// Page background (`#FFF8E7`).
pub const BACKGROUND: Rgba8 = Rgba8::rgb(0xFF, 0xF8, 0xE7);

/// Palette color for an arbitrary index, wrapping around.
pub fn palette_color(i: usize) -> Rgba8 {
    PALETTE[i % PALETTE.len()]
}
