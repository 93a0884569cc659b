use crate::foundation::core::Rgba8;
use crate::foundation::error::{PageError, PageResult};
use crate::scene::palette::BACKGROUND;

/// A rendered frame as RGBA8 pixels.
///
/// Frames come out of the rasterizer **premultiplied**. The `premultiplied` flag makes this
/// explicit at API boundaries; [`FrameRGBA::to_straight`] converts for image encoders.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to straight alpha. A no-op for frames that are already straight.
    pub fn to_straight(mut self) -> PageResult<Self> {
        let expected = (self.width as usize) * (self.height as usize) * 4;
        if self.data.len() != expected {
            return Err(PageError::render(format!(
                "frame buffer has {} bytes, expected {expected}",
                self.data.len()
            )));
        }
        if !self.premultiplied {
            return Ok(self);
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
        Ok(self)
    }
}

/// Settings for the CPU preview renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Color the frame is cleared to before drawing. `None` leaves it transparent.
    pub clear: Option<Rgba8>,
    /// Draw the pulsing dot row under the heading.
    pub draw_dots: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear: Some(BACKGROUND),
            draw_dots: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
