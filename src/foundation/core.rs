use crate::foundation::error::{PageError, PageResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> PageResult<Self> {
        if start.0 > end.0 {
            return Err(PageError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

impl Fps {
    pub fn new(num: u32, den: u32) -> PageResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    pub fn validate(self) -> PageResult<()> {
        if self.den == 0 {
            return Err(PageError::validation("Fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(PageError::validation("Fps num must be > 0"));
        }
        Ok(())
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

/// Output raster size in pixels. Both sides must fit the CPU rasterizer (`1..=u16::MAX`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> PageResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(self) -> PageResult<()> {
        let max = u32::from(u16::MAX);
        if self.width == 0 || self.height == 0 {
            return Err(PageError::validation("canvas width/height must be > 0"));
        }
        if self.width > max || self.height > max {
            return Err(PageError::validation(format!(
                "canvas {}x{} exceeds {max}x{max}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Map percentage coordinates (`0..100`) into canvas pixels.
    pub fn percent_to_px(self, x_pct: f64, y_pct: f64) -> Point {
        Point::new(
            x_pct / 100.0 * f64::from(self.width),
            y_pct / 100.0 * f64::from(self.height),
        )
    }
}

/// Straight-alpha RGBA8 color, written and parsed as CSS hex (`#RRGGBB` or `#RRGGBBAA`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn parse_hex(s: &str) -> PageResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| PageError::validation(format!("color '{s}' must start with '#'")))?;
        if !hex.is_ascii() {
            return Err(PageError::validation(format!("color '{s}' is not hex")));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| PageError::validation(format!("color '{s}' is not hex")))
        };
        match hex.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => Err(PageError::validation(format!(
                "color '{s}' must be #RRGGBB or #RRGGBBAA"
            ))),
        }
    }

    /// CSS hex form. Opaque colors omit the alpha byte.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl std::fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = PageError;

    fn try_from(s: String) -> PageResult<Self> {
        Self::parse_hex(&s)
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
