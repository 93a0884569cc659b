use rand::Rng;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{PageError, PageResult};

/// Which shape-rendering branch a descriptor takes.
///
/// The generator only produces the four named variants. `Unknown` exists so that descriptor
/// JSON written by other tools (or by hand) still loads: any unrecognized name lands here and
/// renders as the rounded square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeVariant {
    /// Fully rounded disc.
    Circle,
    /// Upward-pointing triangle drawn from borders.
    Triangle,
    /// Rounded square.
    Square,
    /// Square rotated by 45 degrees.
    Diamond,
    /// Any variant name this crate does not know. The original name is not kept: it
    /// serializes back as `"unknown"`.
    #[serde(other)]
    Unknown,
}

impl ShapeVariant {
    /// Variants the generator samples from, in sampling order.
    pub const GENERATED: [ShapeVariant; 4] = [
        ShapeVariant::Circle,
        ShapeVariant::Triangle,
        ShapeVariant::Square,
        ShapeVariant::Diamond,
    ];
}

/// Half-open scalar interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalarRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl ScalarRange {
    /// Construct a range without validating it.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `v` lies in `[min, max)`.
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v < self.max
    }

    /// Reject non-finite, empty, or overflowing ranges.
    pub fn validate(self, name: &str) -> PageResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PageError::validation(format!(
                "bounds.{name} must be finite"
            )));
        }
        if self.min >= self.max {
            return Err(PageError::validation(format!(
                "bounds.{name} requires min < max (got [{}, {}))",
                self.min, self.max
            )));
        }
        if !(self.max - self.min).is_finite() {
            return Err(PageError::validation(format!(
                "bounds.{name} is too wide to sample (got [{}, {}))",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Draw uniformly from the range. The range must be valid.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..self.max)
    }
}

/// Sampling bounds for every numeric descriptor field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeBounds {
    /// Edge length in CSS pixels.
    pub size: ScalarRange,
    /// Horizontal position as a percentage of the page width.
    pub x: ScalarRange,
    /// Vertical position as a percentage of the page height.
    pub y: ScalarRange,
    /// Float animation period in seconds.
    pub duration: ScalarRange,
    /// Float animation delay in seconds; negative values start mid-cycle.
    pub delay: ScalarRange,
}

impl Default for ShapeBounds {
    fn default() -> Self {
        Self {
            size: ScalarRange::new(20.0, 60.0),
            x: ScalarRange::new(0.0, 100.0),
            y: ScalarRange::new(0.0, 100.0),
            duration: ScalarRange::new(15.0, 25.0),
            delay: ScalarRange::new(-20.0, 0.0),
        }
    }
}

impl ShapeBounds {
    pub fn validate(&self) -> PageResult<()> {
        self.size.validate("size")?;
        self.x.validate("x")?;
        self.y.validate("y")?;
        self.duration.validate("duration")?;
        self.delay.validate("delay")?;
        if self.size.min <= 0.0 {
            return Err(PageError::validation("bounds.size must be positive"));
        }
        if self.duration.min <= 0.0 {
            return Err(PageError::validation("bounds.duration must be positive"));
        }
        Ok(())
    }

    /// Whether every numeric field of `d` lies inside these bounds.
    pub fn admits(&self, d: &VisualDescriptor) -> bool {
        self.size.contains(d.size)
            && self.x.contains(d.x)
            && self.y.contains(d.y)
            && self.duration.contains(d.duration)
            && self.delay.contains(d.delay)
    }
}

/// Parameters of one floating background shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualDescriptor {
    /// Sequence number within its batch.
    pub id: u64,
    /// Rendering branch.
    pub shape: ShapeVariant,
    /// Fill color.
    pub color: Rgba8,
    /// Edge length in CSS pixels.
    pub size: f64,
    /// Left offset in percent.
    pub x: f64,
    /// Top offset in percent.
    pub y: f64,
    /// Float animation period in seconds.
    pub duration: f64,
    /// Float animation delay in seconds.
    pub delay: f64,
}

/// Parse a descriptor list from JSON, rejecting non-finite numbers.
pub fn descriptors_from_json(s: &str) -> PageResult<Vec<VisualDescriptor>> {
    let shapes: Vec<VisualDescriptor> =
        serde_json::from_str(s).map_err(|e| PageError::serde(e.to_string()))?;
    for d in &shapes {
        let fields = [d.size, d.x, d.y, d.duration, d.delay];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(PageError::validation(format!(
                "shape {} has a non-finite field",
                d.id
            )));
        }
        if d.duration <= 0.0 {
            return Err(PageError::validation(format!(
                "shape {} duration must be positive",
                d.id
            )));
        }
        if d.size <= 0.0 {
            return Err(PageError::validation(format!(
                "shape {} size must be positive",
                d.id
            )));
        }
    }
    Ok(shapes)
}

/// Load a descriptor list written by [`descriptors_to_json`] (or by hand).
pub fn descriptors_from_path(path: &std::path::Path) -> PageResult<Vec<VisualDescriptor>> {
    let s = std::fs::read_to_string(path).map_err(|e| {
        PageError::Other(
            anyhow::Error::from(e).context(format!("failed to read shapes '{}'", path.display())),
        )
    })?;
    descriptors_from_json(&s)
}

/// Pretty JSON form of a descriptor list.
pub fn descriptors_to_json(shapes: &[VisualDescriptor]) -> PageResult<String> {
    serde_json::to_string_pretty(shapes).map_err(|e| PageError::serde(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/descriptor.rs"]
mod tests;
