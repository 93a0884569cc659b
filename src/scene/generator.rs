use rand::Rng;

use crate::foundation::error::PageResult;
use crate::scene::descriptor::{ShapeBounds, ShapeVariant, VisualDescriptor};
use crate::scene::palette::PALETTE;

/// Shape count used by the landing page.
pub const DEFAULT_SHAPE_COUNT: usize = 20;

/// Generate `count` descriptors with the default bounds.
///
/// Ids run `0..count`. Every field is sampled independently and uniformly.
pub fn generate_shapes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<VisualDescriptor> {
    sample_batch(count, &ShapeBounds::default(), rng)
}

/// Batch generator with configurable bounds.
#[derive(Clone, Debug, Default)]
pub struct ShapeGenerator {
    bounds: ShapeBounds,
}

impl ShapeGenerator {
    pub fn new(bounds: ShapeBounds) -> PageResult<Self> {
        bounds.validate()?;
        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> &ShapeBounds {
        &self.bounds
    }

    #[tracing::instrument(skip(self, rng))]
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<VisualDescriptor> {
        let shapes = sample_batch(count, &self.bounds, rng);
        tracing::debug!(count = shapes.len(), "generated shape batch");
        shapes
    }
}

fn sample_batch<R: Rng + ?Sized>(
    count: usize,
    bounds: &ShapeBounds,
    rng: &mut R,
) -> Vec<VisualDescriptor> {
    (0..count)
        .map(|i| VisualDescriptor {
            id: i as u64,
            shape: ShapeVariant::GENERATED[rng.gen_range(0..ShapeVariant::GENERATED.len())],
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            size: bounds.size.sample(rng),
            x: bounds.x.sample(rng),
            y: bounds.y.sample(rng),
            duration: bounds.duration.sample(rng),
            delay: bounds.delay.sample(rng),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/generator.rs"]
mod tests;
