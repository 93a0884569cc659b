use rand::Rng;

use crate::scene::descriptor::VisualDescriptor;
use crate::scene::generator::ShapeGenerator;

/// In-memory view state of the page.
///
/// A fresh state is the pre-render pass: no shapes, entrance transitions not yet played.
/// [`PageState::mount`] runs the one-shot initialization. Later mounts are no-ops until
/// [`PageState::unmount`] drops the batch again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    shapes: Vec<VisualDescriptor>,
    mounted: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the shape batch and flip the mounted flag. Returns `false` if already mounted.
    #[tracing::instrument(skip(self, generator, rng))]
    pub fn mount<R: Rng + ?Sized>(
        &mut self,
        generator: &ShapeGenerator,
        count: usize,
        rng: &mut R,
    ) -> bool {
        if self.mounted {
            tracing::debug!("mount skipped, already mounted");
            return false;
        }
        self.shapes = generator.generate(count, rng);
        self.mounted = true;
        true
    }

    /// Mount with a batch produced elsewhere (for example loaded from JSON).
    pub fn mount_with(&mut self, shapes: Vec<VisualDescriptor>) -> bool {
        if self.mounted {
            return false;
        }
        tracing::debug!(count = shapes.len(), "mounting preloaded shapes");
        self.shapes = shapes;
        self.mounted = true;
        true
    }

    pub fn unmount(&mut self) {
        self.shapes.clear();
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn shapes(&self) -> &[VisualDescriptor] {
        &self.shapes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
