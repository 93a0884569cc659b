use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{PageError, PageResult};
use crate::scene::descriptor::ShapeBounds;
use crate::scene::generator::{DEFAULT_SHAPE_COUNT, ShapeGenerator};
use crate::scene::state::PageState;

/// Page configuration, loadable from JSON.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Number of floating shapes generated on mount.
    pub shape_count: usize,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Sampling bounds of descriptor fields.
    pub bounds: ShapeBounds,
    /// Preview raster size.
    pub canvas: Canvas,
    /// Preview frame rate.
    pub fps: Fps,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            shape_count: DEFAULT_SHAPE_COUNT,
            seed: None,
            bounds: ShapeBounds::default(),
            canvas: Canvas::default(),
            fps: Fps::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(s: &str) -> PageResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| PageError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[tracing::instrument]
    pub fn from_path(path: &Path) -> PageResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            PageError::Other(
                anyhow::Error::from(e)
                    .context(format!("failed to read config '{}'", path.display())),
            )
        })?;
        Self::from_json(&s)
    }

    pub fn validate(&self) -> PageResult<()> {
        self.bounds.validate()?;
        self.canvas.validate()?;
        self.fps.validate()?;
        Ok(())
    }

    pub fn generator(&self) -> PageResult<ShapeGenerator> {
        ShapeGenerator::new(self.bounds)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Run the one-shot mount with this config's generator and seed.
    pub fn mounted_state(&self) -> PageResult<PageState> {
        let generator = self.generator()?;
        let mut rng = self.rng();
        let mut state = PageState::new();
        state.mount(&generator, self.shape_count, &mut rng);
        Ok(state)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
