use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_DENOISE_SE_SIZE;
use crate::error::Result;
use crate::morphology::{MorphConfig, StructuringElement};

/// What the labeler does with pixels that are neither 0 nor 255.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryPolicy {
    /// Treat every value below 255 as background and log a warning.
    #[default]
    Lenient,
    /// Reject the grid with `NonBinaryInput`.
    Strict,
}

impl std::fmt::Display for BinaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lenient => write!(f, "Lenient"),
            Self::Strict => write!(f, "Strict"),
        }
    }
}

/// Configuration for connected-component labeling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Run a square opening before labeling to drop speckle noise.
    #[serde(default = "default_denoise")]
    pub denoise: bool,
    /// Side of the denoising opening (both steps).
    #[serde(default = "default_denoise_size")]
    pub denoise_size: usize,
    #[serde(default)]
    pub binary_policy: BinaryPolicy,
    /// Seed for the component colors. `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_denoise() -> bool {
    true
}
fn default_denoise_size() -> usize {
    DEFAULT_DENOISE_SE_SIZE
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            denoise: true,
            denoise_size: DEFAULT_DENOISE_SE_SIZE,
            binary_policy: BinaryPolicy::default(),
            seed: None,
        }
    }
}

impl LabelConfig {
    /// Labels the grid exactly as given, without the denoising opening.
    pub fn without_denoise() -> Self {
        Self {
            denoise: false,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The pre-labeling opening, if enabled.
    pub fn denoise_morph(&self) -> Option<MorphConfig> {
        self.denoise.then(|| MorphConfig::opening(self.denoise_size))
    }

    pub fn validate(&self) -> Result<()> {
        if self.denoise {
            StructuringElement::neighborhood("denoise_size", self.denoise_size)?;
        }
        Ok(())
    }
}
