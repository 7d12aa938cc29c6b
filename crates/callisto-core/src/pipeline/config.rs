use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CallistoError, Result};
use crate::labeling::LabelConfig;
use crate::morphology::{BoundaryConfig, MorphConfig};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Binarize the input (`v >= threshold` -> 255) before running the task.
    #[serde(default)]
    pub threshold: Option<u8>,
    #[serde(default)]
    pub task: Task,
}

/// The operation a pipeline run performs on its input grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Task {
    Morphology(MorphConfig),
    Boundary(BoundaryConfig),
    Label(LabelConfig),
}

impl Default for Task {
    fn default() -> Self {
        Self::Label(LabelConfig::default())
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morphology(m) => write!(f, "{}", m.operation),
            Self::Boundary(_) => write!(f, "Boundary"),
            Self::Label(_) => write!(f, "Connected components"),
        }
    }
}

impl Task {
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Morphology(m) => m.validate(),
            Self::Boundary(b) => b.validate(),
            Self::Label(l) => l.validate(),
        }
    }
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, task: Task) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            threshold: None,
            task,
        }
    }

    /// Check every parameter before any file is touched.
    pub fn validate(&self) -> Result<()> {
        self.task.validate()
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| CallistoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CallistoError::Config(e.to_string()))
    }
}
