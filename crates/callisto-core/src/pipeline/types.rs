use crate::grid::Grid;
use crate::labeling::Labeling;

/// Pipeline processing stage, used for logging and progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Processing,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading grid"),
            Self::Processing => write!(f, "Processing"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Result of a pipeline run: a grayscale grid or a labeling.
#[derive(Clone, Debug)]
pub enum PipelineOutput {
    Gray(Grid),
    Labeled(Labeling),
}

impl PipelineOutput {
    /// Number of components, for labeling runs.
    pub fn component_count(&self) -> Option<usize> {
        match self {
            Self::Gray(_) => None,
            Self::Labeled(l) => Some(l.count),
        }
    }
}

/// Progress reporting for the pipeline. All methods default to no-ops.
pub trait ProgressReporter {
    fn begin_stage(&self, _stage: PipelineStage) {}

    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
