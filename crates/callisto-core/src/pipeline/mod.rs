pub mod config;
mod orchestrator;
mod types;

pub use config::{PipelineConfig, Task};
pub use orchestrator::{process_grid, run_pipeline, run_pipeline_reported};
pub use types::{PipelineOutput, PipelineStage, ProgressReporter};
