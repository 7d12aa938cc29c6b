use tracing::{debug, info};

use crate::error::Result;
use crate::grid::{binarize, Grid};
use crate::io::image_io::{load_grid, save_color_grid, save_grid};
use crate::labeling::label;
use crate::morphology::boundary_with;

use super::config::{PipelineConfig, Task};
use super::types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Run the configured task on an in-memory grid (no file I/O).
pub fn process_grid(grid: &Grid, config: &PipelineConfig) -> Result<PipelineOutput> {
    config.validate()?;

    let binarized;
    let input = match config.threshold {
        Some(t) => {
            debug!(threshold = t, "Binarizing input");
            binarized = binarize(grid, t);
            &binarized
        }
        None => grid,
    };

    match &config.task {
        Task::Morphology(m) => Ok(PipelineOutput::Gray(m.apply(input)?)),
        Task::Boundary(b) => Ok(PipelineOutput::Gray(boundary_with(input, b)?)),
        Task::Label(l) => Ok(PipelineOutput::Labeled(label(input, l)?)),
    }
}

/// Run the full pipeline (load, process, save) with a progress reporter.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    config.validate()?;

    reporter.begin_stage(PipelineStage::Reading);
    let grid = load_grid(&config.input)?;
    let (height, width) = grid.dim();
    info!(input = %config.input.display(), width, height, "Grid loaded");
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Processing);
    let output = process_grid(&grid, config)?;
    match output.component_count() {
        Some(count) => info!(task = %config.task, count, "Task complete"),
        None => info!(task = %config.task, "Task complete"),
    }
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Writing);
    match &output {
        PipelineOutput::Gray(g) => save_grid(g, &config.output)?,
        PipelineOutput::Labeled(l) => save_color_grid(&l.colors, &config.output)?,
    }
    info!(output = %config.output.display(), "Output saved");
    reporter.finish_stage();

    Ok(output)
}

/// Run the full pipeline (load, process, save).
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput> {
    run_pipeline_reported(config, &NoOpReporter)
}
