pub mod consts;
pub mod error;
pub mod grid;
pub mod io;
pub mod labeling;
pub mod morphology;
pub mod pipeline;

pub use error::{CallistoError, Result};
pub use grid::{ColorGrid, Grid, Rgb};
pub use labeling::{label, label_default, LabelConfig, Labeling};
pub use morphology::{boundary, morphology, MorphOp};
