pub mod components;
pub mod config;
pub mod forest;
pub mod palette;

pub use components::{label, label_default, label_with_rng, ComponentStats, Labeling, NO_LABEL};
pub use config::{BinaryPolicy, LabelConfig};
pub use forest::EquivalenceForest;
pub use palette::random_palette;
