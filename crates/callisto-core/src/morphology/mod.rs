pub mod boundary;
pub mod element;
pub mod ops;
pub mod reduce;

pub use boundary::{boundary, boundary_with, BoundaryConfig};
pub use element::StructuringElement;
pub use ops::{morphology, MorphConfig, MorphOp};
pub use reduce::{reduce, ReduceMode};
