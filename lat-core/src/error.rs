use thiserror::Error;

/// Errors produced by the lattice generation pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LatticeError {
    /// A packing parameter is outside its valid domain.
    #[error("invalid parameter {name} = {value} (must be {requirement})")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        requirement: &'static str,
    },

    /// The lattice tag did not name a known lattice.
    #[error("unknown lattice kind {0:?} (expected \"square\" or \"hex\")")]
    InvalidLatticeKind(String),

    /// The lattice geometry cannot hold the requested number of points
    /// inside the box.
    #[error("lattice holds at most {capacity} points inside the box, {requested} requested")]
    CapacityExceeded { requested: usize, capacity: usize },
}
