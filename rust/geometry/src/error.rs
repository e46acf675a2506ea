use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during geometry reconstruction
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate pillar {index}: endpoints share z = {z}, cannot interpolate")]
    DegeneratePillar { index: usize, z: f64 },

    #[error("Pillar grid is {expected} pillars but COORD supplies {actual}")]
    PillarCountMismatch { expected: usize, actual: usize },

    #[error("Core parser error: {0}")]
    CoreError(#[from] resgrid_core::Error),
}
