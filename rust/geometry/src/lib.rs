//! resgrid Geometry Reconstruction
//!
//! Turns a validated corner-point deck into renderable cell geometry:
//! per-cell hexahedron corners interpolated onto pillars, with a
//! deduplicated vertex pool shared across cells. Also provides the
//! synthetic Cartesian generator used when no file is loaded.

pub mod cartesian;
pub mod error;
pub mod grid;
pub mod pillar;
pub mod reconstruct;
pub mod vertex_pool;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use cartesian::{CartesianGrid, DEFAULT_SPACING};
pub use error::{Error, Result};
pub use grid::{GridGeometry, CORNERS_PER_CELL};
pub use pillar::{Pillar, PillarSet};
pub use reconstruct::reconstruct;
pub use vertex_pool::VertexPool;
