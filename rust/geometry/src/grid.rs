// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reconstructed grid geometry
//!
//! The output contract consumed by viewers: a deduplicated vertex list plus
//! one 8-corner index set per cell slot (None for inactive cells). Built
//! once per parse or generate call and immutable afterwards; a re-parse
//! replaces the whole structure.

use nalgebra::Point3;

use resgrid_core::GridDimensions;

/// Fixed corner order of a cell hexahedron.
///
/// Corners 0-3 are the shallow face (front-left, front-right, back-right,
/// back-left in the i/j plane), corners 4-7 the deep face directly below
/// them along increasing k. Downstream triangulation relies on this winding.
pub const CORNERS_PER_CELL: usize = 8;

/// Geometry of one grid, vertices shared across cells
#[derive(Debug, Clone)]
pub struct GridGeometry {
    pub dimensions: GridDimensions,
    /// Number of cells with nonzero ACTNUM (and hence geometry)
    pub active_cell_count: usize,
    /// Deduplicated vertex pool
    pub vertices: Vec<Point3<f64>>,
    /// Per-cell corner indices into `vertices`, linear cell order,
    /// `None` for inactive cells
    pub cells: Vec<Option<[u32; CORNERS_PER_CELL]>>,
}

impl GridGeometry {
    /// Corner indices of cell (i, j, k), if it is active
    #[inline]
    pub fn cell(&self, i: usize, j: usize, k: usize) -> Option<&[u32; CORNERS_PER_CELL]> {
        self.cells[self.dimensions.cell_index(i, j, k)].as_ref()
    }

    /// Literal corner points of cell (i, j, k), if it is active
    pub fn cell_corners(&self, i: usize, j: usize, k: usize) -> Option<[Point3<f64>; 8]> {
        self.cell(i, j, k)
            .map(|indices| indices.map(|idx| self.vertices[idx as usize]))
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active_cell_count == 0
    }

    /// Axis-aligned bounds of all pooled vertices
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        if self.vertices.is_empty() {
            return (Point3::origin(), Point3::origin());
        }
        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);
        for p in &self.vertices {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        (min, max)
    }
}
