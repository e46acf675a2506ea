// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Synthetic Cartesian grid generator
//!
//! Produces the same deck contract as the file readers for a regular
//! axis-aligned box grid, so viewers have something to show before a file
//! is loaded. Geometry goes through the common reconstructor, which keeps
//! the corner ordering identical to parsed decks by construction.

use resgrid_core::{GridDeck, GridDimensions};

use crate::error::Result;
use crate::grid::GridGeometry;
use crate::reconstruct::reconstruct;

/// Default cell spacing in grid units
pub const DEFAULT_SPACING: (f64, f64, f64) = (10.0, 10.0, 1.0);

/// Regular box grid description
#[derive(Debug, Clone, Copy)]
pub struct CartesianGrid {
    pub dimensions: GridDimensions,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl CartesianGrid {
    /// Box grid with the default 10 x 10 x 1 spacing
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        let (dx, dy, dz) = DEFAULT_SPACING;
        Self {
            dimensions: GridDimensions::new(nx, ny, nz),
            dx,
            dy,
            dz,
        }
    }

    /// Override the per-cell spacing
    pub fn with_spacing(mut self, dx: f64, dy: f64, dz: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self.dz = dz;
        self
    }

    /// Build the deck: vertical pillars on the (i, j) lattice, flat layer
    /// interfaces at multiples of dz, all cells active.
    pub fn deck(&self) -> GridDeck {
        let d = self.dimensions;
        let depth = d.nz as f64 * self.dz;

        let mut coord = Vec::with_capacity(6 * d.pillar_count());
        for j in 0..=d.ny {
            for i in 0..=d.nx {
                let x = i as f64 * self.dx;
                let y = j as f64 * self.dy;
                coord.extend_from_slice(&[x, y, 0.0, x, y, depth]);
            }
        }

        let mut zcorn = Vec::with_capacity(8 * d.cell_count());
        for k in 0..d.nz {
            for plane in 0..2usize {
                let z = (k + plane) as f64 * self.dz;
                zcorn.extend(std::iter::repeat(z).take(4 * d.nx * d.ny));
            }
        }

        GridDeck {
            dimensions: d,
            coord,
            zcorn,
            actnum: vec![1; d.cell_count()],
        }
    }

    /// Generate cell geometry directly
    pub fn generate(&self) -> Result<GridGeometry> {
        reconstruct(&self.deck())
    }
}
