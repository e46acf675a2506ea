// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grid deck data model
//!
//! A [`GridDeck`] is the structured, validated form of a corner-point grid
//! deck: logical dimensions, pillar coordinates (COORD), corner depths
//! (ZCORN) and per-cell active flags (ACTNUM). Both readers (GRDECL text and
//! JSON) produce this type; the geometry crate consumes it read-only.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Logical extents of the structured (i, j, k) index space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl GridDimensions {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Number of vertical pillars: (nx+1) * (ny+1)
    #[inline]
    pub fn pillar_count(&self) -> usize {
        (self.nx + 1) * (self.ny + 1)
    }

    /// Linear cell index for (i, j, k)
    #[inline]
    pub fn cell_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.nx + k * self.nx * self.ny
    }

    /// Pillar index for pillar-grid coordinate (i, j), i in [0, nx], j in [0, ny]
    #[inline]
    pub fn pillar_index(&self, i: usize, j: usize) -> usize {
        j * (self.nx + 1) + i
    }

    /// Base offset of cell (i, j, k) into the ZCORN array.
    ///
    /// ZCORN holds 2*nx * 2*ny * 2*nz depths; each cell reads its four
    /// shallow-face depths at `offset`, `offset+1`, `offset+2*nx+1`,
    /// `offset+2*nx`, and its deep-face depths at the same sub-offsets
    /// shifted by `4*nx*ny`.
    #[inline]
    pub fn zcorn_offset(&self, i: usize, j: usize, k: usize) -> usize {
        2 * (i + j * (2 * self.nx) + k * (2 * self.nx * 2 * self.ny))
    }
}

/// Structured corner-point grid deck
///
/// Arrays are stored exactly as the file dialect lays them out:
/// - `coord`: 6 floats per pillar (x1, y1, z1, x2, y2, z2), pillar-row major
/// - `zcorn`: 8 depths per cell in the interleaved block layout
/// - `actnum`: one flag per cell, 0 = inactive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridDeck {
    pub dimensions: GridDimensions,
    pub coord: Vec<f64>,
    pub zcorn: Vec<f64>,
    pub actnum: Vec<u8>,
}

impl GridDeck {
    /// Check array lengths against the declared dimensions.
    ///
    /// Inconsistencies are reported here, before any geometry is built, so
    /// the reconstructor never discovers them by out-of-bounds access.
    pub fn validate(&self) -> Result<()> {
        let d = self.dimensions;
        if d.nx == 0 || d.ny == 0 || d.nz == 0 {
            return Err(Error::parse(
                0,
                format!("grid dimensions must be positive, got {}x{}x{}", d.nx, d.ny, d.nz),
            ));
        }

        let checks: [(&'static str, usize, usize); 3] = [
            ("COORD", 6 * d.pillar_count(), self.coord.len()),
            ("ZCORN", 8 * d.cell_count(), self.zcorn.len()),
            ("ACTNUM", d.cell_count(), self.actnum.len()),
        ];
        for (section, expected, actual) in checks {
            if expected != actual {
                return Err(Error::DimensionMismatch {
                    section,
                    expected,
                    actual,
                    nx: d.nx,
                    ny: d.ny,
                    nz: d.nz,
                });
            }
        }
        Ok(())
    }

    /// Whether cell (i, j, k) is active
    #[inline]
    pub fn is_active(&self, i: usize, j: usize, k: usize) -> bool {
        self.actnum[self.dimensions.cell_index(i, j, k)] != 0
    }

    /// Number of active cells in the deck
    pub fn active_cell_count(&self) -> usize {
        self.actnum.iter().filter(|&&a| a != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_deck() -> GridDeck {
        GridDeck {
            dimensions: GridDimensions::new(1, 1, 1),
            coord: vec![0.0; 24],
            zcorn: vec![0.0; 8],
            actnum: vec![1],
        }
    }

    #[test]
    fn test_cell_index_order() {
        let d = GridDimensions::new(3, 4, 5);
        assert_eq!(d.cell_index(0, 0, 0), 0);
        assert_eq!(d.cell_index(1, 0, 0), 1);
        assert_eq!(d.cell_index(0, 1, 0), 3);
        assert_eq!(d.cell_index(0, 0, 1), 12);
        assert_eq!(d.cell_index(2, 3, 4), 3 * 4 * 5 - 1);
    }

    #[test]
    fn test_pillar_index() {
        let d = GridDimensions::new(2, 2, 1);
        assert_eq!(d.pillar_count(), 9);
        assert_eq!(d.pillar_index(0, 0), 0);
        assert_eq!(d.pillar_index(2, 0), 2);
        assert_eq!(d.pillar_index(0, 1), 3);
        assert_eq!(d.pillar_index(2, 2), 8);
    }

    #[test]
    fn test_zcorn_offset() {
        let d = GridDimensions::new(2, 2, 2);
        assert_eq!(d.zcorn_offset(0, 0, 0), 0);
        assert_eq!(d.zcorn_offset(1, 0, 0), 2);
        assert_eq!(d.zcorn_offset(0, 1, 0), 8);
        assert_eq!(d.zcorn_offset(0, 0, 1), 32);
    }

    #[test]
    fn test_validate_ok() {
        assert!(unit_deck().validate().is_ok());
    }

    #[test]
    fn test_validate_short_zcorn() {
        let mut deck = unit_deck();
        deck.zcorn.pop();
        match deck.validate() {
            Err(Error::DimensionMismatch { section, expected, actual, .. }) => {
                assert_eq!(section, "ZCORN");
                assert_eq!(expected, 8);
                assert_eq!(actual, 7);
            }
            other => panic!("Expected ZCORN mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_wrong_coord_count() {
        let mut deck = unit_deck();
        deck.coord.truncate(18);
        assert!(matches!(
            deck.validate(),
            Err(Error::DimensionMismatch { section: "COORD", .. })
        ));
    }

    #[test]
    fn test_validate_zero_dimension() {
        let mut deck = unit_deck();
        deck.dimensions.nz = 0;
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_active_cell_count() {
        let mut deck = unit_deck();
        assert_eq!(deck.active_cell_count(), 1);
        deck.actnum[0] = 0;
        assert_eq!(deck.active_cell_count(), 0);
        assert!(!deck.is_active(0, 0, 0));
    }
}
