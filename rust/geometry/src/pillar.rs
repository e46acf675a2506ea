// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pillars: the vertical line segments cell corners are positioned along
//!
//! COORD stores one pillar per (nx+1)*(ny+1) grid node as six floats,
//! top point then bottom point. A corner's (x, y) is found by linearly
//! interpolating along the pillar to the corner's ZCORN depth.

use nalgebra::Point3;

use resgrid_core::GridDimensions;

use crate::error::{Error, Result};

/// A pillar line segment, top point to bottom point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pillar {
    pub top: Point3<f64>,
    pub bottom: Point3<f64>,
}

impl Pillar {
    /// Build from one 6-float COORD record
    #[inline]
    pub fn from_record(record: &[f64]) -> Self {
        Self {
            top: Point3::new(record[0], record[1], record[2]),
            bottom: Point3::new(record[3], record[4], record[5]),
        }
    }

    /// Whether the two endpoints share the same z (interpolation undefined)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.bottom.z == self.top.z
    }

    /// Point on the pillar at the given depth.
    ///
    /// The parameter t = (depth - z1) / (z2 - z1) is not clamped: depths
    /// outside [z1, z2] extrapolate along the pillar line, which is what
    /// faulted decks rely on. The caller sees z = depth exactly.
    #[inline]
    pub fn point_at_depth(&self, depth: f64) -> Point3<f64> {
        let t = (depth - self.top.z) / (self.bottom.z - self.top.z);
        Point3::new(
            self.top.x + t * (self.bottom.x - self.top.x),
            self.top.y + t * (self.bottom.y - self.top.y),
            depth,
        )
    }
}

/// All pillars of a grid, indexed by `j * (nx + 1) + i`
#[derive(Debug, Clone)]
pub struct PillarSet {
    pillars: Vec<Pillar>,
    nx: usize,
}

impl PillarSet {
    /// Group the flat COORD array into pillars, checking the count against
    /// the declared dimensions.
    pub fn from_coord(coord: &[f64], dimensions: GridDimensions) -> Result<Self> {
        let expected = dimensions.pillar_count();
        let actual = coord.len() / 6;
        if coord.len() % 6 != 0 || actual != expected {
            return Err(Error::PillarCountMismatch { expected, actual });
        }
        let pillars = coord.chunks_exact(6).map(Pillar::from_record).collect();
        Ok(Self {
            pillars,
            nx: dimensions.nx,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }

    /// Pillar at pillar-grid node (i, j), i in [0, nx], j in [0, ny]
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> &Pillar {
        &self.pillars[j * (self.nx + 1) + i]
    }

    /// Interpolate pillar (i, j) at a depth, rejecting degenerate pillars
    #[inline]
    pub fn point_at(&self, i: usize, j: usize, depth: f64) -> Result<Point3<f64>> {
        let index = j * (self.nx + 1) + i;
        let pillar = &self.pillars[index];
        if pillar.is_degenerate() {
            return Err(Error::DegeneratePillar {
                index,
                z: pillar.top.z,
            });
        }
        Ok(pillar.point_at_depth(depth))
    }
}
