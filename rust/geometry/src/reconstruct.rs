// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corner-point cell reconstruction
//!
//! Walks the (i, j, k) cell space of a validated deck and derives the eight
//! corner points of every active cell: the four bounding pillars give each
//! corner its (x, y) by interpolation at the ZCORN depth, z is the depth
//! itself. Corners land in the shared [`VertexPool`] so adjacent cells
//! reference identical vertices.

use resgrid_core::GridDeck;

use crate::error::Result;
use crate::grid::GridGeometry;
use crate::pillar::PillarSet;
use crate::vertex_pool::VertexPool;

/// ZCORN sub-offsets of corners 0-3 within one cell row pair.
/// Corner order: front-left, front-right, back-right, back-left.
#[inline]
fn corner_sub_offsets(nx: usize) -> [usize; 4] {
    [0, 1, 2 * nx + 1, 2 * nx]
}

/// Pillar-grid nodes bounding cell (i, j), same corner order
#[inline]
fn corner_pillars(i: usize, j: usize) -> [(usize, usize); 4] {
    [(i, j), (i + 1, j), (i + 1, j + 1), (i, j + 1)]
}

/// Reconstruct cell geometry for every active cell of a deck.
///
/// The deck is validated first: COORD / ZCORN / ACTNUM length mismatches
/// and degenerate pillars are reported as errors before or instead of
/// producing corrupt geometry. No partial result is returned on failure.
pub fn reconstruct(deck: &GridDeck) -> Result<GridGeometry> {
    deck.validate()?;

    let d = deck.dimensions;
    let pillars = PillarSet::from_coord(&deck.coord, d)?;

    // A fully active box grid dedups to (nx+1)(ny+1)(nz+1) vertices
    let mut pool = VertexPool::with_capacity((d.nx + 1) * (d.ny + 1) * (d.nz + 1));
    let mut cells: Vec<Option<[u32; 8]>> = vec![None; d.cell_count()];
    let mut active_cell_count = 0usize;

    let subs = corner_sub_offsets(d.nx);
    let deep_shift = 4 * d.nx * d.ny;

    for k in 0..d.nz {
        for j in 0..d.ny {
            for i in 0..d.nx {
                let cell_index = d.cell_index(i, j, k);
                if deck.actnum[cell_index] == 0 {
                    continue;
                }

                let offset = d.zcorn_offset(i, j, k);
                let nodes = corner_pillars(i, j);
                let mut corners = [0u32; 8];

                for c in 0..4 {
                    let (pi, pj) = nodes[c];
                    let shallow = deck.zcorn[offset + subs[c]];
                    let deep = deck.zcorn[offset + deep_shift + subs[c]];
                    corners[c] = pool.insert(pillars.point_at(pi, pj, shallow)?);
                    corners[c + 4] = pool.insert(pillars.point_at(pi, pj, deep)?);
                }

                cells[cell_index] = Some(corners);
                active_cell_count += 1;
            }
        }
    }

    #[cfg(all(target_arch = "wasm32", feature = "debug_geometry"))]
    web_sys::console::log_1(
        &format!(
            "reconstruct: {} active cells, {} pooled vertices",
            active_cell_count,
            pool.len()
        )
        .into(),
    );

    Ok(GridGeometry {
        dimensions: d,
        active_cell_count,
        vertices: pool.into_points(),
        cells,
    })
}
