// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JavaScript API for resgrid
//!
//! The viewer hands in deck text (fetched on the JS side) or box-grid
//! parameters and gets back a [`GridJs`] handle with typed-array geometry
//! buffers ready for WebGL upload. Parse and validation failures surface as
//! thrown `Error`s with the Rust error message; the previous grid handle
//! stays untouched, so the caller can keep displaying it.

use js_sys::{Float64Array, Int32Array};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use resgrid_core::{parse_grdecl, parse_json};
use resgrid_geometry::{reconstruct, CartesianGrid, GridGeometry};

/// Dimensions summary returned to JavaScript
#[derive(Serialize)]
struct DimensionsJs {
    nx: usize,
    ny: usize,
    nz: usize,
}

/// A reconstructed grid held on the Rust side of the boundary
#[wasm_bindgen]
pub struct GridJs {
    geometry: GridGeometry,
}

#[wasm_bindgen]
impl GridJs {
    /// `{ nx, ny, nz }`
    #[wasm_bindgen(getter)]
    pub fn dimensions(&self) -> Result<JsValue, JsValue> {
        let d = self.geometry.dimensions;
        serde_wasm_bindgen::to_value(&DimensionsJs {
            nx: d.nx,
            ny: d.ny,
            nz: d.nz,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of active cells
    #[wasm_bindgen(getter, js_name = activeCellCount)]
    pub fn active_cell_count(&self) -> usize {
        self.geometry.active_cell_count
    }

    /// Number of deduplicated vertices
    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    /// Deduplicated vertex positions, flat [x0, y0, z0, x1, ...]
    pub fn vertices(&self) -> Float64Array {
        let mut flat = Vec::with_capacity(self.geometry.vertices.len() * 3);
        for p in &self.geometry.vertices {
            flat.push(p.x);
            flat.push(p.y);
            flat.push(p.z);
        }
        Float64Array::from(flat.as_slice())
    }

    /// Corner indices into the vertex buffer, 8 per cell in linear cell
    /// order. Inactive cell slots hold -1 in all 8 entries.
    #[wasm_bindgen(js_name = cellCorners)]
    pub fn cell_corners(&self) -> Int32Array {
        let mut flat = Vec::with_capacity(self.geometry.cells.len() * 8);
        for cell in &self.geometry.cells {
            match cell {
                Some(corners) => flat.extend(corners.iter().map(|&c| c as i32)),
                None => flat.extend([-1i32; 8]),
            }
        }
        Int32Array::from(flat.as_slice())
    }

    /// Axis-aligned bounds as [minX, minY, minZ, maxX, maxY, maxZ]
    pub fn bounds(&self) -> Float64Array {
        let (min, max) = self.geometry.bounds();
        Float64Array::from([min.x, min.y, min.z, max.x, max.y, max.z].as_slice())
    }
}

impl From<GridGeometry> for GridJs {
    fn from(geometry: GridGeometry) -> Self {
        Self { geometry }
    }
}

fn to_js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse GRDECL deck text and reconstruct cell geometry
#[wasm_bindgen(js_name = parseGrdecl)]
pub fn parse_grdecl_js(content: &str) -> Result<GridJs, JsValue> {
    let deck = parse_grdecl(content).map_err(to_js_err)?;
    let geometry = reconstruct(&deck).map_err(to_js_err)?;
    Ok(geometry.into())
}

/// Parse a JSON grid file and reconstruct cell geometry
#[wasm_bindgen(js_name = parseJsonGrid)]
pub fn parse_json_grid_js(content: &str) -> Result<GridJs, JsValue> {
    let deck = parse_json(content).map_err(to_js_err)?;
    let geometry = reconstruct(&deck).map_err(to_js_err)?;
    Ok(geometry.into())
}

/// Generate a synthetic box grid. Spacing defaults to 10 x 10 x 1 when the
/// optional arguments are omitted.
#[wasm_bindgen(js_name = generateCartesian)]
pub fn generate_cartesian_js(
    nx: usize,
    ny: usize,
    nz: usize,
    dx: Option<f64>,
    dy: Option<f64>,
    dz: Option<f64>,
) -> Result<GridJs, JsValue> {
    let mut grid = CartesianGrid::new(nx, ny, nz);
    if let (Some(dx), Some(dy), Some(dz)) = (dx, dy, dz) {
        grid = grid.with_spacing(dx, dy, dz);
    }
    Ok(grid.generate().map_err(to_js_err)?.into())
}
