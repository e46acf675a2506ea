// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON grid format
//!
//! A versioned JSON encoding of the same deck the GRDECL reader produces.
//! The schema is deliberately concrete: named dimension fields and flat
//! arrays, no free-form maps, so malformed payloads are rejected at the
//! boundary instead of flowing into geometry.
//!
//! ```json
//! {
//!   "version": 1,
//!   "dimensions": { "nx": 2, "ny": 2, "nz": 1 },
//!   "coord": [ ... 6 floats per pillar ... ],
//!   "zcorn": [ ... 8 depths per cell ... ],
//!   "actnum": [ 1, 0, ... ]    // optional, defaults to all active
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::deck::{GridDeck, GridDimensions};
use crate::error::{Error, Result};

/// Schema version this reader accepts
pub const JSON_GRID_VERSION: u32 = 1;

/// Wire form of a JSON grid file
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonGrid {
    pub version: u32,
    pub dimensions: GridDimensions,
    pub coord: Vec<f64>,
    pub zcorn: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actnum: Option<Vec<u64>>,
}

impl JsonGrid {
    /// Convert into a validated deck
    pub fn into_deck(self) -> Result<GridDeck> {
        if self.version != JSON_GRID_VERSION {
            return Err(Error::UnsupportedVersion(self.version));
        }
        let actnum = match self.actnum {
            Some(flags) => flags.iter().map(|&v| (v != 0) as u8).collect(),
            None => vec![1u8; self.dimensions.cell_count()],
        };
        let deck = GridDeck {
            dimensions: self.dimensions,
            coord: self.coord,
            zcorn: self.zcorn,
            actnum,
        };
        deck.validate()?;
        Ok(deck)
    }

    /// Build the wire form from a deck (for export / round-tripping)
    pub fn from_deck(deck: &GridDeck) -> Self {
        Self {
            version: JSON_GRID_VERSION,
            dimensions: deck.dimensions,
            coord: deck.coord.clone(),
            zcorn: deck.zcorn.clone(),
            actnum: Some(deck.actnum.iter().map(|&a| a as u64).collect()),
        }
    }
}

/// Parse a JSON grid file into a validated deck
pub fn parse_json(content: &str) -> Result<GridDeck> {
    let grid: JsonGrid = serde_json::from_str(content)?;
    grid.into_deck()
}
