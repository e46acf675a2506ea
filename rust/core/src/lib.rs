// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # resgrid Core Parser
//!
//! Readers for corner-point reservoir grid decks: the Eclipse-style GRDECL
//! text dialect and a versioned JSON encoding of the same data.
//!
//! ## Overview
//!
//! - **Section scanning**: slash-terminated SPECGRID / COORD / ZCORN /
//!   ACTNUM blocks, free-form whitespace, unknown keywords skipped
//! - **Run-length expansion**: compressed `count*value` ACTNUM tokens
//! - **Fail-fast validation**: malformed numbers and array/dimension
//!   mismatches are typed errors, never silent NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use resgrid_core::parse_grdecl;
//!
//! let text = "SPECGRID\n 1 1 1 F /\nCOORD\n 0 0 0 0 0 1  1 0 0 1 0 1\n \
//!             0 1 0 0 1 1  1 1 0 1 1 1 /\nZCORN\n 0 0 0 0 1 1 1 1 /\n";
//! let deck = parse_grdecl(text).unwrap();
//! assert_eq!(deck.dimensions.nx, 1);
//! assert_eq!(deck.active_cell_count(), 1);
//! ```
//!
//! The parsed [`GridDeck`] is a pure value: no I/O happens here, file and
//! network fetching belong to the caller.

pub mod deck;
pub mod error;
pub mod json;
pub mod parser;

pub use deck::{GridDeck, GridDimensions};
pub use error::{Error, Result};
pub use json::{parse_json, JsonGrid, JSON_GRID_VERSION};
pub use parser::{parse_grdecl, Keyword, RawSection, SectionScanner};
