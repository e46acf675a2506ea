//! resgrid WebAssembly Bindings
//!
//! JavaScript/TypeScript API for resgrid built with wasm-bindgen.

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

mod api;
mod utils;

pub use api::{generate_cartesian_js, parse_grdecl_js, parse_json_grid_js, GridJs};
pub use utils::set_panic_hook as init_panic_hook;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::debug_1(&format!("resgrid wasm {} ready", env!("CARGO_PKG_VERSION")).into());
}

/// Get the version of resgrid
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
