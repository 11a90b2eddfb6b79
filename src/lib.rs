//! Convert SQL `CREATE TABLE` statements into Mermaid `erDiagram` source.
//!
//! The conversion is a pure text transformation: scan the input line by
//! line into a [`model::Schema`], then emit Mermaid entity blocks and
//! relationship lines. Any input produces output; unrecognized lines are
//! skipped rather than reported.

pub mod mermaid;
pub mod model;
pub mod scan;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Convert SQL schema text to Mermaid `erDiagram` source.
pub fn convert(sql: &str) -> String {
    mermaid::render(&scan::scan(sql))
}

/// Convert SQL schema text to Mermaid `erDiagram` source.
#[wasm_bindgen(js_name = "sqlToMermaid")]
pub fn sql_to_mermaid(sql: &str) -> String {
    convert(sql)
}
