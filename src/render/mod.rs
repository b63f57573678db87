// src/render/mod.rs
// =============================================================================
// Turns resolved users into the markdown document and writes it out.
//
// Submodules:
// - table:  builds the document text (pure, no I/O)
// - output: writes it to disk
// =============================================================================

mod output;
mod table;

pub use output::write_output;
pub use table::{render_table, TableLayout};
