//! Line and header amount calculations.
//!
//! - `line` - per-line tier conversion and raw field edits
//! - `header` - per-tier rollup of the line collection

pub mod header;
pub mod line;

#[cfg(test)]
mod line_props;

pub use header::aggregate_header;
pub use line::{apply_edit, recalculate_line, recalculate_line_in_place, round_entry};
