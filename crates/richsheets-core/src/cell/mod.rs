//! Rich-text cell contents
//!
//! This module contains:
//! - [`CellContentsRun`] - A span of text with one formatting style
//! - [`CellContents`] - A whole cell: runs plus cell-level formatting

mod contents;
mod run;

pub use contents::CellContents;
pub use run::CellContentsRun;
