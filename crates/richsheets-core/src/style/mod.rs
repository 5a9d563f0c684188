//! Formatting types
//!
//! This module contains the formatting building blocks of rich cell contents:
//! - [`Color`] - 8-bit RGB color
//! - [`ScriptLevel`] - Superscript/subscript position of a run
//! - [`Justification`] - Horizontal text alignment of a cell
//! - [`TextWrappingStrategy`] - Overflow handling of a cell
//!
//! Font family and font size are deliberately absent; they do not survive a
//! trip between spreadsheet programs.

mod alignment;
mod color;
mod font;

pub use alignment::{Justification, TextWrappingStrategy};
pub use color::{Channel, Color};
pub use font::ScriptLevel;
