//! # richsheets-core
//!
//! Value model for rich-text spreadsheet cell contents.
//!
//! This crate provides immutable values that spreadsheet adapters (Google
//! Sheets, Gnumeric, ...) read and write:
//! - [`Color`] - 8-bit RGB color
//! - [`CellContentsRun`] - A span of text with bold/italic/underline/
//!   strikethrough, script level and an optional color
//! - [`CellContents`] - A whole cell: a non-empty run list plus optional
//!   justification, background color and wrapping strategy
//!
//! ## Example
//!
//! ```rust
//! use richsheets_core::{CellContents, CellContentsRun, Color, Justification};
//!
//! let cell = CellContents::new(
//!     vec![
//!         CellContentsRun::plain("Hello, ").with_bold(true),
//!         CellContentsRun::plain("World").with_text_color(Some(Color::rgb(200, 0, 0))),
//!     ],
//!     Some(Justification::Center),
//!     None,
//!     None,
//! )?;
//!
//! assert_eq!(cell.plain_text(), "Hello, World");
//!
//! let edited = cell.with_replaced_text("Hello, World!");
//! assert_eq!(edited.runs().len(), 2);
//! assert_eq!(edited.runs()[1].text(), "World!");
//! # Ok::<(), richsheets_core::Error>(())
//! ```

pub mod cell;
pub mod error;
pub mod interop;
pub mod style;

// Re-exports for convenience
pub use cell::{CellContents, CellContentsRun};
pub use error::{Error, Result};
pub use style::{Channel, Color, Justification, ScriptLevel, TextWrappingStrategy};
