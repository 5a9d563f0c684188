//! Cell-level text layout: justification and wrapping
//!
//! Neither type has a default. A cell that leaves them unset stores `None`,
//! which means "whatever the host spreadsheet would do" (for justification,
//! Left for left-to-right scripts and Right for right-to-left ones).

/// Horizontal justification of a cell's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Justification {
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
}

/// What a cell does with text wider than the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextWrappingStrategy {
    /// Spill into empty neighbouring cells
    Overflow,
    /// Break onto additional lines
    Wrap,
    /// Cut off at the cell border
    Clip,
}
