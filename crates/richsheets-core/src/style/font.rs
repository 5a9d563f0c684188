//! Run-level font settings

/// Superscript/subscript position of a run
///
/// Ordered by vertical position: `Subscript < Normal < Superscript`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptLevel {
    /// Lowered
    Subscript,
    /// Normal baseline
    #[default]
    Normal,
    /// Raised
    Superscript,
}

impl ScriptLevel {
    /// Check if this is the normal baseline
    pub fn is_normal(&self) -> bool {
        matches!(self, ScriptLevel::Normal)
    }
}
