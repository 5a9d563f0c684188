//! Formatted text runs

use crate::style::{Color, ScriptLevel};

/// A span of text sharing one formatting style
///
/// Runs are immutable; the `with_*` methods return modified copies. An empty
/// run is a valid run on its own. Whether it may appear inside a cell is
/// decided by [`CellContents`](super::CellContents).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellContentsRun {
    text: String,
    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    script_level: ScriptLevel,
    /// `None` inherits the host spreadsheet's text color
    #[cfg_attr(feature = "serde", serde(default))]
    text_color: Option<Color>,
}

impl CellContentsRun {
    /// The canonical "nothing here" run: empty text, no formatting
    pub const BLANK: CellContentsRun = CellContentsRun {
        text: String::new(),
        bold: false,
        italic: false,
        underline: false,
        strikethrough: false,
        script_level: ScriptLevel::Normal,
        text_color: None,
    };

    /// Create a run with every formatting attribute spelled out
    pub fn new(
        text: impl Into<String>,
        bold: bool,
        italic: bool,
        underline: bool,
        strikethrough: bool,
        script_level: ScriptLevel,
        text_color: Option<Color>,
    ) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
            underline,
            strikethrough,
            script_level,
            text_color,
        }
    }

    /// Create an unformatted run
    ///
    /// ```rust
    /// use richsheets_core::{CellContentsRun, ScriptLevel};
    ///
    /// let run = CellContentsRun::plain("x").with_bold(true);
    /// assert_eq!(run.text(), "x");
    /// assert!(run.is_bold());
    /// assert_eq!(run.script_level(), ScriptLevel::Normal);
    /// ```
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::BLANK
        }
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set strikethrough
    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    /// Set superscript/subscript
    pub fn with_script_level(mut self, script_level: ScriptLevel) -> Self {
        self.script_level = script_level;
        self
    }

    /// Set or clear the text color
    pub fn with_text_color(mut self, text_color: Option<Color>) -> Self {
        self.text_color = text_color;
        self
    }

    /// Copy of this run with different text and identical formatting
    pub fn with_other_text(&self, new_text: impl Into<String>) -> Self {
        Self {
            text: new_text.into(),
            ..*self
        }
    }

    /// Copy of this run with different text, dropped back to the baseline
    ///
    /// Used whenever new text must not inherit a sub/superscript position,
    /// e.g. text appended after a superscript or a wholesale replacement.
    pub fn with_other_text_resetting_script_level(&self, new_text: impl Into<String>) -> Self {
        Self {
            text: new_text.into(),
            script_level: ScriptLevel::Normal,
            ..*self
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn is_underline(&self) -> bool {
        self.underline
    }

    pub fn is_strikethrough(&self) -> bool {
        self.strikethrough
    }

    pub fn script_level(&self) -> ScriptLevel {
        self.script_level
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// Check if any formatting differs from a plain run
    pub fn has_formatting(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.strikethrough
            || !self.script_level.is_normal()
            || self.text_color.is_some()
    }
}

impl Default for CellContentsRun {
    fn default() -> Self {
        Self::BLANK
    }
}
