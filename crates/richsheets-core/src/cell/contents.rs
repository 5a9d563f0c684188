//! Whole-cell rich text contents

use std::borrow::Cow;
use std::fmt;

use super::CellContentsRun;
use crate::error::{Error, Result};
use crate::style::{Color, Justification, TextWrappingStrategy};

/// The full contents of one cell: formatted runs plus cell-level formatting
///
/// Two invariants hold for every value:
/// - there is at least one run;
/// - if there is more than one run, none of them has empty text.
///
/// An empty-text cell is therefore always exactly one run, which may still
/// carry formatting (Google Sheets and Gnumeric both tell a bold empty cell
/// from a plain one). There is no second way to spell "no text".
///
/// ## Example
///
/// ```rust
/// use richsheets_core::{CellContents, CellContentsRun, ScriptLevel};
///
/// let cell = CellContents::new(
///     vec![
///         CellContentsRun::plain("x"),
///         CellContentsRun::plain("2").with_script_level(ScriptLevel::Superscript),
///     ],
///     None,
///     None,
///     None,
/// )
/// .unwrap();
///
/// let cell = cell.with_appended_text(" + 1");
/// assert_eq!(cell.plain_text(), "x2 + 1");
/// assert_eq!(cell.runs().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "serde_shim::RawCellContents")
)]
pub struct CellContents {
    runs: Box<[CellContentsRun]>,
    /// `None` uses the script's natural direction (Left for LTR, Right for RTL)
    justification: Option<Justification>,
    background_color: Option<Color>,
    /// `None` uses the host spreadsheet's default
    wrapping_strategy: Option<TextWrappingStrategy>,
}

impl CellContents {
    /// Create cell contents, validating the run list
    ///
    /// The runs are moved (or, for a slice, copied) into storage owned by the
    /// new value; nothing the caller does afterwards can change it.
    pub fn new(
        runs: impl Into<Vec<CellContentsRun>>,
        justification: Option<Justification>,
        background_color: Option<Color>,
        wrapping_strategy: Option<TextWrappingStrategy>,
    ) -> Result<Self> {
        let runs = runs.into();
        validate_runs(&runs)?;

        Ok(Self {
            runs: runs.into_boxed_slice(),
            justification,
            background_color,
            wrapping_strategy,
        })
    }

    /// Create contents holding a single run (always valid, even if empty)
    pub fn from_run(run: CellContentsRun) -> Self {
        Self {
            runs: Box::new([run]),
            justification: None,
            background_color: None,
            wrapping_strategy: None,
        }
    }

    /// Create contents holding one unformatted run
    pub fn plain(text: impl Into<String>) -> Self {
        Self::from_run(CellContentsRun::plain(text))
    }

    /// A blank cell: one [`CellContentsRun::BLANK`] run and no cell formatting
    ///
    /// Blank values are ordinary values; any two of them compare equal.
    pub fn blank() -> Self {
        Self::from_run(CellContentsRun::BLANK)
    }

    /// Set or clear the justification
    pub fn with_justification(mut self, justification: Option<Justification>) -> Self {
        self.justification = justification;
        self
    }

    /// Set or clear the background color
    pub fn with_background_color(mut self, background_color: Option<Color>) -> Self {
        self.background_color = background_color;
        self
    }

    /// Set or clear the wrapping strategy
    pub fn with_wrapping_strategy(
        mut self,
        wrapping_strategy: Option<TextWrappingStrategy>,
    ) -> Self {
        self.wrapping_strategy = wrapping_strategy;
        self
    }

    /// The runs, in display order (never empty)
    pub fn runs(&self) -> &[CellContentsRun] {
        &self.runs
    }

    pub fn justification(&self) -> Option<Justification> {
        self.justification
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn wrapping_strategy(&self) -> Option<TextWrappingStrategy> {
        self.wrapping_strategy
    }

    /// Check if the cell has no text (formatting on the sole run is allowed)
    pub fn is_empty_text(&self) -> bool {
        matches!(&*self.runs, [only] if only.text().is_empty())
    }

    /// Check if the cell is blank: no text, no run formatting, and neither a
    /// justification nor a background color
    ///
    /// The wrapping strategy is not considered.
    pub fn is_blank(&self) -> bool {
        matches!(&*self.runs, [only] if *only == CellContentsRun::BLANK)
            && self.background_color.is_none()
            && self.justification.is_none()
    }

    /// The concatenated text of all runs
    pub fn plain_text(&self) -> Cow<'_, str> {
        match &*self.runs {
            [only] => Cow::Borrowed(only.text()),
            runs => Cow::Owned(runs.iter().map(CellContentsRun::text).collect()),
        }
    }

    /// Copy of this cell with its text replaced by `new_text`
    ///
    /// If `new_text` merely extends the current text, this is
    /// [`with_appended_text`](Self::with_appended_text) with the extension, so
    /// the formatting of the untouched prefix survives. Otherwise the result is
    /// a single run formatted like the current first run, on the baseline.
    pub fn with_replaced_text(&self, new_text: &str) -> Self {
        let current = self.plain_text();

        match new_text.strip_prefix(current.as_ref()) {
            Some(suffix) => self.with_appended_text(suffix),
            None => {
                let first = &self.runs[0];
                self.with_runs(vec![first.with_other_text_resetting_script_level(new_text)])
            }
        }
    }

    /// Copy of this cell with `suffix` added to the end of its text
    ///
    /// A baseline last run absorbs the suffix. A sub/superscript last run is
    /// left alone and the suffix becomes a new baseline run with the last run's
    /// other formatting.
    pub fn with_appended_text(&self, suffix: &str) -> Self {
        let Some((last, init)) = self.runs.split_last() else {
            return self.clone();
        };

        let runs = if last.script_level().is_normal() {
            let mut runs = Vec::with_capacity(self.runs.len());
            runs.extend_from_slice(init);
            runs.push(last.with_other_text(format!("{}{}", last.text(), suffix)));
            runs
        } else if suffix.is_empty() {
            // A new empty run would be an embedded empty run
            return self.clone();
        } else if last.text().is_empty() {
            // Sole empty sub/superscript run: nothing visible to keep raised
            vec![last.with_other_text_resetting_script_level(suffix)]
        } else {
            let mut runs = Vec::with_capacity(self.runs.len() + 1);
            runs.extend_from_slice(&self.runs);
            runs.push(last.with_other_text_resetting_script_level(suffix));
            runs
        };

        self.with_runs(runs)
    }

    // Same cell formatting, different runs. Callers guarantee the invariants.
    fn with_runs(&self, runs: Vec<CellContentsRun>) -> Self {
        debug_assert!(validate_runs(&runs).is_ok());
        Self {
            runs: runs.into_boxed_slice(),
            justification: self.justification,
            background_color: self.background_color,
            wrapping_strategy: self.wrapping_strategy,
        }
    }
}

fn validate_runs(runs: &[CellContentsRun]) -> Result<()> {
    match runs {
        [] => Err(Error::EmptyRunList),
        [_] => Ok(()),
        runs => match runs.iter().position(|run| run.text().is_empty()) {
            Some(index) => Err(Error::EmbeddedEmptyRun { index }),
            None => Ok(()),
        },
    }
}

impl Default for CellContents {
    fn default() -> Self {
        Self::blank()
    }
}

impl From<CellContentsRun> for CellContents {
    fn from(run: CellContentsRun) -> Self {
        Self::from_run(run)
    }
}

impl fmt::Display for CellContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_text())
    }
}

#[cfg(feature = "serde")]
mod serde_shim {
    use super::*;

    /// Unvalidated wire form; converted through [`CellContents::new`]
    #[derive(serde::Deserialize)]
    pub(super) struct RawCellContents {
        runs: Vec<CellContentsRun>,
        #[serde(default)]
        justification: Option<Justification>,
        #[serde(default)]
        background_color: Option<Color>,
        #[serde(default)]
        wrapping_strategy: Option<TextWrappingStrategy>,
    }

    impl TryFrom<RawCellContents> for CellContents {
        type Error = Error;

        fn try_from(raw: RawCellContents) -> Result<Self> {
            CellContents::new(
                raw.runs,
                raw.justification,
                raw.background_color,
                raw.wrapping_strategy,
            )
        }
    }
}
