//! Helpers for spreadsheet adapters
//!
//! Stores such as the Google Sheets API keep colors as floats in `[0.0, 1.0]`
//! and hand booleans back as loosely-cased strings. Reading them back is
//! lenient here so that adapters don't each invent their own tolerance; the
//! value types themselves stay exact.
//!
//! Floats reproduce 0, 1 and simple binary fractions (0.5, 0.25, 0.125, ...)
//! exactly. Anything else may come back a little off, so the decoded channel is
//! snapped to the nearest 8-bit step.

use crate::error::{Error, Result};
use crate::style::{Channel, Color};

/// Distance from an exact channel step below which a component is not worth
/// mentioning in the logs
const SNAP_EPSILON: f64 = 1e-6;

/// Half a channel step, the most a stored component may overshoot `[0.0, 1.0]`
const RANGE_SLACK: f64 = 0.5 / 255.0;

impl Color {
    /// Convert to unit floats (`channel / 255.0`), the Google Sheets encoding
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r()) / 255.0,
            f64::from(self.g()) / 255.0,
            f64::from(self.b()) / 255.0,
        )
    }

    /// Decode unit floats read back from a spreadsheet store
    ///
    /// ```rust
    /// use richsheets_core::Color;
    ///
    /// let c = Color::from_unit_rgb(1.0, 0.50196075, 0.0).unwrap();
    /// assert_eq!(c, Color::rgb(255, 128, 0));
    /// assert!(Color::from_unit_rgb(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Result<Self> {
        Ok(Color::rgb(
            unit_to_channel(Channel::Red, r)?,
            unit_to_channel(Channel::Green, g)?,
            unit_to_channel(Channel::Blue, b)?,
        ))
    }
}

fn unit_to_channel(channel: Channel, value: f64) -> Result<u8> {
    if !value.is_finite() || value < -RANGE_SLACK || value > 1.0 + RANGE_SLACK {
        return Err(Error::InvalidColorComponent { channel, value });
    }

    let scaled = value * 255.0;
    let snapped = scaled.round().clamp(0.0, 255.0);
    if (scaled - snapped).abs() > SNAP_EPSILON * 255.0 {
        log::debug!("{channel} component {value} is not an exact 8-bit step; using {snapped}");
    }

    // In range after the clamp
    Ok(snapped as u8)
}

/// Parse a boolean the way spreadsheet stores write them
///
/// Case-insensitive `"true"`/`"false"`, surrounding whitespace ignored.
/// Anything else is `None`.
pub fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        log::trace!("not a boolean: {s:?}");
        None
    }
}

/// Canonical spelling of a boolean for writing
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
