//! Color representation

use std::fmt;

use crate::error::{Error, Result};

/// 8-bit-per-channel RGB color
///
/// Used for run text colors and cell backgrounds. Equality is exact; spreadsheet
/// stores that keep colors as floats may hand back slightly different values,
/// so decoding those is the adapter's job (see [`Color::from_unit_rgb`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "serde_shim::RawColor")
)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

/// One channel of a [`Color`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

impl Color {
    /// Create a color from integer channels, each in `0..=255`
    ///
    /// Channels are checked red, green, then blue; the first one out of range
    /// is reported.
    ///
    /// ```rust
    /// use richsheets_core::{Color, Error};
    ///
    /// let c = Color::new(255, 128, 0).unwrap();
    /// assert_eq!(c.g(), 128);
    /// assert!(matches!(Color::new(0, 256, -1), Err(Error::ChannelOutOfRange { .. })));
    /// ```
    pub fn new(r: i32, g: i32, b: i32) -> Result<Self> {
        Ok(Self {
            r: checked_channel(Channel::Red, r)?,
            g: checked_channel(Channel::Green, g)?,
            b: checked_channel(Channel::Blue, b)?,
        })
    }

    /// Create a color from channels already known to be in range
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Red channel
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// Green channel
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Convert to RGB tuple
    pub const fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    /// Convert to hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    // Common colors
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
}

fn checked_channel(channel: Channel, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::ChannelOutOfRange { channel, value })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(feature = "serde")]
mod serde_shim {
    use super::*;

    /// Unvalidated wire form; converted through [`Color::new`]
    #[derive(serde::Deserialize)]
    pub(super) struct RawColor {
        r: i32,
        g: i32,
        b: i32,
    }

    impl TryFrom<RawColor> for Color {
        type Error = Error;

        fn try_from(raw: RawColor) -> Result<Self> {
            Color::new(raw.r, raw.g, raw.b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_accepts_bounds() {
        let c = Color::new(0, 255, 17).unwrap();
        assert_eq!(c.to_rgb(), (0, 255, 17));
        assert_eq!(c, Color::rgb(0, 255, 17));
    }

    #[test]
    fn test_new_reports_first_bad_channel() {
        assert_eq!(
            Color::new(-1, 300, 256),
            Err(Error::ChannelOutOfRange {
                channel: Channel::Red,
                value: -1
            })
        );
        assert_eq!(
            Color::new(0, 300, 256),
            Err(Error::ChannelOutOfRange {
                channel: Channel::Green,
                value: 300
            })
        );
        assert_eq!(
            Color::new(0, 0, 256),
            Err(Error::ChannelOutOfRange {
                channel: Channel::Blue,
                value: 256
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(1, 22, 255).to_string(), "(1, 22, 255)");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::GREEN));
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("80FFFFFF"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
        assert_eq!(Color::from_hex("+1+1+1"), None);
        assert_eq!(Color::from_hex("##FF0000"), None);
        assert_eq!(Color::from_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(255, 0, 10).to_hex(), "FF000A");
        assert_eq!(Color::from_hex(&Color::BLUE.to_hex()), Some(Color::BLUE));
    }
}
