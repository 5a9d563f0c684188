//! Error types for richsheets-core

use thiserror::Error;

use crate::style::Channel;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in richsheets-core
///
/// Every variant is raised synchronously by a constructor; nothing in this
/// crate recovers from or substitutes a default for a failed construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A color channel outside `0..=255`
    #[error("{channel} channel value {value} out of range (expected 0..=255)")]
    ChannelOutOfRange { channel: Channel, value: i32 },

    /// A cell was built from zero runs
    #[error("Runs-list must not be empty")]
    EmptyRunList,

    /// A multi-run cell contains a run with empty text
    #[error(
        "Run {index} has empty text; only a sole run may be empty (that is how an empty-text cell is encoded)"
    )]
    EmbeddedEmptyRun { index: usize },

    /// A floating-point color component that cannot be mapped onto an 8-bit channel
    #[error("{channel} component {value} is not a finite value in [0.0, 1.0]")]
    InvalidColorComponent { channel: Channel, value: f64 },
}

impl Error {
    /// Whether this is a channel range failure (including the float read path)
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Error::ChannelOutOfRange { .. } | Error::InvalidColorComponent { .. }
        )
    }

    /// Whether this is a run-list validation failure
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::EmptyRunList | Error::EmbeddedEmptyRun { .. })
    }
}
