//! Error types for the AT-command extension.
//!
//! Two layers, matching how the host firmware consumes failures:
//!
//! - [`AtError`] is the closed errno set a handler can hand back to the
//!   AT parser, which formats it into the wire response.
//! - [`NodeResult`] is an alias for `anyhow::Result` used on setup paths
//!   (table validation at startup), where `bail!`/`ensure!`/`context`
//!   apply.
//!
//! A failed calibration run is neither: it is reported only through the
//! printed response text, with the AT status staying OK.

use core::fmt;

/// Result type alias using anyhow::Error for setup and validation paths.
pub type NodeResult<T> = anyhow::Result<T>;

/// Errno values this extension signals to the AT parser.
///
/// The host registry's error enumeration is the source of truth for the
/// numeric codes; the discriminants here mirror it so [`AtError::errno`]
/// can be forwarded unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum AtError {
    /// Command unknown, or operation not provided by the command.
    NotSupported = -1,
    /// Parameter value out of range.
    ParamValue = -5,
}

impl AtError {
    /// Raw errno for the host parser's response formatting.
    pub fn errno(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for AtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtError::NotSupported => write!(f, "command not supported"),
            AtError::ParamValue => write!(f, "parameter value out of range"),
        }
    }
}

impl core::error::Error for AtError {}
