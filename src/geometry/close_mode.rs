use std::fmt;
use std::str::FromStr;

use crate::error::CloseModeError;

/// Whether a curve ends where it ends, or loops back to its start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CloseMode {
    /// The curve ends on its last control point.
    #[default]
    Open,
    /// Three synthesized control points make the curve loop back smoothly.
    Close,
}

impl CloseMode {
    /// Returns `true` for [`CloseMode::Close`].
    #[must_use]
    pub fn is_closed(self) -> bool {
        self == Self::Close
    }
}

impl FromStr for CloseMode {
    type Err = CloseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("open") {
            Ok(Self::Open)
        } else if s.eq_ignore_ascii_case("close") {
            Ok(Self::Close)
        } else {
            Err(CloseModeError::Unknown(s.to_owned()))
        }
    }
}

impl fmt::Display for CloseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("OPEN"),
            Self::Close => f.write_str("CLOSE"),
        }
    }
}
