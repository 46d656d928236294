use compact_str::CompactString;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopupError {
    /// The render area cannot hold the popup at its smallest size.
    #[error("popup needs a {axis} of {required} cells but only {available} are available")]
    InsufficientSpace {
        axis: Axis,
        required: u16,
        available: u16,
    },
    /// A button or item names an action its launcher does not know.
    #[error("`{owner}` references action `{action}` which is not registered")]
    UnboundActionReference {
        action: CompactString,
        owner: CompactString,
    },
}

impl PopupError {
    pub fn width(required: u16, available: u16) -> Self {
        PopupError::InsufficientSpace {
            axis: Axis::Width,
            required,
            available,
        }
    }

    pub fn height(required: u16, available: u16) -> Self {
        PopupError::InsufficientSpace {
            axis: Axis::Height,
            required,
            available,
        }
    }

    pub fn is_insufficient_space(&self) -> bool {
        matches!(self, PopupError::InsufficientSpace { .. })
    }
}

pub type Result<T> = std::result::Result<T, PopupError>;
