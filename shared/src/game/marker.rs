use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// One of the two player symbols.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy, Hash)]
pub enum Marker {
    /// Always moves first.
    X,
    /// Moves second.
    O,
}

impl Marker {
    /// Returns the [`Marker`] which plays after this one.
    pub fn next(&self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}
