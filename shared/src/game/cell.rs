use serde::{Deserialize, Serialize};

use crate::Marker;

/// A single slot of the [`Board`](crate::Board).
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Claimed by a [`Marker`]. Permanent for the rest of the game.
    Marked(Marker),
}

impl Cell {
    /// Returns the [`Marker`] occupying the cell, if any.
    pub fn marker(&self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(*marker),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}
