use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIDE: usize = 3;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Reference to a cell on the game board as `(column, row)`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Serialize, Deserialize, Hash, Default)]
pub struct Position(pub i8, pub i8);

impl Position {
    /// Converts a cell index (`3 * row + column`) into a [`Position`].
    pub fn from_index(index: usize) -> Option<Position> {
        if index < BOARD_CELLS {
            Some(Position(
                (index % BOARD_SIDE) as i8,
                (index / BOARD_SIDE) as i8,
            ))
        } else {
            None
        }
    }

    /// Returns the cell index of this [`Position`], if it lies on the board.
    pub fn index(&self) -> Option<usize> {
        let side = BOARD_SIDE as i8;

        if (0..side).contains(&self.0) && (0..side).contains(&self.1) {
            Some(self.1 as usize * BOARD_SIDE + self.0 as usize)
        } else {
            None
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
