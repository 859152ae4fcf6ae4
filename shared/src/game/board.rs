use serde::{Deserialize, Serialize};

use crate::{Cell, Marker, Position, BOARD_CELLS, BOARD_SIDE};

/// [`Board`] is the 3-by-3 playing field, stored row by row.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Instantiates an empty [`Board`].
    pub fn new() -> Board {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Instantiates a [`Board`] from raw cells, regardless of whether they are reachable by play.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Board {
        Board { cells }
    }

    /// Returns the [`Cell`] at an index, or `None` if the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells in index order.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Returns an iterator over all cells in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Returns an iterator over every cell along with its [`Position`].
    pub fn positions(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(index, cell)| {
            (
                Position((index % BOARD_SIDE) as i8, (index / BOARD_SIDE) as i8),
                *cell,
            )
        })
    }

    /// Claims an empty cell for a [`Marker`].
    /// Returns `false` and leaves the board untouched if the cell is occupied or off the board.
    pub(crate) fn mark(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Marked(marker);
                true
            }
            _ => false,
        }
    }

    /// Converts a canvas location to a board [`Position`].
    pub fn location_as_position(
        location: (i32, i32),
        offset: (i32, i32),
        scale: (i32, i32),
    ) -> Option<Position> {
        let side = BOARD_SIDE as i32;

        if (location.0 - offset.0) >= 0
            && (location.0 - offset.0) / scale.0 < side
            && (location.1 - offset.1) >= 0
            && (location.1 - offset.1) / scale.1 < side
        {
            Some(Position(
                ((location.0 - offset.0) / scale.0) as i8,
                ((location.1 - offset.1) / scale.1) as i8,
            ))
        } else {
            None
        }
    }
}
