use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Board, Cell, Marker};

/// Every row, column and diagonal of the board, as cell index triples.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome of evaluating a [`Board`]. Never stored; always derived from the board.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy)]
pub enum WinResult {
    /// No line is completed.
    NoWinner,
    /// A [`Marker`] owns a complete line.
    Winner(Marker),
}

/// Returns the first line in [`LINES`] whose three cells hold the same [`Marker`].
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.into_iter().find(|line| {
        let mut cells = line.iter().map(|index| board.cells()[*index]);

        board.cells()[line[0]] != Cell::Empty && cells.all_equal()
    })
}

/// Evaluates a [`Board`] against all winning lines.
pub fn evaluate(board: &Board) -> WinResult {
    match winning_line(board).and_then(|line| board.cells()[line[0]].marker()) {
        Some(marker) => WinResult::Winner(marker),
        None => WinResult::NoWinner,
    }
}
