use serde::{Deserialize, Serialize};

use crate::{evaluate, Board, Marker, Position, Status, WinResult};

/// A [`GameState`] holds the authoritative [`Board`] and whose turn it is.
/// All mutation goes through [`GameState::play`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Marker,
    history: Vec<usize>,
}

impl GameState {
    /// Starts a new game on an empty [`Board`] with [`Marker::X`] to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::new(),
            turn: Marker::X,
            history: Vec::new(),
        }
    }

    /// Plays the current [`Marker`] at a cell index, then hands the turn over.
    ///
    /// Nothing happens if the game already has a winner, if the cell is taken,
    /// or if the index does not name a cell.
    pub fn play(&mut self, index: usize) {
        if self.result() != WinResult::NoWinner {
            return;
        }

        if self.board.mark(index, self.turn) {
            self.history.push(index);
            self.turn = self.turn.next();
        }
    }

    /// Evaluates the board for a winner.
    pub fn result(&self) -> WinResult {
        evaluate(&self.board)
    }

    /// Returns the [`Status`] shown to the players.
    pub fn status(&self) -> Status {
        match self.result() {
            WinResult::Winner(marker) => Status::Won(marker),
            WinResult::NoWinner => Status::NextPlayer(self.turn),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the [`Marker`] which plays next.
    pub fn turn_for(&self) -> Marker {
        self.turn
    }

    /// Returns the number of accepted moves since the start of the game.
    pub fn turns(&self) -> usize {
        self.history().len()
    }

    /// Cell indices of accepted moves, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the [`Position`] of the latest accepted move.
    pub fn last_move(&self) -> Option<Position> {
        self.history()
            .last()
            .and_then(|index| Position::from_index(*index))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn play_all(game: &mut GameState, indices: &[usize]) {
        for index in indices {
            game.play(*index);
        }
    }

    #[test]
    fn new_game_starts_with_x() {
        let game = GameState::new();

        assert_eq!(game.turn_for(), Marker::X);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.status(), Status::NextPlayer(Marker::X));
        assert_eq!(game.turns(), 0);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn first_move_marks_x_and_passes_turn() {
        let mut game = GameState::new();

        game.play(0);

        assert_eq!(game.board().get(0), Some(Cell::Marked(Marker::X)));
        assert_eq!(game.turn_for(), Marker::O);
        assert_eq!(game.status(), Status::NextPlayer(Marker::O));
        assert_eq!(game.last_move(), Some(Position(0, 0)));
    }

    #[test]
    fn top_row_wins_and_freezes_board() {
        let mut game = GameState::new();

        play_all(&mut game, &[0, 3, 1, 4, 2]);

        assert_eq!(game.status(), Status::Won(Marker::X));
        assert_eq!(game.result(), WinResult::Winner(Marker::X));

        let before = game.clone();
        game.play(5);

        assert_eq!(game, before);
        assert_eq!(game.board().get(5), Some(Cell::Empty));
    }

    #[test]
    fn replaying_same_cell_is_ignored() {
        let mut game = GameState::new();

        game.play(0);
        game.play(0);

        assert_eq!(game.turn_for(), Marker::O);
        assert_eq!(game.turns(), 1);
        assert_eq!(game.board().get(0), Some(Cell::Marked(Marker::X)));
    }

    #[test]
    fn full_board_without_winner_keeps_asking_for_next_player() {
        let mut game = GameState::new();

        // X O X
        // X O O
        // O X X
        play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(game.turns(), 9);
        assert!(game.board().iter().all(|cell| !cell.is_empty()));
        assert_eq!(game.result(), WinResult::NoWinner);
        assert_eq!(game.status(), Status::NextPlayer(Marker::O));

        let before = game.clone();
        game.play(4);

        assert_eq!(game, before);
    }

    #[test]
    fn history_records_accepted_moves_only() {
        let mut game = GameState::new();

        play_all(&mut game, &[4, 4, 0, 9, 8]);

        assert_eq!(game.history(), &[4, 0, 8]);
        assert_eq!(game.turns(), 3);
        assert_eq!(game.last_move(), Position::from_index(8));
    }

    #[test]
    fn o_can_win() {
        let mut game = GameState::new();

        play_all(&mut game, &[0, 2, 1, 4, 8, 6]);

        assert_eq!(game.status(), Status::Won(Marker::O));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut game = GameState::new();

        game.play(9);

        assert_eq!(game, GameState::new());
    }

    #[test]
    fn serializes_board_and_turn() {
        let mut game = GameState::new();
        game.play(4);

        let json = serde_json::to_value(&game).unwrap();

        assert_eq!(json["turn"], "O");
        assert_eq!(json["history"], serde_json::json!([4]));
        assert_eq!(json["board"]["cells"][4]["Marked"], "X");
    }
}
