//! Property-based tests for the game state machine and win evaluation.

use proptest::prelude::*;

use super::*;
use crate::BOARD_CELLS;

fn arb_marker() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::X), Just(Marker::O)]
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        arb_marker().prop_map(Cell::Marked),
    ]
}

/// Any nine cells, reachable by play or not.
fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_cell()).prop_map(Board::from_cells)
}

/// A game clicked long enough that it has most likely been decided or filled.
fn arb_long_game() -> impl Strategy<Value = GameState> {
    proptest::collection::vec(0..BOARD_CELLS, 30..60).prop_map(|indices| {
        let mut game = GameState::new();

        for index in indices {
            game.play(index);
        }

        game
    })
}

/// A game reached by clicking arbitrary cells, including ignored clicks.
fn arb_game() -> impl Strategy<Value = GameState> {
    proptest::collection::vec(0..BOARD_CELLS, 0..20).prop_map(|indices| {
        let mut game = GameState::new();

        for index in indices {
            game.play(index);
        }

        game
    })
}

fn has_uniform_line(board: &Board) -> Option<Marker> {
    LINES.iter().find_map(|[a, b, c]| {
        let cells = board.cells();

        match cells[*a] {
            Cell::Marked(marker) if cells[*b] == cells[*a] && cells[*c] == cells[*a] => {
                Some(marker)
            }
            _ => None,
        }
    })
}

proptest! {
    #[test]
    fn playing_occupied_cell_changes_nothing(game in arb_game(), index in 0..BOARD_CELLS) {
        prop_assume!(!game.board().cells()[index].is_empty());

        let mut played = game.clone();
        played.play(index);

        prop_assert_eq!(played, game);
    }

    #[test]
    fn playing_after_win_changes_nothing(game in arb_long_game(), index in 0..BOARD_CELLS) {
        prop_assume!(game.result() != WinResult::NoWinner);

        let mut played = game.clone();
        played.play(index);

        prop_assert_eq!(played, game);
    }

    #[test]
    fn turn_flips_exactly_when_a_cell_changes(game in arb_game(), index in 0..BOARD_CELLS) {
        let mut played = game.clone();
        played.play(index);

        let board_changed = played.board() != game.board();
        let turn_changed = played.turn_for() != game.turn_for();

        prop_assert_eq!(board_changed, turn_changed);

        if board_changed {
            prop_assert_eq!(played.turns(), game.turns() + 1);
            prop_assert_eq!(
                played.board().get(index),
                Some(Cell::Marked(game.turn_for()))
            );
        }
    }

    #[test]
    fn cells_are_never_overwritten(game in arb_game(), index in 0..BOARD_CELLS) {
        let mut played = game.clone();
        played.play(index);

        for (before, after) in game.board().iter().zip(played.board().iter()) {
            if !before.is_empty() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn evaluate_agrees_with_uniform_lines(board in arb_board()) {
        let result = evaluate(&board);

        match has_uniform_line(&board) {
            Some(_) => prop_assert!(matches!(result, WinResult::Winner(_))),
            None => prop_assert_eq!(result, WinResult::NoWinner),
        }
    }

    #[test]
    fn completed_line_wins_for_its_marker(
        board in arb_board(),
        line in proptest::sample::select(LINES.to_vec()),
        marker in arb_marker(),
    ) {
        let mut cells = *board.cells();

        for index in line {
            cells[index] = Cell::Marked(marker);
        }

        let board = Board::from_cells(cells);

        // Other lines may also be complete on an unreachable board; one of them wins.
        prop_assert!(evaluate(&board) != WinResult::NoWinner);

        let opponent_line = LINES.iter().any(|other| {
            other
                .iter()
                .all(|index| board.cells()[*index] == Cell::Marked(marker.next()))
        });

        if !opponent_line {
            prop_assert_eq!(evaluate(&board), WinResult::Winner(marker));
        }
    }

    #[test]
    fn status_reports_winner_or_next_player(game in arb_game()) {
        match game.result() {
            WinResult::Winner(marker) => prop_assert_eq!(game.status(), Status::Won(marker)),
            WinResult::NoWinner => {
                prop_assert_eq!(game.status(), Status::NextPlayer(game.turn_for()))
            }
        }
    }

    #[test]
    fn reachable_games_never_have_two_winners(game in arb_game()) {
        let winners: Vec<Marker> = LINES
            .iter()
            .filter_map(|line| {
                let marker = game.board().cells()[line[0]].marker()?;
                line.iter()
                    .all(|index| game.board().cells()[*index] == Cell::Marked(marker))
                    .then_some(marker)
            })
            .collect();

        prop_assert!(winners.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
