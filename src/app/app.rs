use serde::Serialize;
use shared::{Board, GameState, Locale, Marker, Position, WinResult};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{
    ButtonClass, ButtonElement, ContentElement, Pointer, UIElement, UIEvent,
    BOARD_OFFSET, BOARD_OFFSET_F64, BOARD_SCALE,
};
use crate::{
    draw::{draw_cell_highlight, draw_grid, draw_marker, draw_text, draw_win_line},
    CANVAS_HEIGHT, CANVAS_WIDTH, STATUS_LOCATION,
};

const BUTTON_NEW_GAME: usize = 10;

/// Log line written for every accepted move.
#[derive(Serialize)]
struct MoveLog<'a> {
    turn: usize,
    position: Option<Position>,
    game: &'a GameState,
}

/// Something worth logging that happened during a [`App::tick`].
#[derive(Debug, PartialEq)]
pub enum AppEvent {
    NewGame,
    /// JSON snapshot of an accepted move.
    Moved(String),
    Won(Marker, usize),
    LogFailed(String),
}

impl AppEvent {
    pub fn message(&self) -> String {
        match self {
            AppEvent::NewGame => "new game".to_string(),
            AppEvent::Moved(json) => json.clone(),
            AppEvent::Won(marker, turns) => format!("{marker} wins after {turns} moves"),
            AppEvent::LogFailed(err) => format!("could not log move: {err}"),
        }
    }
}

pub struct App {
    game: GameState,
    locale: Locale,
    button_new_game: ButtonElement,
    pub pointer: Pointer,
    observed_turns: usize,
    observed_result: WinResult,
}

impl App {
    pub fn new(locale: Locale) -> App {
        let button_new_game = ButtonElement::new(
            (88, 264),
            (80, 28),
            BUTTON_NEW_GAME,
            ButtonClass::Default,
            ContentElement::Text(locale.new_game().to_string()),
        );

        App {
            game: GameState::new(),
            locale,
            button_new_game,
            pointer: Pointer::new(),
            observed_turns: 0,
            observed_result: WinResult::NoWinner,
        }
    }

    /// Returns the index of the cell under the pointer, if any.
    fn hovered_cell(&self) -> Option<usize> {
        Board::location_as_position(self.pointer.location(), BOARD_OFFSET, BOARD_SCALE)
            .and_then(|position| position.index())
    }

    /// Feeds this frame's input into the game and returns what changed.
    pub fn tick(&mut self) -> Vec<AppEvent> {
        let mut events = Vec::new();

        if self.pointer.clicked() {
            if let Some(index) = self.hovered_cell() {
                self.game.play(index);
            }
        }

        if let Some(UIEvent::ButtonClick(BUTTON_NEW_GAME)) = self.button_new_game.tick(&self.pointer)
        {
            self.game = GameState::new();
            self.observed_turns = 0;
            self.observed_result = WinResult::NoWinner;

            events.push(AppEvent::NewGame);
        }

        self.observe(&mut events);

        self.button_new_game
            .set_class(match self.game.result() {
                WinResult::Winner(_) => ButtonClass::Action,
                WinResult::NoWinner => ButtonClass::Default,
            });

        events
    }

    /// Compares the game against what was seen last frame.
    fn observe(&mut self, events: &mut Vec<AppEvent>) {
        if self.game.turns() != self.observed_turns {
            self.observed_turns = self.game.turns();

            let log = MoveLog {
                turn: self.observed_turns,
                position: self.game.last_move(),
                game: &self.game,
            };

            events.push(match serde_json::to_string(&log) {
                Ok(json) => AppEvent::Moved(json),
                Err(err) => AppEvent::LogFailed(err.to_string()),
            });
        }

        let result = self.game.result();

        if result != self.observed_result {
            self.observed_result = result;

            if let WinResult::Winner(marker) = result {
                events.push(AppEvent::Won(marker, self.game.turns()));
            }
        }
    }

    pub fn draw(&mut self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        context.clear_rect(
            0.0,
            0.0,
            CANVAS_WIDTH as f64 * 2.0,
            CANVAS_HEIGHT as f64 * 2.0,
        );
        context.save();
        context.scale(2.0, 2.0)?;

        context.set_fill_style_str("#222034");
        context.fill_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);

        // DRAW status
        context.set_fill_style_str("#ffffff");
        draw_text(
            context,
            STATUS_LOCATION.0,
            STATUS_LOCATION.1,
            &self.game.status().text(self.locale),
        )?;

        // DRAW board
        {
            context.save();
            context.translate(BOARD_OFFSET_F64.0, BOARD_OFFSET_F64.1)?;

            let undecided = self.game.result() == WinResult::NoWinner;

            if undecided {
                if let Some(position) = self
                    .hovered_cell()
                    .filter(|index| self.game.board().cells()[*index].is_empty())
                    .and_then(Position::from_index)
                {
                    draw_cell_highlight(context, &position, "#323c39")?;
                }
            }

            if let Some(position) = self.game.last_move() {
                draw_cell_highlight(context, &position, "#2a2a45")?;
            }

            draw_grid(context)?;

            for (position, cell) in self.game.board().positions() {
                if let Some(marker) = cell.marker() {
                    draw_marker(context, marker, &position)?;
                }
            }

            if let Some([from, _, to]) = shared::winning_line(self.game.board()) {
                if let (Some(from), Some(to)) =
                    (Position::from_index(from), Position::from_index(to))
                {
                    draw_win_line(context, &from, &to)?;
                }
            }

            context.restore();
        }

        self.button_new_game.draw(context, &self.pointer)?;

        context.restore();

        Ok(())
    }
}
