use serde::{Deserialize, Serialize};

use crate::Marker;

/// Language used for the text shown to players.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub enum Locale {
    #[default]
    French,
    English,
}

impl Locale {
    /// Picks the [`Locale`] from the page pathname: `/en` selects English, anything else French.
    pub fn from_pathname(pathname: &str) -> Locale {
        let pathname = pathname.trim_end_matches('/');

        if pathname == "/en" || pathname.starts_with("/en/") {
            Locale::English
        } else {
            Locale::French
        }
    }

    /// Message announcing the winner.
    pub fn won(&self, marker: Marker) -> String {
        match self {
            Locale::French => format!("{marker} a gagné"),
            Locale::English => format!("{marker} has won"),
        }
    }

    /// Message announcing the next player.
    pub fn next_player(&self, marker: Marker) -> String {
        match self {
            Locale::French => format!("Prochain tour : {marker}"),
            Locale::English => format!("Next player: {marker}"),
        }
    }

    /// Label of the button which starts a new game.
    pub fn new_game(&self) -> &'static str {
        match self {
            Locale::French => "Rejouer",
            Locale::English => "New game",
        }
    }
}
