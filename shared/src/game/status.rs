use serde::{Deserialize, Serialize};

use crate::{Locale, Marker};

/// What the status line tells the players.
/// A full board without a winner keeps reporting [`Status::NextPlayer`].
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy)]
pub enum Status {
    Won(Marker),
    NextPlayer(Marker),
}

impl Status {
    /// Renders the status in the given [`Locale`].
    pub fn text(&self, locale: Locale) -> String {
        match self {
            Status::Won(marker) => locale.won(*marker),
            Status::NextPlayer(marker) => locale.next_player(*marker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_follows_locale() {
        assert_eq!(Status::Won(Marker::X).text(Locale::English), "X has won");
        assert_eq!(Status::Won(Marker::X).text(Locale::French), "X a gagné");
        assert_eq!(
            Status::NextPlayer(Marker::O).text(Locale::English),
            "Next player: O"
        );
    }
}
