//! Rules of tic-tac-toe, independent of how the game is drawn.

mod game;
pub use game::*;

mod locale;
pub use locale::*;

mod position;
pub use position::*;
