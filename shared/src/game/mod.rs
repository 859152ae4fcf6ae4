mod board;
mod cell;
mod game;
mod marker;
mod status;
mod win;

#[cfg(test)]
mod proptests;

pub use board::*;
pub use cell::*;
pub use game::*;
pub use marker::*;
pub use status::*;
pub use win::*;
