//! `othello-engine` is an Othello rules engine for UIs and turn controllers.
//!
//! The crate is organised in two levels:
//!
//!  - [`Board`] holds the grid of [`Cell`]s and implements the raw capture rules:
//!    flippable-direction scans, legal-move tests and flip resolution. It does not
//!    know whose turn it is.
//!  - [`GameEngine`] is the safe, stateful interface a presentation layer talks to.
//!    It owns a board and the current turn, rejects illegal or out-of-turn commands,
//!    and decides when the game has ended and who won.
//!
//! Boards are square with an even edge of at least [`MIN_EDGE_LENGTH`]. The
//! traditional game uses [`DEFAULT_EDGE_LENGTH`].

pub mod test_utils;

mod board;
mod config;
mod error;
mod game;
mod square;
mod utils;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use square::*;

/// The number of spaces on one edge of a traditional Othello board.
pub const DEFAULT_EDGE_LENGTH: usize = 8;

/// The smallest supported edge length.
pub const MIN_EDGE_LENGTH: usize = 4;

/// The largest supported edge length, bounded by single-letter column notation.
pub const MAX_EDGE_LENGTH: usize = 26;
