//! Error types returned by the engine, configuration and text parsers.

use crate::game::Color;
use crate::square::Square;
use derive_more::{Display, Error};
use std::fmt;

/// Errors from commands and queries on a [`GameEngine`](crate::GameEngine).
/// None of these leave the engine in a modified state.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    #[display(fmt = "({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[display(fmt = "{} cannot play {}", color, square)]
    IllegalMove { square: Square, color: Color },

    #[display(fmt = "{} moved, but it is {}'s turn", color, turn)]
    OutOfTurn { color: Color, turn: Color },

    #[display(fmt = "the game is over")]
    GameOver,

    #[display(fmt = "the game is still in progress")]
    GameInProgress,

    #[display(fmt = "{} has a legal move and cannot pass", color)]
    PassNotAllowed { color: Color },

    #[display(fmt = "board edge {} does not match configured edge {}", found, expected)]
    SizeMismatch { expected: usize, found: usize },

    #[display(fmt = "invalid configuration: {}", source)]
    Config { source: ConfigError },
}

impl From<ConfigError> for EngineError {
    fn from(source: ConfigError) -> Self {
        EngineError::Config { source }
    }
}

/// Errors from validating a [`GameConfig`](crate::GameConfig).
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "board edge {} is odd", edge)]
    OddEdge { edge: usize },

    #[display(fmt = "board edge {} is below the minimum of {}", edge, min)]
    EdgeTooSmall { edge: usize, min: usize },

    #[display(fmt = "board edge {} is above the maximum of {}", edge, max)]
    EdgeTooLarge { edge: usize, max: usize },
}

/// Errors from reading a [`Board`](crate::Board) in text format.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?}", found)]
    BadCharacter { found: char },

    #[display(fmt = "row {} has {} cells, expected {}", row, found, expected)]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[display(fmt = "invalid board size: {}", source)]
    Size { source: ConfigError },
}

impl From<ConfigError> for ParseBoardError {
    fn from(source: ConfigError) -> Self {
        ParseBoardError::Size { source }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid square string")
    }
}

impl std::error::Error for ParseSquareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color string")
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
