//! Construction-time settings for a [`GameEngine`](crate::GameEngine).

use crate::error::ConfigError;
use crate::game::Color;
use crate::{DEFAULT_EDGE_LENGTH, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};

/// How the engine decides that a game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationRule {
    /// The board is full, or only one color remains on it.
    FullOrEliminated,
    /// As [`TerminationRule::FullOrEliminated`], and also when neither side has a legal move.
    NoLegalMoves,
}

impl Default for TerminationRule {
    fn default() -> Self {
        Self::FullOrEliminated
    }
}

/// Board size, starting side and termination rule for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub edge: usize,
    pub starting_color: Color,
    pub termination: TerminationRule,
}

impl Default for GameConfig {
    /// The traditional 8x8 game with Black moving first.
    fn default() -> Self {
        Self {
            edge: DEFAULT_EDGE_LENGTH,
            starting_color: Color::default(),
            termination: TerminationRule::default(),
        }
    }
}

impl GameConfig {
    pub fn with_edge(mut self, edge: usize) -> Self {
        self.edge = edge;
        self
    }

    pub fn with_starting_color(mut self, color: Color) -> Self {
        self.starting_color = color;
        self
    }

    pub fn with_termination(mut self, termination: TerminationRule) -> Self {
        self.termination = termination;
        self
    }

    /// Check that the board edge is even and within the supported range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_edge(self.edge)
    }
}

pub(crate) fn validate_edge(edge: usize) -> Result<(), ConfigError> {
    if edge < MIN_EDGE_LENGTH {
        return Err(ConfigError::EdgeTooSmall {
            edge,
            min: MIN_EDGE_LENGTH,
        });
    }
    if edge > MAX_EDGE_LENGTH {
        return Err(ConfigError::EdgeTooLarge {
            edge,
            max: MAX_EDGE_LENGTH,
        });
    }
    if edge % 2 != 0 {
        return Err(ConfigError::OddEdge { edge });
    }
    Ok(())
}
