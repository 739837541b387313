//! Implements game-level Othello logic.
//!
//! [`GameEngine`] is the interface a presentation layer or turn controller should use.
//! It owns the [`Board`] and the turn, and rejects commands that would corrupt either.

use crate::board::{Board, Cell};
use crate::config::{GameConfig, TerminationRule};
use crate::error::{ConfigError, EngineError, ParseColorError};
use crate::square::Square;
use std::fmt;
use tracing::{debug, info, trace};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the conventional starting color (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Color),
    Tie,
}

impl Outcome {
    /// Decide the outcome from final disc counts.
    pub fn from_counts(black: usize, white: usize) -> Self {
        use std::cmp::Ordering;

        match black.cmp(&white) {
            Ordering::Greater => Outcome::Win(Color::Black),
            Ordering::Less => Outcome::Win(Color::White),
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// The winning color, or None for a tie.
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Win(color) => Some(color),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(color) => write!(f, "{} Wins", color),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}

/// Whole-game state: in progress with a side to move, or finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { turn: Color },
    Finished(Outcome),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress { turn } => write!(f, "{} Player's Turn", turn),
            GameStatus::Finished(outcome) => fmt::Display::fmt(outcome, f),
        }
    }
}

/// What a successful [`GameEngine::apply_move`] changed.
/// The board stays authoritative; this only saves callers a snapshot diff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub square: Square,
    pub color: Color,
    pub flipped: Vec<Square>,
}

/// The complete state of one Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Color,
    config: GameConfig,
}

impl Default for GameEngine {
    /// The traditional 8x8 game, Black to move.
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            board: Board::starting_layout(config.edge),
            turn: config.starting_color,
            config,
        }
    }
}

impl GameEngine {
    /// Start a new game with the starting layout for `config`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            edge = config.edge,
            starting_color = %config.starting_color,
            termination = ?config.termination,
            "new game"
        );

        Ok(Self {
            board: Board::starting_layout(config.edge),
            turn: config.starting_color,
            config,
        })
    }

    /// Resume a game from an arbitrary position with `turn` to move.
    pub fn from_position(
        config: GameConfig,
        board: Board,
        turn: Color,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if board.edge() != config.edge {
            return Err(EngineError::SizeMismatch {
                expected: config.edge,
                found: board.edge(),
            });
        }

        Ok(Self {
            board,
            turn,
            config,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn edge(&self) -> usize {
        self.board.edge()
    }

    /// The color whose move is pending.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        self.board.cell(row, col)
    }

    /// Returns whether `color` may play at (`row`, `col`), regardless of whose turn it is.
    pub fn is_legal_move(
        &self,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<bool, EngineError> {
        let sq = self.board.square(row, col)?;
        Ok(self.board.is_legal(sq, color))
    }

    pub fn legal_moves(&self, color: Color) -> Vec<Square> {
        self.board.legal_moves(color)
    }

    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.board.has_legal_move(color)
    }

    /// The number of discs `color` has on the board.
    pub fn count(&self, color: Color) -> usize {
        self.board.count(color)
    }

    /// Disc counts as (black, white).
    pub fn score(&self) -> (usize, usize) {
        (self.board.count(Color::Black), self.board.count(Color::White))
    }

    /// Returns whether the game has ended under the configured [`TerminationRule`].
    pub fn is_game_over(&self) -> bool {
        let (black, white) = self.score();
        let full_or_eliminated = self.board.is_full() || black == 0 || white == 0;

        match self.config.termination {
            TerminationRule::FullOrEliminated => full_or_eliminated,
            TerminationRule::NoLegalMoves => {
                full_or_eliminated
                    || !(self.board.has_legal_move(Color::Black)
                        || self.board.has_legal_move(Color::White))
            }
        }
    }

    /// The outcome of a finished game.
    pub fn winner(&self) -> Result<Outcome, EngineError> {
        if !self.is_game_over() {
            return Err(EngineError::GameInProgress);
        }

        let (black, white) = self.score();
        Ok(Outcome::from_counts(black, white))
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Ok(outcome) => GameStatus::Finished(outcome),
            Err(_) => GameStatus::InProgress { turn: self.turn },
        }
    }

    /// Place a disc for `color`, flip every captured run, and pass the turn.
    /// On error the game is left untouched.
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<MoveReport, EngineError> {
        let square = self.board.square(row, col)?;

        if self.is_game_over() {
            trace!(%square, %color, "rejected move on finished game");
            return Err(EngineError::GameOver);
        }
        if color != self.turn {
            trace!(%square, %color, turn = %self.turn, "rejected out-of-turn move");
            return Err(EngineError::OutOfTurn {
                color,
                turn: self.turn,
            });
        }
        if !self.board.is_legal(square, color) {
            trace!(%square, %color, "rejected illegal move");
            return Err(EngineError::IllegalMove { square, color });
        }

        let flipped = self.board.play(square, color)?;
        self.turn = !color;
        debug!(%square, %color, flipped = flipped.len(), "applied move");

        if self.is_game_over() {
            let (black, white) = self.score();
            info!(
                outcome = %Outcome::from_counts(black, white),
                black,
                white,
                "game over"
            );
        }

        Ok(MoveReport {
            square,
            color,
            flipped,
        })
    }

    /// Hand the turn to the opponent when the side to move has no legal square.
    pub fn pass(&mut self) -> Result<(), EngineError> {
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }
        if self.board.has_legal_move(self.turn) {
            trace!(color = %self.turn, "rejected pass");
            return Err(EngineError::PassNotAllowed { color: self.turn });
        }

        debug!(color = %self.turn, "pass");
        self.turn = !self.turn;
        Ok(())
    }
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.score();
        writeln!(f, "{}", self.board)?;
        write!(f, "Black: {}  White: {}  ({})", black, white, self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(board: &str, turn: Color) -> GameEngine {
        let board: Board = board.parse().unwrap();
        let config = GameConfig::default().with_edge(board.edge());
        GameEngine::from_position(config, board, turn).unwrap()
    }

    #[test]
    fn color_not() {
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!Color::White, Color::Black);
    }

    #[test]
    fn color_from_str() {
        assert_eq!("black".parse(), Ok(Color::Black));
        assert_eq!("W".parse(), Ok(Color::White));
        assert_eq!("none".parse::<Color>(), Err(ParseColorError));
    }

    #[test]
    fn new_game_state() {
        let game = GameEngine::default();
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.score(), (2, 2));
        assert!(!game.is_game_over());
        assert_eq!(game.status().to_string(), "Black Player's Turn");
    }

    #[test]
    fn new_rejects_odd_edge() {
        let config = GameConfig::default().with_edge(7);
        assert_eq!(
            GameEngine::new(config),
            Err(ConfigError::OddEdge { edge: 7 })
        );
    }

    #[test]
    fn configured_starting_color() {
        let config = GameConfig::default().with_starting_color(Color::White);
        let game = GameEngine::new(config).unwrap();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.config(), &config);
        assert_eq!(game.config().starting_color, Color::White);
    }

    #[test]
    fn from_position_size_mismatch() {
        let board = Board::new(4).unwrap();
        assert_eq!(
            GameEngine::from_position(GameConfig::default(), board, Color::Black),
            Err(EngineError::SizeMismatch {
                expected: 8,
                found: 4
            })
        );
    }

    #[test]
    fn apply_move_reports_flips() {
        let mut game = GameEngine::default();
        let report = game.apply_move(2, 4, Color::Black).unwrap();
        assert_eq!(report.square, Square::new(2, 4));
        assert_eq!(report.flipped, vec![Square::new(3, 4)]);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn rejected_moves_leave_game_untouched() {
        let mut game = GameEngine::default();
        let before = game.clone();

        assert_eq!(
            game.apply_move(2, 4, Color::White),
            Err(EngineError::OutOfTurn {
                color: Color::White,
                turn: Color::Black
            })
        );
        assert_eq!(
            game.apply_move(3, 3, Color::Black),
            Err(EngineError::IllegalMove {
                square: Square::new(3, 3),
                color: Color::Black
            })
        );
        assert_eq!(
            game.apply_move(0, 0, Color::Black),
            Err(EngineError::IllegalMove {
                square: Square::new(0, 0),
                color: Color::Black
            })
        );
        assert_eq!(
            game.apply_move(0, 8, Color::Black),
            Err(EngineError::OutOfBounds {
                row: 0,
                col: 8,
                size: 8
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn winner_before_end() {
        assert_eq!(
            GameEngine::default().winner(),
            Err(EngineError::GameInProgress)
        );
    }

    #[test]
    fn elimination_ends_game() {
        let mut game = engine(
            ". . . .
             . X O .
             . . . .
             . . . .",
            Color::Black,
        );
        game.apply_move(1, 3, Color::Black).unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Ok(Outcome::Win(Color::Black)));
        assert_eq!(game.winner().unwrap().winner(), Some(Color::Black));
        assert_eq!(game.status().to_string(), "Black Wins");
        assert_eq!(game.apply_move(0, 0, Color::White), Err(EngineError::GameOver));
        assert_eq!(game.pass(), Err(EngineError::GameOver));
    }

    #[test]
    fn full_board_tie() {
        let game = engine(
            "X X O O
             X X O O
             O O X X
             O O X X",
            Color::Black,
        );
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Ok(Outcome::Tie));
        assert_eq!(Outcome::Tie.winner(), None);
        assert_eq!(game.status().to_string(), "Tie");
    }

    #[test]
    fn pass_only_without_legal_moves() {
        // Black has no capture anywhere; White can capture at (0, 3).
        let mut game = engine(
            "O X X .
             . . . .
             . . . .
             . . . .",
            Color::Black,
        );
        assert!(!game.has_any_legal_move(Color::Black));
        assert!(game.has_any_legal_move(Color::White));

        game.pass().unwrap();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(
            game.pass(),
            Err(EngineError::PassNotAllowed {
                color: Color::White
            })
        );
    }

    #[test]
    fn termination_rules_differ_on_blocked_position() {
        // Neither side can capture, both colors remain and the board is not full.
        let board = "X . . O
                     . . . .
                     . . . .
                     O . . X";
        let simplified = engine(board, Color::Black);
        assert!(!simplified.is_game_over());

        let config = GameConfig::default()
            .with_edge(4)
            .with_termination(TerminationRule::NoLegalMoves);
        let standard =
            GameEngine::from_position(config, board.parse().unwrap(), Color::Black).unwrap();
        assert!(standard.is_game_over());
        assert_eq!(standard.winner(), Ok(Outcome::Tie));
    }

    #[test]
    fn display_includes_status() {
        let display = GameEngine::default().to_string();
        assert!(display.ends_with("Black: 2  White: 2  (Black Player's Turn)"));
    }
}
