//! The board grid and the raw capture rules.
//!
//! [`Board`] methods do not know whose turn it is and do not enforce the
//! order of play. [`GameEngine`](crate::GameEngine) wraps them with those checks.
//! By convention, the first cell is the upper-left of the board, in row-major order.

use crate::config::validate_edge;
use crate::error::{ConfigError, EngineError, ParseBoardError};
use crate::game::Color;
use crate::square::{Direction, Square};
use crate::utils;
use std::fmt;

/// The occupancy of a single square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl Cell {
    /// The color of the disc on this cell, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' | 'B' | 'b' | '#' => Some(Cell::Black),
            'O' | 'o' | 'W' | 'w' => Some(Cell::White),
            _ => None,
        }
    }
}

/// A square grid of [`Cell`]s with an even edge length.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    edge: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build the starting position: Black on the NW-SE center diagonal,
    /// White on the NE-SW center diagonal, everything else empty.
    pub fn new(edge: usize) -> Result<Self, ConfigError> {
        validate_edge(edge)?;
        Ok(Self::starting_layout(edge))
    }

    /// Build a board with no discs on it.
    pub fn empty(edge: usize) -> Result<Self, ConfigError> {
        validate_edge(edge)?;
        Ok(Self::blank(edge))
    }

    fn blank(edge: usize) -> Self {
        Self {
            edge,
            cells: vec![Cell::Empty; edge * edge],
        }
    }

    /// Starting position for an edge that has already been validated.
    pub(crate) fn starting_layout(edge: usize) -> Self {
        let mut board = Self::blank(edge);
        let middle = edge / 2;

        board.put(Square::new(middle - 1, middle - 1), Cell::Black);
        board.put(Square::new(middle, middle), Cell::Black);
        board.put(Square::new(middle - 1, middle), Cell::White);
        board.put(Square::new(middle, middle - 1), Cell::White);
        board
    }

    /// The number of squares on one edge.
    #[inline]
    pub fn edge(&self) -> usize {
        self.edge
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.is_within(self.edge)
    }

    /// Resolve raw coordinates into a [`Square`] on this board.
    pub fn square(&self, row: usize, col: usize) -> Result<Square, EngineError> {
        let sq = Square::new(row, col);
        if self.contains(sq) {
            Ok(sq)
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                size: self.edge,
            })
        }
    }

    /// Get the cell at `sq`, or None if it is off the board.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Cell> {
        if self.contains(sq) {
            Some(self.at(sq))
        } else {
            None
        }
    }

    /// Get the cell at raw coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        let sq = self.square(row, col)?;
        Ok(self.at(sq))
    }

    /// Overwrite a single cell. Used to set up positions; no captures are made.
    pub fn set(&mut self, sq: Square, cell: Cell) -> Result<(), EngineError> {
        let sq = self.square(sq.row, sq.col)?;
        self.put(sq, cell);
        Ok(())
    }

    #[inline]
    fn at(&self, sq: Square) -> Cell {
        self.cells[sq.to_index(self.edge)]
    }

    #[inline]
    fn put(&mut self, sq: Square, cell: Cell) {
        let index = sq.to_index(self.edge);
        self.cells[index] = cell;
    }

    /// Iterate every square with its cell, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        let edge = self.edge;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &cell)| (Square::from_index(index, edge), cell))
    }

    /// Count the discs of one color.
    pub fn count(&self, color: Color) -> usize {
        let target = Cell::from(color);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Count the empty squares.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// The number of opponent discs `color` would capture along `dir` by playing at `origin`.
    /// Zero when the run is empty, hits an empty square, or runs off the board.
    pub fn captured_run(&self, origin: Square, dir: Direction, color: Color) -> usize {
        if !self.contains(origin) {
            return 0;
        }

        let own = Cell::from(color);
        let opponent = Cell::from(!color);

        let mut run = 0;
        for sq in origin.ray(dir, self.edge) {
            match self.at(sq) {
                cell if cell == opponent => run += 1,
                cell if cell == own => return run,
                _ => return 0,
            }
        }
        0
    }

    /// Returns whether playing `color` at `origin` would capture along `dir`.
    #[inline]
    pub fn is_flippable_direction(&self, origin: Square, dir: Direction, color: Color) -> bool {
        self.captured_run(origin, dir, color) > 0
    }

    /// Returns whether `color` may place a disc at `sq`.
    /// Squares off the board are never legal.
    pub fn is_legal(&self, sq: Square, color: Color) -> bool {
        self.get(sq) == Some(Cell::Empty)
            && Direction::ALL
                .iter()
                .any(|&dir| self.is_flippable_direction(sq, dir, color))
    }

    /// Every legal square for `color`, in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Square> {
        self.iter()
            .filter(|&(sq, cell)| cell.is_empty() && self.is_legal(sq, color))
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Returns whether `color` has any legal square.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.iter()
            .any(|(sq, cell)| cell.is_empty() && self.is_legal(sq, color))
    }

    /// The discs that would flip if `color` played at `sq`, read from this position.
    /// Ordered by direction, then by distance from `sq`.
    pub fn flips(&self, sq: Square, color: Color) -> Vec<Square> {
        Direction::ALL
            .iter()
            .flat_map(|&dir| sq.ray(dir, self.edge).take(self.captured_run(sq, dir, color)))
            .collect()
    }

    /// Place `color` at `sq` and flip every captured run, returning the flipped squares.
    /// Captures are computed before anything is written, so the result depends only
    /// on the position before the move.
    ///
    /// Fails with [`EngineError::OutOfBounds`] for a square off the board, but does not
    /// check legality: the caller must ensure [`Board::is_legal`] holds.
    pub fn play(&mut self, sq: Square, color: Color) -> Result<Vec<Square>, EngineError> {
        let sq = self.square(sq.row, sq.col)?;
        let flipped = self.flips(sq, color);
        let cell = Cell::from(color);

        self.put(sq, cell);
        for &flip in &flipped {
            self.put(flip, cell);
        }
        Ok(flipped)
    }

    /// Squares whose cell differs between `before` and this board.
    /// Boards of different sizes compare only their common squares.
    pub fn changes_from(&self, before: &Board) -> Vec<Square> {
        self.iter()
            .filter(|&(sq, cell)| before.get(sq).map_or(false, |old| old != cell))
            .map(|(sq, _)| sq)
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells.iter().map(|cell| cell.to_char()), self.edge, f)
    }
}

/// Read a board from rows of cell characters, separated by newlines or `/`.
/// `.` and `-` are empty, `X`, `B` and `#` are Black, `O` and `W` are White.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(|c: char| c == '\n' || c == '/')
            .map(|line| line.split_whitespace().collect::<String>())
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| Cell::from_char(c).ok_or(ParseBoardError::BadCharacter { found: c }))
                    .collect::<Result<Vec<Cell>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edge = rows.len();
        validate_edge(edge)?;

        let mut cells = Vec::with_capacity(edge * edge);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != edge {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    found: line.len(),
                    expected: edge,
                });
            }
            cells.extend(line);
        }

        Ok(Self { edge, cells })
    }
}
