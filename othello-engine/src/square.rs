//! Code for working with [`Square`]s and compass [`Direction`]s on the board.

use crate::error::ParseSquareError;
use crate::MAX_EDGE_LENGTH;
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

const COLUMN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A square on the board, addressed by 0-indexed row and column.
/// Row 0 is the top edge and column 0 the left edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

/// One of the eight compass directions, as a (row, column) step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    /// Every combination of {-1, 0, 1} x {-1, 0, 1} except (0, 0).
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }
}

impl Square {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert from a row-major index on a board with the given edge length.
    #[inline]
    pub fn from_index(index: usize, edge: usize) -> Self {
        Self::new(index / edge, index % edge)
    }

    /// Convert into a row-major index on a board with the given edge length.
    #[inline]
    pub fn to_index(self, edge: usize) -> usize {
        self.row * edge + self.col
    }

    /// Returns whether this square lies on a board with the given edge length.
    #[inline]
    pub fn is_within(self, edge: usize) -> bool {
        self.row < edge && self.col < edge
    }

    /// The neighbouring square one step along `dir`, or None past the board edge.
    #[inline]
    pub fn step(self, dir: Direction, edge: usize) -> Option<Self> {
        let row = self.row as isize + dir.d_row;
        let col = self.col as isize + dir.d_col;
        if row < 0 || col < 0 {
            return None;
        }

        let next = Self::new(row as usize, col as usize);
        if next.is_within(edge) {
            Some(next)
        } else {
            None
        }
    }

    /// Iterate the squares along `dir`, starting one step away and stopping at the edge.
    pub fn ray(self, dir: Direction, edge: usize) -> impl Iterator<Item = Square> {
        std::iter::successors(self.step(dir, edge), move |sq| sq.step(dir, edge))
    }
}

/// Convert this [`Square`] into string notation ("D3").
impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_LETTERS.chars().nth(self.col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", self.row + 1)
    }
}

/// Build a [`Square`] from 1-indexed string notation ("D3", "j10").
/// Bounds against a particular board are checked where the square is used.
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseSquareError)?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.find(col_str).ok_or(ParseSquareError)?;

        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseSquareError);
        }
        let row: usize = row_str.parse().or(Err(ParseSquareError))?;

        if row == 0 || row > MAX_EDGE_LENGTH {
            return Err(ParseSquareError);
        }

        Ok(Self::new(row - 1, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn square_index_roundtrip_corners() {
        assert_eq!(Square::from_index(0, 8), Square::new(0, 0));
        assert_eq!(Square::from_index(63, 8), Square::new(7, 7));
        assert_eq!(Square::new(9, 9).to_index(10), 99);
        assert_eq!(Square::new(1, 0).to_index(4), 4);
    }

    #[test]
    fn square_step() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.step(Direction::new(-1, 0), 8), None);
        assert_eq!(corner.step(Direction::new(0, -1), 8), None);
        assert_eq!(corner.step(Direction::new(1, 1), 8), Some(Square::new(1, 1)));
        assert_eq!(Square::new(7, 3).step(Direction::new(1, 0), 8), None);
    }

    #[test]
    fn square_ray_stops_at_edge() {
        let ray: Vec<Square> = Square::new(1, 1).ray(Direction::new(-1, -1), 4).collect();
        assert_eq!(ray, vec![Square::new(0, 0)]);

        let ray: Vec<Square> = Square::new(0, 1).ray(Direction::new(0, 1), 4).collect();
        assert_eq!(ray, vec![Square::new(0, 2), Square::new(0, 3)]);
    }

    #[test]
    fn directions_exclude_origin() {
        assert_eq!(Direction::ALL.len(), 8);
        assert!(!Direction::ALL.contains(&Direction::new(0, 0)));
    }

    #[test]
    fn square_from_str_success() {
        assert_eq!(Square::from_str("A1"), Ok(Square::new(0, 0)));
        assert_eq!(Square::from_str("h8"), Ok(Square::new(7, 7)));
        assert_eq!(Square::from_str("D3"), Ok(Square::new(2, 3)));
        assert_eq!(Square::from_str("J10"), Ok(Square::new(9, 9)));
    }

    #[test]
    fn square_from_str_fail() {
        assert_eq!(Square::from_str(""), Err(ParseSquareError));
        assert_eq!(Square::from_str("A"), Err(ParseSquareError));
        assert_eq!(Square::from_str("AA"), Err(ParseSquareError));
        assert_eq!(Square::from_str("A0"), Err(ParseSquareError));
        assert_eq!(Square::from_str("A27"), Err(ParseSquareError));
        assert_eq!(Square::from_str("4D"), Err(ParseSquareError));
        assert_eq!(Square::from_str("D+3"), Err(ParseSquareError));
    }

    #[test]
    fn square_to_str() {
        assert_eq!(Square::new(0, 0).to_string(), "A1");
        assert_eq!(Square::new(7, 7).to_string(), "H8");
        assert_eq!(Square::new(9, 9).to_string(), "J10");
        assert_eq!(Square::from_str("E2").unwrap().to_string(), "E2");
    }
}
