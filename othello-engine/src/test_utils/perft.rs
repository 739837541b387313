//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation and tuning the board.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::game::Color;
use crate::DEFAULT_EDGE_LENGTH;

/// Count leaves below the traditional 8x8 starting position.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Board::starting_layout(DEFAULT_EDGE_LENGTH), Color::Black, depth, false)
}

/// Count leaves below the starting position of a board with the given edge,
/// or None if the edge is not a valid board size.
pub fn run_perft_on(edge: usize, depth: u64) -> Option<u64> {
    let board = Board::new(edge).ok()?;
    Some(leaves_below(&board, Color::Black, depth, false))
}

fn leaves_below(board: &Board, color: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(color);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !color, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|sq| {
            let mut next = board.clone();
            match next.play(sq, color) {
                Ok(_) => leaves_below(&next, !color, depth - 1, false),
                Err(_) => 0,
            }
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_invalid_edge() {
    assert_eq!(run_perft_on(5, 1), None);
    assert_eq!(run_perft_on(10, 1), Some(4));
}
