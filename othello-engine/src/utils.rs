//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format `edge * edge` characters into a pretty grid with coordinate labels.
/// `piece_iter` must yield exactly `edge * edge` items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    edge: usize,
    f: &mut Formatter,
) -> fmt::Result {
    // Row labels run to two digits on boards larger than 9.
    let label_width = edge.to_string().len();

    write!(f, "{:width$} ", "", width = label_width)?;
    for letter in ('A'..='Z').take(edge) {
        write!(f, " {}", letter)?;
    }

    for row in 0..edge {
        write!(f, "\n{:>width$} ", row + 1, width = label_width)?;
        for _ in 0..edge {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
