//! The text snapshot format.
//!
//! A snapshot is a header line `rows cols wrapping` (wrapping as `0`/`1`)
//! followed by one two-letter token per square in row-major order: the shape
//! letter (`E`, `N`, `S`, `C`, `T`, `X`) then the direction letter (`N`, `E`,
//! `S`, `W`).  The writer puts one row per line; the parser only cares about
//! token order, so any whitespace layout is accepted.

use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::gameplay::{Direction, Shape};

/// Parse a snapshot.
pub fn parse(text: &str) -> Result<Board> {
    let mut tokens = text.split_whitespace();
    let mut header = |name: &str| -> Result<usize> {
        let token = tokens
            .next()
            .ok_or_else(|| Error::Parse(format!("missing {} in header", name)))?;
        token
            .parse()
            .map_err(|_| Error::Parse(format!("bad {} {:?}", name, token)))
    };

    let rows = header("row count")?;
    let cols = header("column count")?;
    let wrapping = match header("wrapping flag")? {
        0 => false,
        1 => true,
        other => {
            return Err(Error::Parse(format!("bad wrapping flag {}", other)));
        }
    };

    let mut board = Board::new(rows, cols, wrapping)?;
    for row in 0..rows {
        for col in 0..cols {
            let token = tokens.next().ok_or_else(|| {
                Error::Parse(format!("missing square ({}, {})", row, col))
            })?;
            let mut letters = token.chars();
            let (Some(shape_letter), Some(direction_letter), None) =
                (letters.next(), letters.next(), letters.next())
            else {
                return Err(Error::Parse(format!("bad square token {:?}", token)));
            };

            let shape = Shape::from_letter(shape_letter)
                .ok_or_else(|| Error::Parse(format!("unknown shape {:?}", shape_letter)))?;
            let direction = Direction::from_letter(direction_letter).ok_or_else(|| {
                Error::Parse(format!("unknown direction {:?}", direction_letter))
            })?;

            board.set_shape(row, col, shape)?;
            board.set_orientation(row, col, direction)?;
        }
    }

    if let Some(extra) = tokens.next() {
        return Err(Error::Parse(format!("trailing token {:?}", extra)));
    }
    Ok(board)
}

/// Write a snapshot.  [`parse`] accepts the result verbatim.
pub fn serialize(board: &Board) -> String {
    let mut out = format!(
        "{} {} {}\n",
        board.rows(),
        board.cols(),
        board.is_wrapping() as u8
    );

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let piece = board.piece(row, col);
            out.push(piece.shape.letter());
            out.push(piece.orientation.letter());
            out.push(if col + 1 == board.cols() { '\n' } else { ' ' });
        }
    }
    out
}

/// Load a snapshot from a file.
pub fn load(path: impl AsRef<Path>) -> Result<Board> {
    parse(&fs::read_to_string(path)?)
}

/// Save a snapshot to a file.
pub fn save(board: &Board, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, serialize(board))?;
    Ok(())
}
