//! Backtracking orientation search.
//!
//! The solver ignores the board's current orientations and searches for an
//! assignment satisfying the win predicate, square by square in row-major
//! order.  This general search is the single source of truth: it handles
//! generated boards, hand-built boards and loaded snapshots alike, with no
//! reliance on a remembered generator solution.

use crate::board::{Board, EdgeStatus};
use crate::error::{Error, Result};
use crate::gameplay::Direction;
use crate::network;

/// Orient every piece so the board satisfies the win predicate.
///
/// On success the board holds the first solution found (row-major candidate
/// order).  On failure every orientation is exactly as it was and
/// [`Error::Unsolvable`] is returned.
pub fn solve(board: &mut Board) -> Result<()> {
    if search(board, 0) {
        log::debug!("solved {}x{} board", board.rows(), board.cols());
        Ok(())
    } else {
        log::debug!("{}x{} board is unsolvable", board.rows(), board.cols());
        Err(Error::Unsolvable)
    }
}

/// Count the orientation assignments satisfying the win predicate.
///
/// Orientations with identical connector sets are counted once (a segment has
/// two distinct assignments per square, a cross one), so a solved board with
/// no empty square and no symmetric piece counts exactly 1.
pub fn count_solutions(board: &Board) -> u64 {
    let mut scratch = board.clone();
    count(&mut scratch, 0)
}

fn set(board: &mut Board, row: usize, col: usize, orientation: Direction) {
    board
        .set_orientation(row, col, orientation)
        .expect("solver squares are in bounds");
}

fn search(board: &mut Board, index: usize) -> bool {
    if index >= board.size() {
        return network::won(board);
    }

    let row = index / board.cols();
    let col = index % board.cols();
    let piece = board.piece(row, col);
    let start = piece.orientation;

    for turn in 0..piece.shape.distinct_orientations() {
        set(board, row, col, start.rotated(turn as i32));
        if !consistent(board, row, col) {
            continue;
        }
        if search(board, index + 1) {
            return true;
        }
    }

    set(board, row, col, start);
    false
}

fn count(board: &mut Board, index: usize) -> u64 {
    if index >= board.size() {
        return network::won(board) as u64;
    }

    let row = index / board.cols();
    let col = index % board.cols();
    let piece = board.piece(row, col);
    let start = piece.orientation;

    let mut found = 0;
    for turn in 0..piece.shape.distinct_orientations() {
        set(board, row, col, start.rotated(turn as i32));
        if !consistent(board, row, col) {
            continue;
        }
        found += count(board, index + 1);
    }

    set(board, row, col, start);
    found
}

/// Check the current square's finalized edges.
///
/// In row-major order a square's north and west neighbors are already
/// assigned, so a mismatch there can never be repaired and the candidate can
/// be rejected immediately.  On a wrapping board the north edge of row 0 and
/// the west edge of column 0 lead to squares *not yet* assigned, so they must
/// be skipped; instead the last row and column check their wrap-around south
/// and east edges, whose far sides are assigned.
fn consistent(board: &Board, row: usize, col: usize) -> bool {
    use Direction::{East, North, South, West};

    let mismatch = |direction| board.edge(row, col, direction) == EdgeStatus::Mismatch;

    if !board.is_wrapping() {
        return !mismatch(North) && !mismatch(West);
    }

    if row == board.rows() - 1 && mismatch(South) {
        return false;
    }
    if col == board.cols() - 1 && mismatch(East) {
        return false;
    }
    if row > 0 && mismatch(North) {
        return false;
    }
    if col > 0 && mismatch(West) {
        return false;
    }
    true
}
