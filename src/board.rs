//! The board: a rectangular grid of pieces with neighbor and edge rules.

use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};
use crate::gameplay::{Direction, Piece, Shape};

/// The relation between a square and its neighbor in one direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeStatus {
    /// Both squares expose a connector toward each other.
    Match,
    /// Exactly one side exposes a connector.  A connector pointing off the
    /// grid on a non-wrapping board counts: it has nothing to meet.
    Mismatch,
    /// Neither side exposes a connector.
    NoEdge,
}

/// A rows × cols grid of pieces, stored row-major.
///
/// Dimensions and the wrapping option are fixed for the board's lifetime.
/// On a wrapping board the grid is a torus: every square has a neighbor in
/// every direction, with indices taken modulo the dimensions.  On a
/// non-wrapping board a direction pointing outside the grid has no neighbor.
///
/// Row 0 is the top of the board; north from square `(r, c)` points to
/// `(r - 1, c)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    wrapping: bool,
    pieces: Vec<Piece>,
}

impl Board {
    /// Create a board with every square empty.
    ///
    /// Fails with [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize, wrapping: bool) -> Result<Board> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }

        Ok(Board {
            rows,
            cols,
            wrapping,
            pieces: vec![Piece::empty(); rows * cols],
        })
    }

    /// Create a board from parallel shape and orientation arrays, both
    /// row-major of length `rows * cols`.
    ///
    /// Requires both slices to have exactly `rows * cols` elements.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        wrapping: bool,
        shapes: &[Shape],
        orientations: &[Direction],
    ) -> Result<Board> {
        assert_eq!(shapes.len(), rows * cols);
        assert_eq!(orientations.len(), rows * cols);

        let mut board = Board::new(rows, cols, wrapping)?;
        for (piece, (&shape, &orientation)) in board
            .pieces
            .iter_mut()
            .zip(shapes.iter().zip(orientations.iter()))
        {
            *piece = Piece { shape, orientation };
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    /// The number of squares.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(())
    }

    /// The piece at a square.
    ///
    /// Requires that `row < rows` and `col < cols`.
    pub fn piece(&self, row: usize, col: usize) -> Piece {
        assert!(row < self.rows);
        assert!(col < self.cols);

        self.pieces[self.index(row, col)]
    }

    /// The shape at a square.  See [`piece`] for the bounds requirement.
    ///
    /// [`piece`]: Board::piece
    pub fn shape_at(&self, row: usize, col: usize) -> Shape {
        self.piece(row, col).shape
    }

    /// The orientation at a square.  See [`piece`] for the bounds requirement.
    ///
    /// [`piece`]: Board::piece
    pub fn orientation_at(&self, row: usize, col: usize) -> Direction {
        self.piece(row, col).orientation
    }

    /// Replace the shape at a square, keeping its orientation.
    pub fn set_shape(&mut self, row: usize, col: usize, shape: Shape) -> Result<()> {
        self.check_bounds(row, col)?;
        let index = self.index(row, col);
        self.pieces[index].shape = shape;
        Ok(())
    }

    /// Replace the orientation at a square, keeping its shape.
    pub fn set_orientation(
        &mut self,
        row: usize,
        col: usize,
        orientation: Direction,
    ) -> Result<()> {
        self.check_bounds(row, col)?;
        let index = self.index(row, col);
        self.pieces[index].orientation = orientation;
        Ok(())
    }

    /// Rotate the piece at a square by a number of quarter turns clockwise
    /// (negative turns rotate counter-clockwise).
    ///
    /// Fails with [`Error::OutOfBounds`] without touching anything.  Rotating
    /// an empty square is recorded but never changes its (empty) connector
    /// set.
    pub fn rotate(&mut self, row: usize, col: usize, quarter_turns: i32) -> Result<()> {
        self.check_bounds(row, col)?;
        let index = self.index(row, col);
        self.pieces[index] = self.pieces[index].rotated(quarter_turns);
        Ok(())
    }

    /// The square adjacent to `(row, col)` in the given direction, or `None`
    /// when the direction points off a non-wrapping board.
    ///
    /// On a wrapping board this always returns a square; on a 1-wide or
    /// 1-tall wrapping board it can be `(row, col)` itself.
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        match direction {
            Direction::North => {
                if !self.wrapping && row == 0 {
                    return None;
                }
                Some((if row == 0 { self.rows - 1 } else { row - 1 }, col))
            }
            Direction::East => {
                if !self.wrapping && col == self.cols - 1 {
                    return None;
                }
                Some((row, if col == self.cols - 1 { 0 } else { col + 1 }))
            }
            Direction::South => {
                if !self.wrapping && row == self.rows - 1 {
                    return None;
                }
                Some((if row == self.rows - 1 { 0 } else { row + 1 }, col))
            }
            Direction::West => {
                if !self.wrapping && col == 0 {
                    return None;
                }
                Some((row, if col == 0 { self.cols - 1 } else { col - 1 }))
            }
        }
    }

    /// Check whether the piece at a square exposes a connector in the given
    /// direction: half of a network edge.
    pub fn half_edge(&self, row: usize, col: usize, direction: Direction) -> bool {
        self.piece(row, col).has_connector(direction)
    }

    /// The directions of the open connectors at a square.  See [`piece`] for
    /// the bounds requirement.
    ///
    /// [`piece`]: Board::piece
    pub fn connectors_at(&self, row: usize, col: usize) -> smallvec::SmallVec<[Direction; 4]> {
        self.piece(row, col).connector_directions()
    }

    /// Classify the edge between a square and its neighbor in the given
    /// direction.
    ///
    /// A connector pointing off a non-wrapping board has nothing to meet, so
    /// it is a [`Mismatch`]; an empty boundary is [`NoEdge`].
    ///
    /// [`Mismatch`]: EdgeStatus::Mismatch
    /// [`NoEdge`]:   EdgeStatus::NoEdge
    pub fn edge(&self, row: usize, col: usize, direction: Direction) -> EdgeStatus {
        let here = self.half_edge(row, col, direction);

        let Some((next_row, next_col)) = self.neighbor(row, col, direction) else {
            return if here {
                EdgeStatus::Mismatch
            } else {
                EdgeStatus::NoEdge
            };
        };
        let there = self.half_edge(next_row, next_col, direction.opposite());

        match (here, there) {
            (true, true) => EdgeStatus::Match,
            (false, false) => EdgeStatus::NoEdge,
            _ => EdgeStatus::Mismatch,
        }
    }

    /// Point every piece north.
    pub fn reset_orientations(&mut self) {
        for piece in &mut self.pieces {
            piece.orientation = Direction::North;
        }
    }

    /// Redraw every square's orientation uniformly at random.
    pub fn shuffle_orientations<R: Rng>(&mut self, rng: &mut R) {
        for piece in &mut self.pieces {
            piece.orientation = Direction::ALL[rng.random_range(0..4)];
        }
    }

    /// Check whether two boards have the same dimensions, wrapping option and
    /// shape layout, ignoring orientations.
    pub fn same_layout(&self, other: &Board) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.wrapping == other.wrapping
            && self
                .pieces
                .iter()
                .zip(other.pieces.iter())
                .all(|(a, b)| a.shape == b.shape)
    }

    /// Iterate over all squares as `(row, col, piece)`.
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        let cols = self.cols;
        self.pieces
            .iter()
            .enumerate()
            .map(move |(i, &piece)| (i / cols, i % cols, piece))
    }

    /// The number of non-empty squares.
    pub fn occupied(&self) -> usize {
        self.pieces
            .iter()
            .filter(|piece| piece.shape != Shape::Empty)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.cols {
            write!(f, " {}", col % 10)?;
        }
        writeln!(f)?;

        write!(f, "   ")?;
        for _ in 0..self.cols {
            write!(f, "--")?;
        }
        writeln!(f)?;

        for row in 0..self.rows {
            write!(f, "{} |", row % 10)?;
            for col in 0..self.cols {
                write!(f, "{} ", self.piece(row, col).glyph())?;
            }
            writeln!(f, "|")?;
        }

        write!(f, "   ")?;
        for _ in 0..self.cols {
            write!(f, "--")?;
        }
        writeln!(f)
    }
}
