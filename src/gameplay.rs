//! Piece data types and the connector algebra.

use smallvec::SmallVec;

/// The shape of a piece, named by how many open connectors it has and how they
/// are arranged in the canonical (north) orientation.
///
/// The `u8` numeric representation is used as an index into the static tables
/// in this module.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Shape {
    /// No connectors.  Rotating an empty square never changes anything.
    Empty,
    /// One connector: {north}.
    Endpoint,
    /// Two opposite connectors: {north, south}.
    Segment,
    /// Two adjacent connectors: {north, east}.
    Corner,
    /// Three connectors: {north, east, south}.
    Tee,
    /// All four connectors.
    Cross,
}

/// One of the four cardinal directions.
///
/// A direction serves two roles: it names a neighbor of a square, and it names
/// the orientation of a piece (the number of quarter turns clockwise from the
/// canonical orientation, north = 0).
///
/// The `u8` numeric representation is used as an index into the static tables
/// in this module.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// A piece: a [`Shape`] at an orientation.
///
/// This type is `Copy` because it is intended to be cheap to use.  Methods
/// which take and return values of the same type are marked `must_use`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Piece {
    pub shape: Shape,
    pub orientation: Direction,
}

/// Connector set for each shape in each orientation, as a 4-bit mask.
///
/// Indexed first by [shape], then by [orientation].  Bit 3 is north, bit 2 is
/// east, bit 1 is south, bit 0 is west.  So `0b1100` is a corner in the
/// canonical orientation (north and east open).
///
/// Every mask below 16 appears in this table, which is what makes
/// [`Piece::from_connectors`] total: any combination of open directions is
/// realized by exactly one shape, at one or more orientations.
///
/// [shape]:       Shape
/// [orientation]: Direction
pub static CONNECTORS: [[u8; 4]; 6] = [
    [0b0000, 0b0000, 0b0000, 0b0000], // Empty
    [0b1000, 0b0100, 0b0010, 0b0001], // Endpoint
    [0b1010, 0b0101, 0b1010, 0b0101], // Segment
    [0b1100, 0b0110, 0b0011, 0b1001], // Corner
    [0b1110, 0b0111, 0b1011, 0b1101], // Tee
    [0b1111, 0b1111, 0b1111, 0b1111], // Cross
];

/// Display glyph for each shape in each orientation.
///
/// Indexed first by [shape], then by [orientation].
///
/// [shape]:       Shape
/// [orientation]: Direction
static GLYPHS: [[char; 4]; 6] = [
    [' ', ' ', ' ', ' '], // Empty
    ['^', '>', 'v', '<'], // Endpoint
    ['|', '-', '|', '-'], // Segment
    ['└', '┌', '┐', '┘'], // Corner
    ['├', '┬', '┤', '┴'], // Tee
    ['+', '+', '+', '+'], // Cross
];

impl Shape {
    /// Array of all shapes.
    pub const ALL: [Shape; 6] = [
        Shape::Empty,
        Shape::Endpoint,
        Shape::Segment,
        Shape::Corner,
        Shape::Tee,
        Shape::Cross,
    ];

    /// The number of open connectors, in any orientation.
    pub fn degree(self) -> u32 {
        CONNECTORS[self as usize][0].count_ones()
    }

    /// The single-letter name of a shape, used by the text snapshot format.
    pub fn letter(self) -> char {
        ['E', 'N', 'S', 'C', 'T', 'X'][self as usize]
    }

    /// Try to convert back from a letter.  Inverse of [`letter`].
    ///
    /// [`letter`]: Shape::letter
    pub fn from_letter(c: char) -> Option<Shape> {
        match c {
            'E' => Some(Shape::Empty),
            'N' => Some(Shape::Endpoint),
            'S' => Some(Shape::Segment),
            'C' => Some(Shape::Corner),
            'T' => Some(Shape::Tee),
            'X' => Some(Shape::Cross),
            _ => None,
        }
    }

    /// The number of orientations with distinct connector sets.
    ///
    /// A segment repeats after a half turn and a cross after a quarter turn,
    /// so orientation search never needs to try more candidates than this.
    pub fn distinct_orientations(self) -> usize {
        match self {
            Shape::Empty | Shape::Cross => 1,
            Shape::Segment => 2,
            _ => 4,
        }
    }
}

impl Direction {
    /// Array of all directions, in clockwise rotation order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction one quarter turn clockwise from this one.
    pub fn cw(self) -> Direction {
        self.rotated(1)
    }

    /// The direction one quarter turn counter-clockwise from this one.
    pub fn ccw(self) -> Direction {
        self.rotated(-1)
    }

    /// The opposite direction.  A connector pointing this way meets a
    /// neighbor's connector pointing back.
    pub fn opposite(self) -> Direction {
        self.rotated(2)
    }

    /// Rotate by a number of quarter turns clockwise.  Negative turns rotate
    /// counter-clockwise.  Rotation is a group of order 4: `rotated(4)` is the
    /// identity.
    #[must_use]
    pub fn rotated(self, quarter_turns: i32) -> Direction {
        let index = (self as i32 + quarter_turns).rem_euclid(4);
        Direction::ALL[index as usize]
    }

    /// The single-letter name of a direction, used by the text snapshot
    /// format.
    pub fn letter(self) -> char {
        ['N', 'E', 'S', 'W'][self as usize]
    }

    /// Try to convert back from a letter.  Inverse of [`letter`].
    ///
    /// [`letter`]: Direction::letter
    pub fn from_letter(c: char) -> Option<Direction> {
        match c {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl Piece {
    /// Create a piece in the canonical orientation.
    pub fn new(shape: Shape) -> Piece {
        Piece {
            shape,
            orientation: Direction::North,
        }
    }

    /// An empty square.
    pub fn empty() -> Piece {
        Piece::new(Shape::Empty)
    }

    /// The connector set of this piece as a 4-bit mask (see [`CONNECTORS`]).
    pub fn connectors(self) -> u8 {
        CONNECTORS[self.shape as usize][self.orientation as usize]
    }

    /// Check whether this piece has an open connector in the given direction.
    pub fn has_connector(self, direction: Direction) -> bool {
        self.connectors() & (0b1000 >> direction as u8) != 0
    }

    /// The directions of this piece's open connectors.
    pub fn connector_directions(self) -> SmallVec<[Direction; 4]> {
        Direction::ALL
            .iter()
            .copied()
            .filter(|&d| self.has_connector(d))
            .collect()
    }

    /// Find the piece realizing a connector mask.
    ///
    /// Every mask below 16 is realized by exactly one shape; where several
    /// orientations of that shape realize it (segments and crosses), the
    /// lowest orientation is returned.
    ///
    /// Requires `mask < 16`.
    pub fn from_connectors(mask: u8) -> Piece {
        assert!(mask < 16);

        for shape in Shape::ALL {
            for orientation in Direction::ALL {
                if CONNECTORS[shape as usize][orientation as usize] == mask {
                    return Piece { shape, orientation };
                }
            }
        }
        unreachable!("every 4-bit mask is a connector set");
    }

    /// This piece rotated by a number of quarter turns clockwise.
    #[must_use]
    pub fn rotated(self, quarter_turns: i32) -> Piece {
        Piece {
            shape: self.shape,
            orientation: self.orientation.rotated(quarter_turns),
        }
    }

    /// The display glyph for this piece.
    pub fn glyph(self) -> char {
        GLYPHS[self.shape as usize][self.orientation as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_order_four() {
        for direction in Direction::ALL {
            assert_eq!(direction.rotated(4), direction);
            assert_eq!(direction.cw().ccw(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.rotated(-1), direction.rotated(3));
        }
    }

    #[test]
    fn degrees() {
        use Shape::*;

        let expected = [
            (Empty, 0),
            (Endpoint, 1),
            (Segment, 2),
            (Corner, 2),
            (Tee, 3),
            (Cross, 4),
        ];
        for (shape, degree) in expected {
            assert_eq!(shape.degree(), degree);
        }
    }

    #[test]
    fn connectors_rotate_with_the_piece() {
        for shape in Shape::ALL {
            for orientation in Direction::ALL {
                let piece = Piece { shape, orientation };
                for d in Direction::ALL {
                    // A connector at `d` moves to `d.cw()` after one turn.
                    assert_eq!(
                        piece.has_connector(d),
                        piece.rotated(1).has_connector(d.cw())
                    );
                }
            }
        }
    }

    #[test]
    fn every_mask_decodes() {
        for mask in 0..16u8 {
            let piece = Piece::from_connectors(mask);
            assert_eq!(piece.connectors(), mask);
            assert_eq!(piece.shape.degree(), mask.count_ones());
        }
    }

    #[test]
    fn letters_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_letter(shape.letter()), Some(shape));
        }
        for direction in Direction::ALL {
            assert_eq!(Direction::from_letter(direction.letter()), Some(direction));
        }
        assert_eq!(Shape::from_letter('?'), None);
        assert_eq!(Direction::from_letter('?'), None);
    }

    #[test]
    fn empty_is_orientation_invariant() {
        for orientation in Direction::ALL {
            let piece = Piece {
                shape: Shape::Empty,
                orientation,
            };
            assert_eq!(piece.connectors(), 0);
        }
    }
}
