//! The win predicate: local connector matching and global connectivity.

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::board::{Board, EdgeStatus};
use crate::gameplay::{Direction, Shape};

/// Check that every exposed connector is met by the opposite connector of the
/// adjacent square.
///
/// A connector pointing off a non-wrapping board has nothing to meet, so any
/// such connector makes the board ill-paired.
pub fn well_paired(board: &Board) -> bool {
    for (row, col, piece) in board.squares() {
        for direction in Direction::ALL {
            if piece.has_connector(direction)
                && board.edge(row, col, direction) != EdgeStatus::Match
            {
                return false;
            }
        }
    }
    true
}

/// Check that all non-empty squares are mutually reachable through matched
/// edges.
///
/// A board with no non-empty square is trivially connected.  Ill-matched
/// connectors are ignored here; they are [`well_paired`]'s business.
pub fn connected(board: &Board) -> bool {
    let start = board
        .squares()
        .find(|&(_, _, piece)| piece.shape != Shape::Empty);
    let Some((start_row, start_col, _)) = start else {
        return true;
    };

    // Breadth-first flood along matched edges.
    let mut visited = bitvec![0; board.size()];
    let mut reached = 0usize;
    let mut queue = VecDeque::new();

    visited.set(start_row * board.cols() + start_col, true);
    queue.push_back((start_row, start_col));

    while let Some((row, col)) = queue.pop_front() {
        reached += 1;
        for direction in Direction::ALL {
            if board.edge(row, col, direction) != EdgeStatus::Match {
                continue;
            }
            let (next_row, next_col) = board
                .neighbor(row, col, direction)
                .expect("a matched edge always has a far side");
            let index = next_row * board.cols() + next_col;
            if !visited[index] {
                visited.set(index, true);
                queue.push_back((next_row, next_col));
            }
        }
    }

    reached == board.occupied()
}

/// Count the matched edges on the board.
///
/// Each undirected edge is seen once from each side, so the directed matches
/// are halved; this also counts a wrapping edge from a square to itself (on a
/// 1-wide or 1-tall torus) exactly once.
pub fn matched_edge_count(board: &Board) -> usize {
    let mut directed = 0;
    for (row, col, _) in board.squares() {
        for direction in Direction::ALL {
            if board.edge(row, col, direction) == EdgeStatus::Match {
                directed += 1;
            }
        }
    }
    directed / 2
}

/// The win predicate: every connector matched, and one network spanning every
/// non-empty square.
pub fn won(board: &Board) -> bool {
    well_paired(board) && connected(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Direction::*;
    use crate::gameplay::Shape::*;

    /// > < over < > : two matched pairs, but two separate networks.
    fn two_components() -> Board {
        Board::from_parts(
            2,
            2,
            false,
            &[Endpoint, Endpoint, Endpoint, Endpoint],
            &[East, West, East, West],
        )
        .unwrap()
    }

    #[test]
    fn empty_board_is_trivially_won() {
        let board = Board::new(3, 3, false).unwrap();
        assert!(well_paired(&board));
        assert!(connected(&board));
        assert!(won(&board));
        assert_eq!(matched_edge_count(&board), 0);
    }

    #[test]
    fn boundary_connector_rejected() {
        let board = Board::from_parts(1, 2, false, &[Endpoint, Endpoint], &[West, East]).unwrap();
        assert!(!well_paired(&board));
        assert!(!won(&board));
    }

    #[test]
    fn split_network_rejected() {
        let board = two_components();
        assert!(well_paired(&board));
        assert!(!connected(&board));
        assert!(!won(&board));
        assert_eq!(matched_edge_count(&board), 2);
    }

    #[test]
    fn single_network_wins() {
        // > ┐
        //   ^   (an endpoint into a corner turning down to an endpoint)
        let board = Board::from_parts(
            2,
            2,
            false,
            &[Endpoint, Corner, Empty, Endpoint],
            &[East, South, North, North],
        )
        .unwrap();
        assert!(well_paired(&board));
        assert!(connected(&board));
        assert!(won(&board));
        // 3 occupied squares, 2 edges: a tree.
        assert_eq!(matched_edge_count(&board), board.occupied() - 1);
    }

    #[test]
    fn empty_rotation_never_changes_the_outcome() {
        let mut board = Board::from_parts(
            2,
            2,
            false,
            &[Endpoint, Corner, Empty, Endpoint],
            &[East, South, North, North],
        )
        .unwrap();
        assert!(won(&board));

        for turns in 1..=4 {
            board.rotate(1, 0, turns).unwrap();
            assert!(won(&board));
        }
    }

    #[test]
    fn wrapping_ring_wins_with_a_loop() {
        // A full ring of horizontal segments on a 1x4 torus: every edge
        // matches and the network is one component containing a cycle.
        let board = Board::from_parts(
            1,
            4,
            true,
            &[Segment, Segment, Segment, Segment],
            &[East, East, East, East],
        )
        .unwrap();
        assert!(won(&board));
        assert_eq!(matched_edge_count(&board), 4);
    }
}
