//! Property tests for the engine invariants.

use proptest::prelude::*;

use pipenet::gameplay::{Direction, Piece, Shape};
use pipenet::{network, solver, GeneratorConfig};

proptest! {
    /// Rotation is a group of order 4: four quarter turns are the identity,
    /// whatever the piece and starting orientation.
    #[test]
    fn rotation_is_order_four(
        shape_index in 0usize..6,
        orientation_index in 0usize..4,
        quarter_turns in -8i32..8,
    ) {
        let piece = Piece {
            shape: Shape::ALL[shape_index],
            orientation: Direction::ALL[orientation_index],
        };

        prop_assert_eq!(piece.rotated(4), piece);
        prop_assert_eq!(
            piece.rotated(quarter_turns).connectors(),
            piece.rotated(quarter_turns + 4).connectors()
        );
    }

    /// Every generated board is solvable, for any seed and any dimensions the
    /// generator accepts.
    #[test]
    fn generated_boards_are_always_solvable(
        rows in 2usize..6,
        cols in 2usize..6,
        wrapping in proptest::bool::ANY,
        seed in proptest::num::u64::ANY,
    ) {
        let mut config = GeneratorConfig::new(rows, cols);
        config.wrapping = wrapping;
        config.seed = Some(seed);

        let mut board = pipenet::generator::generate(&config).unwrap();
        prop_assert!(network::won(&board));

        let mut rng = config.rng();
        board.shuffle_orientations(&mut rng);
        solver::solve(&mut board).unwrap();
        prop_assert!(network::won(&board));
    }

    /// Rotating empty squares never changes the win state.
    #[test]
    fn empty_squares_are_inert(
        seed in proptest::num::u64::ANY,
        quarter_turns in 1i32..4,
    ) {
        let mut config = GeneratorConfig::new(4, 4);
        config.empty_squares = 5;
        config.seed = Some(seed);

        let mut board = pipenet::generator::generate(&config).unwrap();
        prop_assert!(network::won(&board));

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if board.shape_at(row, col) == Shape::Empty {
                    board.rotate(row, col, quarter_turns).unwrap();
                }
            }
        }
        prop_assert!(network::won(&board));
    }

    /// Loop-free generation always produces a spanning tree of the network
    /// squares: edges = squares - 1.
    #[test]
    fn loop_free_boards_are_trees(
        rows in 2usize..6,
        cols in 2usize..6,
        seed in proptest::num::u64::ANY,
    ) {
        let mut config = GeneratorConfig::new(rows, cols);
        config.seed = Some(seed);

        let board = pipenet::generator::generate(&config).unwrap();
        prop_assert_eq!(network::matched_edge_count(&board), board.occupied() - 1);
    }
}
