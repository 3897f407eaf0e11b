//! Random solvable board construction.
//!
//! The generator works on degree masks, not pieces: it grows a random
//! spanning tree over the squares it wants in the network, optionally closes
//! a few loops, and only then decodes each square's mask into the unique
//! piece realizing it.  The board it returns is therefore *solved*; callers
//! scramble it with [`Board::shuffle_orientations`] to make a puzzle.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::gameplay::{Direction, Piece};

/// Parameters for random board construction.
///
/// `extra_edges` is the branching bound: the number of loop-closing edges laid
/// on top of the spanning tree.  It only takes effect with `allow_loops`, and
/// is capped at the number of edges actually available.  `empty_squares`
/// squares are left out of the network entirely.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub wrapping: bool,
    pub allow_loops: bool,
    pub extra_edges: usize,
    pub empty_squares: usize,
    /// Fixed seed for reproducible boards; `None` draws one from the thread
    /// RNG.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(rows: usize, cols: usize) -> GeneratorConfig {
        GeneratorConfig {
            rows,
            cols,
            wrapping: false,
            allow_loops: false,
            extra_edges: 0,
            empty_squares: 0,
            seed: None,
        }
    }

    /// The random stream for this configuration.
    pub fn rng(&self) -> ChaCha8Rng {
        let seed = self.seed.unwrap_or_else(rand::random);
        ChaCha8Rng::seed_from_u64(seed)
    }
}

fn mask_bit(direction: Direction) -> u8 {
    0b1000 >> direction as u8
}

/// Build a random solved board.
///
/// Creates the configuration's random stream and delegates to
/// [`generate_with`].
pub fn generate(config: &GeneratorConfig) -> Result<Board> {
    let mut rng = config.rng();
    generate_with(config, &mut rng)
}

/// Build a random solved board using the given random stream.
///
/// Fails with [`Error::InvalidDimensions`] below 2×2, and with
/// [`Error::Config`] when `empty_squares` leaves no valid network (a network
/// of exactly one square can never be well paired).
pub fn generate_with<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Board> {
    if config.rows < 2 || config.cols < 2 {
        return Err(Error::InvalidDimensions {
            rows: config.rows,
            cols: config.cols,
        });
    }

    let size = config.rows * config.cols;
    if config.empty_squares > size {
        return Err(Error::Config(format!(
            "{} empty squares do not fit on {} squares",
            config.empty_squares, size
        )));
    }
    let network = size - config.empty_squares;
    if network == 1 {
        return Err(Error::Config(
            "a single-square network has no solution".into(),
        ));
    }

    // The empty board supplies the neighbor arithmetic (it only depends on
    // dimensions and wrapping).
    let grid = Board::new(config.rows, config.cols, config.wrapping)?;
    let mut masks = vec![0u8; size];
    let mut in_network = vec![false; size];

    if network > 0 {
        grow_spanning_tree(&grid, &mut masks, &mut in_network, network, rng);

        if config.allow_loops && config.extra_edges > 0 {
            close_loops(&grid, &mut masks, &in_network, config.extra_edges, rng);
        }
    }

    let mut board = grid;
    for (index, &mask) in masks.iter().enumerate() {
        let piece = Piece::from_connectors(mask);
        let (row, col) = (index / config.cols, index % config.cols);
        board.set_shape(row, col, piece.shape)?;
        board.set_orientation(row, col, piece.orientation)?;
    }

    log::debug!(
        "generated {}x{} board: {} network squares, {} edges",
        config.rows,
        config.cols,
        network,
        masks.iter().map(|m| m.count_ones() as usize).sum::<usize>() / 2,
    );

    Ok(board)
}

/// Randomized frontier growth: repeatedly join a uniformly random edge
/// between an in-network square and an outside square, until `network`
/// squares are joined.
fn grow_spanning_tree<R: Rng>(
    grid: &Board,
    masks: &mut [u8],
    in_network: &mut [bool],
    network: usize,
    rng: &mut R,
) {
    let cols = grid.cols();
    let start = rng.random_range(0..grid.size());
    in_network[start] = true;
    let mut joined = 1;

    let mut frontier: Vec<(usize, usize, Direction)> = Vec::new();
    push_frontier(grid, in_network, start / cols, start % cols, &mut frontier);

    while joined < network {
        let pick = rng.random_range(0..frontier.len());
        let (row, col, direction) = frontier.swap_remove(pick);
        let (next_row, next_col) = grid
            .neighbor(row, col, direction)
            .expect("frontier edges have a far side");
        let next = next_row * cols + next_col;
        if in_network[next] {
            // Stale: the far side was joined through another edge meanwhile.
            continue;
        }

        masks[row * cols + col] |= mask_bit(direction);
        masks[next] |= mask_bit(direction.opposite());
        in_network[next] = true;
        joined += 1;
        push_frontier(grid, in_network, next_row, next_col, &mut frontier);
    }
}

fn push_frontier(
    grid: &Board,
    in_network: &[bool],
    row: usize,
    col: usize,
    frontier: &mut Vec<(usize, usize, Direction)>,
) {
    for direction in Direction::ALL {
        if let Some((next_row, next_col)) = grid.neighbor(row, col, direction) {
            if !in_network[next_row * grid.cols() + next_col] {
                frontier.push((row, col, direction));
            }
        }
    }
}

/// Add up to `wanted` extra edges between adjacent in-network squares that the
/// tree did not already join.  Each one closes a loop.
fn close_loops<R: Rng>(
    grid: &Board,
    masks: &mut [u8],
    in_network: &[bool],
    wanted: usize,
    rng: &mut R,
) {
    let cols = grid.cols();

    // East and south together enumerate every undirected grid edge once,
    // including the wrap-around edges of a torus.
    let mut candidates: Vec<(usize, usize, Direction)> = Vec::new();
    for (row, col, _) in grid.squares() {
        if !in_network[row * cols + col] {
            continue;
        }
        for direction in [Direction::East, Direction::South] {
            let Some((next_row, next_col)) = grid.neighbor(row, col, direction) else {
                continue;
            };
            if in_network[next_row * cols + next_col]
                && masks[row * cols + col] & mask_bit(direction) == 0
            {
                candidates.push((row, col, direction));
            }
        }
    }

    let take = wanted.min(candidates.len());
    if take < wanted {
        log::debug!("only {} loop edges available, {} requested", take, wanted);
    }

    for _ in 0..take {
        let pick = rng.random_range(0..candidates.len());
        let (row, col, direction) = candidates.swap_remove(pick);
        let (next_row, next_col) = grid
            .neighbor(row, col, direction)
            .expect("loop candidates have a far side");
        masks[row * cols + col] |= mask_bit(direction);
        masks[next_row * cols + next_col] |= mask_bit(direction.opposite());
    }
}
