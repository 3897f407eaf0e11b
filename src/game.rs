//! The game boundary: one board, its history, and the operations a
//! presentation layer consumes.

use rand::Rng;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::gameplay::{Direction, Shape};
use crate::generator::{self, GeneratorConfig};
use crate::history::{History, Move};
use crate::network;
use crate::solver;

const DEFAULT_ROWS: usize = 5;
const DEFAULT_COLS: usize = 5;

/// The fixed starting layout, as shipped: scrambled but solvable.
#[rustfmt::skip]
static DEFAULT_SHAPES: [Shape; DEFAULT_ROWS * DEFAULT_COLS] = {
    use Shape::*;
    [
        Corner,   Endpoint, Endpoint, Corner,   Endpoint,
        Tee,      Tee,      Tee,      Tee,      Tee,
        Endpoint, Endpoint, Tee,      Endpoint, Segment,
        Endpoint, Tee,      Tee,      Corner,   Segment,
        Endpoint, Tee,      Endpoint, Endpoint, Endpoint,
    ]
};

#[rustfmt::skip]
static DEFAULT_ORIENTATIONS: [Direction; DEFAULT_ROWS * DEFAULT_COLS] = {
    use Direction::*;
    [
        West,  North, West,  North, South,
        East,  South, West,  North, North,
        East,  North, South, West,  East,
        South, East,  West,  West,  North,
        East,  South, South, East,  South,
    ]
};

/// One winning orientation assignment for [`DEFAULT_SHAPES`].
#[rustfmt::skip]
static SOLUTION_ORIENTATIONS: [Direction; DEFAULT_ROWS * DEFAULT_COLS] = {
    use Direction::*;
    [
        East,  West,  East,  South, South,
        North, East,  East,  West,  South,
        North, North, North, West,  North,
        East,  East,  West,  South, South,
        East,  West,  West,  North, North,
    ]
};

/// A puzzle in progress.
///
/// A game exclusively owns its board and history; the initial layout is kept
/// for [`restart`].  Dropping the game releases everything; there is no
/// explicit destroy operation.
///
/// [`restart`]: Game::restart
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    initial: Board,
    history: History,
}

impl Game {
    /// Wrap a board into a fresh game with empty history.
    pub fn new(board: Board) -> Game {
        Game {
            initial: board.clone(),
            board,
            history: History::new(),
        }
    }

    /// The fixed default 5×5 puzzle.
    pub fn new_default() -> Game {
        let board = Board::from_parts(
            DEFAULT_ROWS,
            DEFAULT_COLS,
            false,
            &DEFAULT_SHAPES,
            &DEFAULT_ORIENTATIONS,
        )
        .expect("the default layout is well formed");
        Game::new(board)
    }

    /// The default puzzle already in its winning orientation assignment.
    pub fn default_solution() -> Game {
        let board = Board::from_parts(
            DEFAULT_ROWS,
            DEFAULT_COLS,
            false,
            &DEFAULT_SHAPES,
            &SOLUTION_ORIENTATIONS,
        )
        .expect("the default layout is well formed");
        Game::new(board)
    }

    /// A fresh random puzzle: a generated solvable layout, scrambled.
    ///
    /// The generation and the scrambling draw from the same seeded stream, so
    /// a fixed [`GeneratorConfig::seed`] reproduces the entire puzzle.
    pub fn new_random(config: &GeneratorConfig) -> Result<Game> {
        let mut rng = config.rng();
        let mut board = generator::generate_with(config, &mut rng)?;
        board.shuffle_orientations(&mut rng);
        Ok(Game::new(board))
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Read access to the board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The shape at a square.  Requires in-bounds coordinates.
    pub fn shape_at(&self, row: usize, col: usize) -> Shape {
        self.board.shape_at(row, col)
    }

    /// The orientation at a square.  Requires in-bounds coordinates.
    pub fn orientation_at(&self, row: usize, col: usize) -> Direction {
        self.board.orientation_at(row, col)
    }

    /// Rotate the piece at a square and record the move.
    ///
    /// Fails with [`Error::OutOfBounds`] leaving board and history untouched.
    pub fn play_move(&mut self, row: usize, col: usize, quarter_turns: i32) -> Result<()> {
        self.board.rotate(row, col, quarter_turns)?;
        self.history.record(Move {
            row,
            col,
            quarter_turns,
        });
        Ok(())
    }

    /// Take back the last move.  Fails with [`Error::NothingToUndo`].
    pub fn undo(&mut self) -> Result<()> {
        let mv = self.history.undo().ok_or(Error::NothingToUndo)?;
        self.board
            .rotate(mv.row, mv.col, -mv.quarter_turns)
            .expect("recorded moves are in bounds");
        Ok(())
    }

    /// Replay the last undone move.  Fails with [`Error::NothingToRedo`].
    pub fn redo(&mut self) -> Result<()> {
        let mv = self.history.redo().ok_or(Error::NothingToRedo)?;
        self.board
            .rotate(mv.row, mv.col, mv.quarter_turns)
            .expect("recorded moves are in bounds");
        Ok(())
    }

    /// Restore the initial layout and forget the history.
    pub fn restart(&mut self) {
        self.board = self.initial.clone();
        self.history.clear();
    }

    /// Re-scramble every orientation.  The board is replaced wholesale, so
    /// the history is cleared; [`restart`] still returns to the initial
    /// layout.
    ///
    /// [`restart`]: Game::restart
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.board.shuffle_orientations(rng);
        self.history.clear();
    }

    /// Rewrite the board into a winning orientation assignment.
    ///
    /// Fails with [`Error::Unsolvable`] leaving everything untouched.  On
    /// success the history is cleared: a bulk rewrite has no meaningful
    /// square-by-square undo.
    pub fn solve(&mut self) -> Result<()> {
        solver::solve(&mut self.board)?;
        self.history.clear();
        Ok(())
    }

    /// The number of winning orientation assignments for this board's shape
    /// layout.
    pub fn solution_count(&self) -> u64 {
        solver::count_solutions(&self.board)
    }

    /// Check the win predicate.
    pub fn is_won(&self) -> bool {
        network::won(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Direction::*;

    #[test]
    fn default_game_is_not_won() {
        let game = Game::new_default();
        assert_eq!(game.rows(), 5);
        assert_eq!(game.cols(), 5);
        assert!(!game.is_won());
    }

    #[test]
    fn default_solution_is_won() {
        let game = Game::default_solution();
        assert!(game.is_won());
        assert!(game.board().same_layout(Game::new_default().board()));
    }

    #[test]
    fn moves_are_undoable_and_redoable() {
        let mut game = Game::new_default();
        let before = game.orientation_at(0, 0);

        game.play_move(0, 0, 1).unwrap();
        let after = game.orientation_at(0, 0);
        assert_eq!(after, before.cw());

        game.undo().unwrap();
        assert_eq!(game.orientation_at(0, 0), before);
        game.redo().unwrap();
        assert_eq!(game.orientation_at(0, 0), after);
    }

    #[test]
    fn empty_history_errors() {
        let mut game = Game::new_default();
        assert!(matches!(game.undo(), Err(Error::NothingToUndo)));
        assert!(matches!(game.redo(), Err(Error::NothingToRedo)));
    }

    #[test]
    fn new_move_invalidates_redo() {
        let mut game = Game::new_default();
        game.play_move(1, 1, 1).unwrap();
        game.undo().unwrap();
        game.play_move(2, 2, 1).unwrap();
        assert!(matches!(game.redo(), Err(Error::NothingToRedo)));
    }

    #[test]
    fn out_of_bounds_move_records_nothing() {
        let mut game = Game::new_default();
        assert!(matches!(
            game.play_move(9, 9, 1),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(game.undo(), Err(Error::NothingToUndo)));
    }

    #[test]
    fn restart_restores_the_initial_layout() {
        let mut game = Game::new_default();
        game.play_move(0, 0, 1).unwrap();
        game.play_move(3, 4, 2).unwrap();

        game.restart();
        assert_eq!(game.board(), Game::new_default().board());
        assert!(matches!(game.undo(), Err(Error::NothingToUndo)));
    }

    #[test]
    fn solve_wins_and_clears_history() {
        let mut game = Game::new_default();
        game.play_move(0, 0, 1).unwrap();

        game.solve().unwrap();
        assert!(game.is_won());
        assert!(matches!(game.undo(), Err(Error::NothingToUndo)));
    }

    #[test]
    fn solution_count_on_a_forced_layout() {
        use crate::gameplay::Shape::*;

        // Two corners boxed in by two endpoints admit exactly one network.
        let board = Board::from_parts(
            2,
            2,
            false,
            &[Endpoint, Corner, Endpoint, Corner],
            &[North, North, North, North],
        )
        .unwrap();
        let game = Game::new(board);
        assert_eq!(game.solution_count(), 1);
    }

    #[test]
    fn default_orientation_sample() {
        let game = Game::new_default();
        assert_eq!(game.orientation_at(0, 0), West);
        assert_eq!(game.orientation_at(4, 4), South);
        assert_eq!(game.shape_at(2, 4), crate::gameplay::Shape::Segment);
    }
}
