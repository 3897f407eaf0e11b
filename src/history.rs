//! Undo/redo bookkeeping for played moves.

/// One played rotation: which square, and by how many quarter turns.
///
/// The inverse of a move is the same move with negated turns; applying a move
/// and then its inverse restores the exact prior orientation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub quarter_turns: i32,
}

/// Linear move history with two stacks.
///
/// Recording a new move while undone moves are pending discards them: redo is
/// only valid immediately after undo, with no intervening new move.  The
/// history never applies anything itself; it only hands moves back to the
/// caller, which owns the board.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo_stack: Vec<Move>,
    redo_stack: Vec<Move>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Record a freshly played move.  Clears the redo stack.
    pub fn record(&mut self, mv: Move) {
        self.undo_stack.push(mv);
        self.redo_stack.clear();
    }

    /// Take back the most recent move, transferring it to the redo stack.
    ///
    /// Returns the move to invert, or `None` when nothing has been played.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.undo_stack.pop()?;
        self.redo_stack.push(mv);
        Some(mv)
    }

    /// Replay the most recently undone move, transferring it back to the undo
    /// stack.
    ///
    /// Returns the move to reapply, or `None` when nothing has been undone.
    pub fn redo(&mut self) -> Option<Move> {
        let mv = self.redo_stack.pop()?;
        self.undo_stack.push(mv);
        Some(mv)
    }

    /// Forget everything.  Used whenever the board is replaced wholesale.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
