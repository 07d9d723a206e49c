//! Undo record kept by `GameState` for each applied move.

use shakmaty::{Chess, Move};

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    pub previous: Chess,
}
