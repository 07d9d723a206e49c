//! Scoped move application.
//!
//! `AppliedMove` makes a move on construction and unmakes it when dropped, so a
//! position handed to the search or the hint generator comes back unchanged no
//! matter how the borrowing code exits (normal return, pruning `break`, `?`,
//! or a panic unwinding through it).

use std::ops::{Deref, DerefMut};

use crate::game_state::chess_rules::ChessRules;

pub struct AppliedMove<'a, R: ChessRules> {
    position: &'a mut R,
}

impl<'a, R: ChessRules> AppliedMove<'a, R> {
    pub fn new(position: &'a mut R, mv: R::Move) -> Self {
        position.make_move(mv);
        Self { position }
    }
}

impl<R: ChessRules> Deref for AppliedMove<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.position
    }
}

impl<R: ChessRules> DerefMut for AppliedMove<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.position
    }
}

impl<R: ChessRules> Drop for AppliedMove<'_, R> {
    fn drop(&mut self) {
        self.position.unmake_move();
    }
}
