//! The chess rules capability consumed by evaluation, search and hints.
//!
//! Everything the tutor needs from a rules engine goes through `ChessRules`:
//! position construction, legal move enumeration, make/unmake, outcome
//! detection and notation. Implementations are assumed correct; the core never
//! re-validates what they report.

use std::fmt;

use crate::errors::TutorResult;
use crate::game_state::chess_types::{GameOutcome, Piece, Side};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub trait ChessRules: Sized {
    /// Move identity as enumerated by the backend.
    type Move: Copy + Eq + fmt::Debug;
    type Square: Copy + Eq + fmt::Debug;

    /// Build a position from FEN, rejecting malformed or illegal input.
    fn from_fen(fen: &str) -> TutorResult<Self>;

    fn to_fen(&self) -> String;

    fn side_to_move(&self) -> Side;

    /// All legal moves, in the backend's own enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move previously returned by `legal_moves`.
    fn make_move(&mut self, mv: Self::Move);

    /// Undo the most recent `make_move`. Returns `None` when nothing is left
    /// to undo.
    fn unmake_move(&mut self) -> Option<Self::Move>;

    /// `Some` once the game is over (checkmate, stalemate, insufficient
    /// material).
    fn outcome(&self) -> Option<GameOutcome>;

    #[inline]
    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    fn is_capture(&self, mv: Self::Move) -> bool;

    fn gives_check(&self, mv: Self::Move) -> bool;

    fn piece_at(&self, square: Self::Square) -> Option<Piece>;

    /// Every piece currently on the board.
    fn pieces(&self) -> impl Iterator<Item = Piece> + '_;

    fn move_from(&self, mv: Self::Move) -> Self::Square;

    /// Destination square. For castling this is where the king lands.
    fn move_to(&self, mv: Self::Move) -> Self::Square;

    /// Coordinate name such as `"e4"`.
    fn square_name(&self, square: Self::Square) -> String;

    /// Standard algebraic notation including check/mate suffixes.
    fn to_san(&self, mv: Self::Move) -> String;

    /// Engine (UCI long algebraic) notation such as `"g1f3"`.
    fn to_uci(&self, mv: Self::Move) -> String;
}
