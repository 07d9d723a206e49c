//! Position state backed by `shakmaty`.
//!
//! `GameState` wraps a `shakmaty::Chess` position and keeps an undo stack so
//! the search can walk the tree with make/unmake instead of copying positions
//! at every node.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, File, KnownOutcome, Move, Outcome, Position, Role,
    Square,
};

use crate::errors::TutorResult;
use crate::game_state::chess_rules::ChessRules;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;

/// Mutable chess position with a make/unmake history.
#[derive(Debug, Clone)]
pub struct GameState {
    position: Chess,
    undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            position: Chess::default(),
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    /// Number of moves currently applied on top of the constructed position.
    #[inline]
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }
}

impl ChessRules for GameState {
    type Move = Move;
    type Square = Square;

    fn from_fen(fen: &str) -> TutorResult<Self> {
        let parsed: Fen = fen.trim().parse()?;
        let position: Chess = parsed.into_position(CastlingMode::Standard)?;
        Ok(Self {
            position,
            undo_stack: Vec::new(),
        })
    }

    fn to_fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    #[inline]
    fn side_to_move(&self) -> Side {
        side_from_color(self.position.turn())
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn make_move(&mut self, mv: Move) {
        debug_assert!(self.position.is_legal(mv), "illegal move {mv:?}");
        let previous = self.position.clone();
        self.position.play_unchecked(mv);
        self.undo_stack.push(UndoState { mv, previous });
    }

    fn unmake_move(&mut self) -> Option<Move> {
        let undo = self.undo_stack.pop()?;
        self.position = undo.previous;
        Some(undo.mv)
    }

    fn outcome(&self) -> Option<GameOutcome> {
        match self.position.outcome() {
            Outcome::Known(KnownOutcome::Decisive { winner }) => Some(GameOutcome::Decisive {
                winner: side_from_color(winner),
            }),
            Outcome::Known(KnownOutcome::Draw) => Some(GameOutcome::Draw),
            Outcome::Unknown => None,
        }
    }

    #[inline]
    fn is_capture(&self, mv: Move) -> bool {
        mv.is_capture()
    }

    fn gives_check(&self, mv: Move) -> bool {
        let mut probe = self.position.clone();
        probe.play_unchecked(mv);
        probe.is_check()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square).map(piece_from_shakmaty)
    }

    fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.position
            .board()
            .into_iter()
            .map(|(_, piece)| piece_from_shakmaty(piece))
    }

    fn move_from(&self, mv: Move) -> Square {
        match mv {
            Move::Normal { from, .. } | Move::EnPassant { from, .. } => from,
            Move::Castle { king, .. } => king,
            // Drops only exist in variants; standard chess never yields them.
            Move::Put { to, .. } => to,
        }
    }

    fn move_to(&self, mv: Move) -> Square {
        match mv {
            Move::Castle { king, rook } => {
                let file = if king.file() < rook.file() {
                    File::G
                } else {
                    File::C
                };
                Square::from_coords(file, king.rank())
            }
            other => other.to(),
        }
    }

    fn square_name(&self, square: Square) -> String {
        square.to_string()
    }

    fn to_san(&self, mv: Move) -> String {
        SanPlus::from_move(self.position.clone(), mv).to_string()
    }

    fn to_uci(&self, mv: Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }
}

#[inline]
fn side_from_color(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

#[inline]
fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

#[inline]
fn piece_from_shakmaty(piece: shakmaty::Piece) -> Piece {
    Piece::new(kind_from_role(piece.role), side_from_color(piece.color))
}

#[cfg(test)]
mod tests {
    use shakmaty::Square;

    use super::GameState;
    use crate::errors::TutorError;
    use crate::game_state::chess_rules::{ChessRules, STARTING_POSITION_FEN};
    use crate::game_state::chess_types::*;

    fn find_move(state: &GameState, uci: &str) -> shakmaty::Move {
        state
            .legal_moves()
            .into_iter()
            .find(|mv| state.to_uci(*mv) == uci)
            .unwrap_or_else(|| panic!("{uci} should be legal"))
    }

    #[test]
    fn new_game_matches_starting_fen() {
        let state = GameState::new_game();
        assert_eq!(state.to_fen(), STARTING_POSITION_FEN);
        assert_eq!(state.legal_moves().len(), 20);
        assert_eq!(state.side_to_move(), Side::White);
        assert_eq!(state.pieces().count(), 32);
    }

    #[test]
    fn make_unmake_restores_position() {
        let mut state = GameState::from_fen(STARTING_POSITION_FEN).expect("FEN should parse");
        let e4 = find_move(&state, "e2e4");
        state.make_move(e4);
        assert_eq!(state.ply(), 1);
        assert_eq!(state.side_to_move(), Side::Black);
        assert_eq!(state.unmake_move(), Some(e4));
        assert_eq!(state.ply(), 0);
        assert_eq!(state.to_fen(), STARTING_POSITION_FEN);
        assert_eq!(state.unmake_move(), None);
    }

    #[test]
    fn rejects_malformed_and_illegal_fens() {
        assert!(matches!(
            GameState::from_fen("this is not chess"),
            Err(TutorError::InvalidFen(_))
        ));
        // Black is in check from the f6 knight while White is to move.
        assert!(matches!(
            GameState::from_fen("rnbqkbnr/pppp1ppp/5N2/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2"),
            Err(TutorError::IllegalPosition(_))
        ));
    }

    #[test]
    fn detects_checkmate_and_stalemate() {
        let mate = GameState::from_fen("6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(
            mate.outcome(),
            Some(GameOutcome::Decisive {
                winner: Side::White
            })
        );

        let stalemate =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(stalemate.outcome(), Some(GameOutcome::Draw));

        assert!(!GameState::new_game().is_terminal());
    }

    #[test]
    fn capture_and_check_flags() {
        let state =
            GameState::from_fen("7k/8/8/8/8/8/4q3/4KQ2 w - - 0 1").expect("FEN should parse");
        let capture = find_move(&state, "f1e2");
        assert!(state.is_capture(capture));
        assert!(!state.gives_check(capture));

        let kxe2 = find_move(&state, "e1e2");
        assert!(state.is_capture(kxe2));

        let quiet = GameState::from_fen("4k3/8/8/8/8/8/8/4KQ2 w - - 0 1").expect("FEN should parse");
        let check = find_move(&quiet, "f1f8");
        assert!(!quiet.is_capture(check));
        assert!(quiet.gives_check(check));
        let no_check = find_move(&quiet, "f1a6");
        assert!(!quiet.gives_check(no_check));
    }

    #[test]
    fn castling_destination_is_king_square() {
        let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let short = find_move(&state, "e1g1");
        assert_eq!(state.move_from(short), Square::E1);
        assert_eq!(state.move_to(short), Square::G1);
        assert_eq!(state.to_san(short), "O-O");

        let long = find_move(&state, "e1c1");
        assert_eq!(state.move_to(long), Square::C1);
    }

    #[test]
    fn notation_and_piece_lookup() {
        let state = GameState::new_game();
        let nf3 = find_move(&state, "g1f3");
        assert_eq!(state.to_san(nf3), "Nf3");
        assert_eq!(state.square_name(state.move_from(nf3)), "g1");
        assert_eq!(
            state.piece_at(Square::G1),
            Some(Piece::new(PieceKind::Knight, Side::White))
        );
        assert_eq!(state.piece_at(Square::E4), None);
    }
}
