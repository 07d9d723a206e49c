//! Static position scoring.
//!
//! Search delegates leaf and terminal scoring to `BoardScorer`, so alternate
//! heuristics can be swapped in without touching the search code. Scores are
//! always from White's perspective: positive favours White.

use crate::game_state::chess_rules::ChessRules;
use crate::game_state::chess_types::{GameOutcome, PieceKind};

/// Score of a decided game. Positive when White delivered mate.
pub const TERMINAL_SCORE: i32 = 10_000;

pub trait BoardScorer {
    fn score<R: ChessRules>(&self, position: &R) -> i32;
}

/// Point value per piece kind, indexed by `PieceKind::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValues {
    values: [i32; 6],
}

impl PieceValues {
    pub const fn new(pawn: i32, knight: i32, bishop: i32, rook: i32, queen: i32, king: i32) -> Self {
        Self {
            values: [pawn, knight, bishop, rook, queen, king],
        }
    }

    #[inline]
    pub const fn value(&self, kind: PieceKind) -> i32 {
        self.values[kind.index()]
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self::new(1, 3, 3, 5, 9, 0)
    }
}

/// Material-only evaluation with terminal override.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer {
    values: PieceValues,
}

impl MaterialScorer {
    pub const fn new(values: PieceValues) -> Self {
        Self { values }
    }

    #[inline]
    pub const fn piece_values(&self) -> &PieceValues {
        &self.values
    }

    #[inline]
    fn material_balance_white_minus_black<R: ChessRules>(&self, position: &R) -> i32 {
        position
            .pieces()
            .map(|piece| self.values.value(piece.kind) * piece.side.sign())
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score<R: ChessRules>(&self, position: &R) -> i32 {
        match position.outcome() {
            Some(GameOutcome::Decisive { winner }) => TERMINAL_SCORE * winner.sign(),
            Some(GameOutcome::Draw) => 0,
            None => self.material_balance_white_minus_black(position),
        }
    }
}
