//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! Scores stay in White's frame throughout. The root always keeps the move
//! with the greatest score and searches each reply as the minimizing side,
//! whichever colour is to move. Moves are tried in the order the rules backend
//! enumerates them (no ordering heuristics, no transposition table), and every
//! trial move is applied through `AppliedMove` so the caller's position is
//! restored on every exit path.
//!
//! Pruning never changes the result: the root move and score are identical to
//! those of exhaustive minimax at the same depth.

use log::debug;

use crate::errors::{TutorError, TutorResult};
use crate::game_state::chess_rules::ChessRules;
use crate::search::applied_move::AppliedMove;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

/// Window bound wider than any reachable score.
pub const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub best_move: M,
    /// Root score, White's perspective.
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchEngine<S: BoardScorer = MaterialScorer> {
    scorer: S,
}

impl<S: BoardScorer> SearchEngine<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Static evaluation of `position`, White's perspective.
    #[inline]
    pub fn evaluate<R: ChessRules>(&self, position: &R) -> i32 {
        self.scorer.score(position)
    }

    /// Best move for the side to move, searching `depth` plies.
    pub fn find_best_move<R: ChessRules>(
        &self,
        position: &mut R,
        depth: u8,
    ) -> TutorResult<R::Move> {
        self.analyse(position, depth).map(|result| result.best_move)
    }

    /// Root search returning the chosen move together with its score.
    ///
    /// Each root move is searched with a full window and the reply treated as
    /// minimizing. The first move with the strictly greatest score is kept,
    /// so ties resolve to the earliest move in enumeration order.
    pub fn analyse<R: ChessRules>(
        &self,
        position: &mut R,
        depth: u8,
    ) -> TutorResult<SearchResult<R::Move>> {
        validate_depth(depth)?;

        let moves = position.legal_moves();
        if moves.is_empty() {
            return Err(TutorError::NoLegalMoves);
        }

        debug!("search start depth={} candidates={}", depth, moves.len());

        let mut nodes = 1u64;
        let mut best: Option<(R::Move, i32)> = None;

        for mv in moves {
            let score = {
                let mut child = AppliedMove::new(position, mv);
                self.search(
                    &mut *child,
                    depth - 1,
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                    false,
                    &mut nodes,
                )
            };

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let (best_move, score) = best.ok_or(TutorError::NoLegalMoves)?;
        debug!(
            "search done depth={} best={:?} score={} nodes={}",
            depth, best_move, score, nodes
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes,
        })
    }

    /// Alpha-beta minimax value of `position` searched `depth` plies deep.
    pub fn minimax<R: ChessRules>(
        &self,
        position: &mut R,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> TutorResult<i32> {
        validate_depth(depth)?;
        let mut nodes = 0u64;
        Ok(self.search(position, depth, alpha, beta, maximizing, &mut nodes))
    }

    fn search<R: ChessRules>(
        &self,
        position: &mut R,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        if depth == 0 || position.is_terminal() {
            return self.scorer.score(position);
        }

        let moves = position.legal_moves();

        if maximizing {
            let mut best = -SCORE_INFINITY;
            for mv in moves {
                let score = {
                    let mut child = AppliedMove::new(position, mv);
                    self.search(&mut *child, depth - 1, alpha, beta, false, nodes)
                };
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = SCORE_INFINITY;
            for mv in moves {
                let score = {
                    let mut child = AppliedMove::new(position, mv);
                    self.search(&mut *child, depth - 1, alpha, beta, true, nodes)
                };
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[inline]
fn validate_depth(depth: u8) -> TutorResult<()> {
    if depth == 0 {
        return Err(TutorError::InvalidDepth { depth });
    }
    Ok(())
}
