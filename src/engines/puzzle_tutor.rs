//! Request-level entry point: one FEN and a hint level in, one report out.
//!
//! Every request builds its own `GameState`, so a `PuzzleTutor` can be shared
//! freely between callers; it holds only immutable configuration.

use log::info;
use rand::Rng;

use crate::errors::{TutorError, TutorResult};
use crate::game_state::chess_rules::ChessRules;
use crate::game_state::game_state::GameState;
use crate::hints::hint_generator::generate_hint;
use crate::hints::hint_report::HintReport;
use crate::hints::hint_tier::HintTier;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::{SearchConfig, SearchEngine};
use crate::tables::puzzle_catalog::{Puzzle, PuzzleCatalog};

#[derive(Debug, Clone)]
pub struct PuzzleTutor {
    engine: SearchEngine<MaterialScorer>,
    config: SearchConfig,
    catalog: PuzzleCatalog,
}

impl Default for PuzzleTutor {
    fn default() -> Self {
        Self::new(
            SearchEngine::default(),
            SearchConfig::default(),
            PuzzleCatalog::embedded(),
        )
    }
}

impl PuzzleTutor {
    pub fn new(
        engine: SearchEngine<MaterialScorer>,
        config: SearchConfig,
        catalog: PuzzleCatalog,
    ) -> Self {
        Self {
            engine,
            config,
            catalog,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    /// Search `fen` and describe the best move at `tier`.
    pub fn hint(&self, fen: &str, tier: HintTier) -> TutorResult<HintReport> {
        let mut state = GameState::from_fen(fen)?;
        info!(
            "hint request level={tier} depth={} fen={fen}",
            self.config.depth
        );

        let result = self.engine.analyse(&mut state, self.config.depth)?;
        let hint = generate_hint(&mut state, result.best_move, tier)?;

        Ok(HintReport::new(
            tier,
            hint,
            state.to_san(result.best_move),
            state.to_uci(result.best_move),
            result.score,
            fen.to_owned(),
        ))
    }

    pub fn puzzle<R: Rng + ?Sized>(&self, rng: &mut R) -> TutorResult<&Puzzle> {
        self.catalog
            .choose_random(rng)
            .ok_or_else(|| TutorError::Catalog("no puzzles loaded".to_owned()))
    }
}
