//! Natural-language hints for a searched best move.
//!
//! Each tier reveals strictly more than the one below it. `Nudge` and
//! `Outline` only read the position; `Solution` plays the move once to see
//! whether it mates and takes it back before returning.

use crate::errors::{TutorError, TutorResult};
use crate::game_state::chess_rules::ChessRules;
use crate::hints::hint_tier::HintTier;
use crate::search::applied_move::AppliedMove;

pub fn generate_hint<R: ChessRules>(
    position: &mut R,
    mv: R::Move,
    tier: HintTier,
) -> TutorResult<String> {
    let from = position.move_from(mv);
    let from_name = position.square_name(from);
    let piece = position
        .piece_at(from)
        .ok_or_else(|| TutorError::NoPieceOnSquare(from_name.clone()))?;

    let hint = match tier {
        HintTier::Nudge => format!("Try moving your {} from {from_name}.", piece.kind),
        HintTier::Outline => {
            let to_name = position.square_name(position.move_to(mv));
            format!(
                "{}{from_name} to {to_name} - {}",
                piece.kind.upper_symbol(),
                outline_tag(position, mv)
            )
        }
        HintTier::Solution => {
            let san = position.to_san(mv);
            let uci = position.to_uci(mv);
            let verdict = if delivers_mate(position, mv) {
                "Mate!"
            } else {
                "Winning line!"
            };
            format!("Solution: {san} ({uci}). {verdict}")
        }
    };

    Ok(hint)
}

/// Capture outranks check; check is only mentioned for quiet moves.
fn outline_tag<R: ChessRules>(position: &R, mv: R::Move) -> &'static str {
    if position.is_capture(mv) {
        "captures!"
    } else if position.gives_check(mv) {
        "checks!"
    } else {
        "good move"
    }
}

fn delivers_mate<R: ChessRules>(position: &mut R, mv: R::Move) -> bool {
    let trial = AppliedMove::new(position, mv);
    trial.outcome().and_then(|outcome| outcome.winner()).is_some()
}
