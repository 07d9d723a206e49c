use puzzle_tutor::engines::puzzle_tutor::PuzzleTutor;
use puzzle_tutor::errors::TutorError;
use puzzle_tutor::game_state::chess_rules::ChessRules;
use puzzle_tutor::game_state::chess_types::{GameOutcome, Side};
use puzzle_tutor::game_state::game_state::GameState;
use puzzle_tutor::hints::hint_generator::generate_hint;
use puzzle_tutor::hints::hint_tier::HintTier;
use puzzle_tutor::search::board_scoring::{BoardScorer, MaterialScorer, TERMINAL_SCORE};
use puzzle_tutor::search::minimax::{SearchConfig, SearchEngine};
use puzzle_tutor::tables::puzzle_catalog::PuzzleCatalog;

const QUEEN_SACRIFICE_FEN: &str = "1K1k4/1Q6/4n3/8/8/8/3q4/3r4 w - - 0 1";
const QUEEN_MATE_FEN: &str = "7k/5Q2/6K1/8/8/8/8/8 w - - 0 1";
const BACK_RANK_FEN: &str = "6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1";

#[test]
fn mate_in_one_end_to_end() {
    let engine = SearchEngine::<MaterialScorer>::default();

    for (fen, max_depth) in [(QUEEN_MATE_FEN, 2), (BACK_RANK_FEN, 3)] {
        for depth in 1..=max_depth {
            assert_search_mates(&engine, fen, depth);
        }
    }
}

fn assert_search_mates(engine: &SearchEngine, fen: &str, depth: u8) {
    let mut state = GameState::from_fen(fen).expect("FEN should parse");
    let best = engine
        .find_best_move(&mut state, depth)
        .expect("search should find a move");

    let hint = generate_hint(&mut state, best, HintTier::Solution).expect("hint renders");
    assert!(hint.ends_with("Mate!"), "{fen} depth {depth}: {hint}");
    assert_eq!(state.to_fen(), fen);

    state.make_move(best);
    assert_eq!(
        state.outcome(),
        Some(GameOutcome::Decisive {
            winner: Side::White
        })
    );
    assert_eq!(MaterialScorer::default().score(&state), TERMINAL_SCORE);
}

#[test]
fn catalogued_queen_sacrifice_runs_through_every_tier() {
    let tutor = PuzzleTutor::new(
        SearchEngine::default(),
        SearchConfig { depth: 2 },
        PuzzleCatalog::embedded(),
    );

    let reports: Vec<_> = HintTier::ALL
        .iter()
        .map(|&tier| {
            tutor
                .hint(QUEEN_SACRIFICE_FEN, tier)
                .expect("hint should succeed")
        })
        .collect();

    // Same search, same move, whatever the tier.
    for report in &reports {
        assert_eq!(report.uci, reports[0].uci);
        assert_eq!(report.fen, QUEEN_SACRIFICE_FEN);
    }

    let origin = &reports[0].uci[..2];
    let destination = &reports[0].uci[2..4];
    let nudge = &reports[0].hint;
    let outline = &reports[1].hint;
    let solution = &reports[2].hint;

    // White has only a king and a queen here.
    let (kind, symbol) = if nudge.starts_with("Try moving your queen") {
        ("queen", 'Q')
    } else {
        ("king", 'K')
    };
    assert_eq!(*nudge, format!("Try moving your {kind} from {origin}."));
    assert!(outline.starts_with(&format!("{symbol}{origin} to {destination} - ")));
    assert!(
        outline.ends_with("captures!")
            || outline.ends_with("checks!")
            || outline.ends_with("good move")
    );
    assert!(solution.contains(&reports[2].san));
    assert!(solution.contains(&reports[2].uci));
    assert!(!nudge.contains(&reports[2].uci) && !outline.contains(&reports[2].uci));
}

#[test]
fn solution_tier_leaves_board_and_moves_unchanged() {
    let engine = SearchEngine::<MaterialScorer>::default();
    let mut state = GameState::from_fen(QUEEN_SACRIFICE_FEN).expect("FEN should parse");
    let best = engine.find_best_move(&mut state, 2).expect("search runs");

    let fen_before = state.to_fen();
    let moves_before = state.legal_moves();

    generate_hint(&mut state, best, HintTier::Solution).expect("hint renders");

    assert_eq!(state.to_fen(), fen_before);
    assert_eq!(state.legal_moves(), moves_before);
}

#[test]
fn depth_zero_never_returns_a_move() {
    let engine = SearchEngine::<MaterialScorer>::default();
    let mut state = GameState::from_fen(QUEEN_SACRIFICE_FEN).expect("FEN should parse");
    assert!(matches!(
        engine.find_best_move(&mut state, 0),
        Err(TutorError::InvalidDepth { depth: 0 })
    ));
    assert_eq!(state.to_fen(), QUEEN_SACRIFICE_FEN);
}

#[test]
fn json_report_for_catalog_puzzles() {
    let tutor = PuzzleTutor::new(
        SearchEngine::default(),
        SearchConfig { depth: 2 },
        PuzzleCatalog::embedded(),
    );
    for puzzle in tutor.catalog().iter() {
        let report = tutor
            .hint(&puzzle.fen, HintTier::Outline)
            .unwrap_or_else(|e| panic!("{} failed: {e}", puzzle.fen));
        let json = report.to_json().expect("report serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["level"], 2);
        assert_eq!(value["fen"], puzzle.fen.as_str());
    }
}
