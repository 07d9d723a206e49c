//! Structured result of one hint request.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TutorResult;
use crate::hints::hint_tier::HintTier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintReport {
    pub level: u8,
    pub hint: String,
    pub san: String,
    pub uci: String,
    /// Root search score in pawns, two decimals, White's perspective.
    pub evaluation: String,
    pub fen: String,
    pub generated_at: String,
}

impl HintReport {
    pub fn new(
        tier: HintTier,
        hint: String,
        san: String,
        uci: String,
        score: i32,
        fen: String,
    ) -> Self {
        Self {
            level: tier.level(),
            hint,
            san,
            uci,
            evaluation: format_evaluation(score),
            fen,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn render_text(&self) -> String {
        format!(
            "Hint level {}\nHint: {}\nSAN: {}\nUCI: {}\nEvaluation: {}\nFEN: {}",
            self.level, self.hint, self.san, self.uci, self.evaluation, self.fen
        )
    }

    pub fn to_json(&self) -> TutorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn format_evaluation(score: i32) -> String {
    format!("{:.2}", f64::from(score) / 100.0)
}
