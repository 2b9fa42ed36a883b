//! Score Deriver — deterministic scorecard computed from the extracted (or
//! fallback) profile.
//!
//! The formulas are intentionally simple heuristics over the model's
//! self-reported score and skill count, reproduced exactly for compatibility
//! with previously stored reports. `overall_score` is taken from the model
//! without clamping while the two derived scores are clamped to [0, 100];
//! the asymmetry is observed behavior and preserved deliberately.

use serde::Serialize;

use crate::analysis::extractor::ExtractedProfile;

/// The three scores plus the human-readable suggestion returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreCard {
    pub overall_score: i64,
    pub grammar_score: i64,
    pub keyword_match_score: i64,
    pub suggestion: String,
}

/// Derives the scorecard. `raw_output` is the model's reply text (or its
/// fallback replacement) and becomes the suggestion base.
pub fn derive(profile: &ExtractedProfile, raw_output: &str) -> ScoreCard {
    let overall_score = profile.candidate_score;
    let skill_count = profile.skills.len() as i64;

    let grammar_score = (overall_score - 10 + skill_count * 2).clamp(0, 100);
    let keyword_match_score = (skill_count * 5).clamp(0, 100);

    let mut suggestion = raw_output.to_string();
    if !profile.reasons_for_rejection.is_empty() {
        suggestion.push_str("\n\nAreas for Improvement:\n");
        let bullets: Vec<String> = profile
            .reasons_for_rejection
            .iter()
            .map(|reason| format!("- {reason}"))
            .collect();
        suggestion.push_str(&bullets.join("\n"));
    }

    ScoreCard {
        overall_score,
        grammar_score,
        keyword_match_score,
        suggestion,
    }
}
